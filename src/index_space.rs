use core::ops::Range;




/**
 * Identifier for a Cartesian axis
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    I,
    J,
}




// ============================================================================
impl Axis {

    /**
     * Return the index displaced by `delta` along this axis.
     */
    pub fn step(self, index: (i64, i64), delta: i64) -> (i64, i64) {
        match self {
            Axis::I => (index.0 + delta, index.1),
            Axis::J => (index.0, index.1 + delta),
        }
    }
}




/**
 * Represents a rectangular region in a discrete index space
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSpace {
    di: Range<i64>,
    dj: Range<i64>,
}




/**
 * Describes a rectangular index space. The index type is signed 64-bit integer.
 */
impl IndexSpace {


    pub fn new(di: Range<i64>, dj: Range<i64>) -> Self {

        assert!(
            di.start <= di.end && dj.start <= dj.end,
            "index space has negative volume");

        Self { di, dj }
    }


    /**
     * Return the number of indexes on each axis.
     */
    pub fn dim(&self) -> (usize, usize) {
        ((self.di.end - self.di.start) as usize,
         (self.dj.end - self.dj.start) as usize)
    }


    /**
     * Return the number of elements in this index space.
     */
    pub fn len(&self) -> usize {
        let (l, m) = self.dim();
        l * m
    }


    /**
     * Return the minimum index (inclusive).
     */
    pub fn start(&self) -> (i64, i64) {
        (self.di.start, self.dj.start)
    }


    /**
     * Return the maximum index (exclusive).
     */
    pub fn end(&self) -> (i64, i64) {
        (self.di.end, self.dj.end)
    }


    /**
     * Determine whether this index space contains the given index.
     */
    pub fn contains(&self, index: (i64, i64)) -> bool {
        self.di.contains(&index.0) && self.dj.contains(&index.1)
    }


    /**
     * Expand this index space by the given number of elements on each axis.
     */
    pub fn extend_all(&self, delta: i64) -> Self {
        Self::new(
            self.di.start - delta .. self.di.end + delta,
            self.dj.start - delta .. self.dj.end + delta)
    }


    /**
     * Trim this index space by the given number of elements on each axis.
     */
    pub fn trim_all(&self, delta: i64) -> Self {
        self.extend_all(-delta)
    }


    /**
     * Return the linear offset for the given index, in a row-major memory
     * buffer aligned with the start of this index space.
     */
    pub fn row_major_offset(&self, index: (i64, i64)) -> usize {
        let i = (index.0 - self.di.start) as usize;
        let j = (index.1 - self.dj.start) as usize;
        let m = (self.dj.end - self.dj.start) as usize;
        i * m + j
    }


    /**
     * Inverse of `row_major_offset`: return the index stored at the given
     * linear offset of a buffer aligned with this index space.
     */
    pub fn index_at(&self, offset: usize) -> (i64, i64) {
        let m = (self.dj.end - self.dj.start) as usize;
        (self.di.start + (offset / m) as i64,
         self.dj.start + (offset % m) as i64)
    }


    /**
     * Map an index which may lie outside this space onto the canonical
     * index inside it, treating both axes as periodic. This is the only
     * place where periodic addressing arithmetic is done.
     */
    pub fn wrap(&self, index: (i64, i64)) -> (i64, i64) {
        let (l, m) = self.dim();
        let i = (index.0 - self.di.start).rem_euclid(l as i64) + self.di.start;
        let j = (index.1 - self.dj.start).rem_euclid(m as i64) + self.dj.start;
        (i, j)
    }


    /**
     * Return an iterator which traverses the index space in row-major order
     * (C-like; the final index increases fastest).
     */
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.di.clone().flat_map(move |i| self.dj.clone().map(move |j| (i, j)))
    }
}




/**
 * Less imposing factory function to construct an IndexSpace object.
 */
pub fn range2d(di: Range<i64>, dj: Range<i64>) -> IndexSpace {
    IndexSpace::new(di, dj)
}
