use crate::index_space::IndexSpace;




/**
 * A patch is a mapping from a rectangular interior index space to associated
 * field values, surrounded on all four sides by a halo of guard (ghost)
 * zones of fixed width. The mapping is backed by a flat array laid out in
 * row-major order over the extended (interior + guard) index space.
 *
 * Interior indexes run from `(0, 0)` to `(ni - 1, nj - 1)`; guard zones have
 * negative indexes or indexes `>= ni` (`>= nj`). The patch can also be
 * addressed by padded index, which is the interior index shifted by the guard
 * width so that it starts at `(0, 0)`, and by wrapped index, which maps any
 * index periodically onto the interior.
 */
#[derive(Clone, Debug)]
pub struct Patch<T> {
    interior: IndexSpace,
    extended: IndexSpace,
    num_guard: usize,
    data: Vec<T>,
}




// ============================================================================
impl<T: Copy + Default> Patch<T> {


    /**
     * Generate a patch over the given interior space and guard width, with
     * all values (guard zones included) set to `T::default()`.
     */
    pub fn zeros(interior: IndexSpace, num_guard: usize) -> Self {
        Self::from_function(interior, num_guard, |_| T::default())
    }


    /**
     * Generate a patch with interior values defined from a closure. Guard
     * zones are set to `T::default()`.
     */
    pub fn from_function<F>(interior: IndexSpace, num_guard: usize, f: F) -> Self
    where
        F: Fn((i64, i64)) -> T
    {
        let extended = interior.extend_all(num_guard as i64);
        let data = extended
            .iter()
            .map(|index| if interior.contains(index) { f(index) } else { T::default() })
            .collect();

        Self {
            interior,
            extended,
            num_guard,
            data,
        }
    }
}




// ============================================================================
impl<T> Patch<T> {


    pub fn interior(&self) -> &IndexSpace {
        &self.interior
    }


    /**
     * Return the index space of the whole backing array, guard zones
     * included.
     */
    pub fn extended(&self) -> &IndexSpace {
        &self.extended
    }


    /**
     * Return the logical dimensions (the memory extent) of the backing array.
     */
    pub fn padded_dim(&self) -> (usize, usize) {
        self.extended.dim()
    }


    /**
     * Return a reference to the value at an interior or guard index.
     * Panics if the index is outside the extended index space.
     */
    pub fn get(&self, index: (i64, i64)) -> &T {
        self.validate_index(index);
        &self.data[self.extended.row_major_offset(index)]
    }


    pub fn get_mut(&mut self, index: (i64, i64)) -> &mut T {
        self.validate_index(index);
        let n = self.extended.row_major_offset(index);
        &mut self.data[n]
    }


    /**
     * Return a reference to the value at a padded index, where `(0, 0)` is
     * the lower-left corner of the guard zone halo.
     */
    pub fn get_padded(&self, index: (usize, usize)) -> &T {
        let g = self.num_guard as i64;
        self.get((index.0 as i64 - g, index.1 as i64 - g))
    }


    /**
     * Return a reference to the interior value which is the periodic image
     * of the given index. Never fails.
     */
    pub fn get_wrapped(&self, index: (i64, i64)) -> &T {
        self.get(self.interior.wrap(index))
    }


    /**
     * The flat backing array, in row-major order over the extended space.
     */
    pub fn data(&self) -> &[T] {
        &self.data
    }


    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }


    /**
     * Iterate over the interior indexes and values, in row-major order.
     */
    pub fn iter_interior(&self) -> impl Iterator<Item = ((i64, i64), &T)> + '_ {
        self.interior.iter().map(move |index| (index, self.get(index)))
    }


    fn validate_index(&self, index: (i64, i64)) {
        if !self.extended.contains(index) {
            let (i0, j0) = self.extended.start();
            let (i1, j1) = self.extended.end();
            panic!("index ({} {}) out of range on patch ({}..{} {}..{})",
                index.0,
                index.1,
                i0,
                i1,
                j0,
                j1);
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Patch;
    use crate::index_space::range2d;

    #[test]
    fn patch_indexing_works() {
        let patch = Patch::from_function(range2d(0..6, 0..4), 3, |(i, j)| (i + 10 * j) as f64);
        assert_eq!(patch.padded_dim(), (12, 10));
        assert_eq!(*patch.get((5, 3)), 35.0);
        assert_eq!(*patch.get_padded((3, 3)), 0.0);
        assert_eq!(*patch.get_padded((4, 5)), 21.0);
        assert_eq!(*patch.get((-3, -3)), 0.0);
        assert_eq!(patch.data().len(), 120);
    }

    #[test]
    fn wrapped_access_reads_periodic_image() {
        let patch = Patch::from_function(range2d(0..6, 0..4), 3, |(i, j)| (i + 10 * j) as f64);
        assert_eq!(*patch.get_wrapped((-1, 0)), 5.0);
        assert_eq!(*patch.get_wrapped((6, 4)), 0.0);
        assert_eq!(*patch.get_wrapped((-2, -1)), 34.0);
        assert_eq!(*patch.get_wrapped((100, 101)), 14.0);
    }

    #[test]
    fn interior_iteration_skips_guard_zones() {
        let patch = Patch::from_function(range2d(0..3, 0..3), 2, |_| 1.0);
        assert_eq!(patch.iter_interior().count(), 9);
        assert_eq!(patch.data().iter().sum::<f64>(), 9.0);
    }

    #[test]
    #[should_panic]
    fn raw_access_outside_extended_space_panics() {
        let patch: Patch<f64> = Patch::zeros(range2d(0..3, 0..3), 1);
        patch.get((4, 0));
    }
}
