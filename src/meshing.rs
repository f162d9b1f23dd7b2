use core::ops::Range;
use crate::index_space::IndexSpace;
use crate::patch::Patch;

/// A simple rectilinear structured mesh
///
#[derive(Clone, Debug)]
pub struct Mesh {
    pub area: (Range<f64>, Range<f64>),
    pub size: (i64, i64),
}

impl Mesh {
    pub fn cell_spacing(&self) -> (f64, f64) {
        let d0 = (self.area.0.end - self.area.0.start) / self.size.0 as f64;
        let d1 = (self.area.1.end - self.area.1.start) / self.size.1 as f64;
        (d0, d1)
    }

    pub fn cell_center(&self, index: (i64, i64)) -> (f64, f64) {
        let (d0, d1) = self.cell_spacing();
        let x0 = self.area.0.start + d0 * (index.0 as f64 + 0.5);
        let x1 = self.area.1.start + d1 * (index.1 as f64 + 0.5);
        (x0, x1)
    }

    pub fn cell_area(&self) -> f64 {
        let (d0, d1) = self.cell_spacing();
        d0 * d1
    }

    pub fn total_zones(&self) -> i64 {
        self.size.0 * self.size.1
    }

    /// The interior index space covered by this mesh.
    ///
    pub fn index_space(&self) -> IndexSpace {
        IndexSpace::new(0..self.size.0, 0..self.size.1)
    }
}

/// Fill every guard zone of the patch, corners included, with a copy of its
/// periodic image in the interior. Interior values are not touched.
///
pub fn apply_periodic<T: Copy>(patch: &mut Patch<T>) {
    let (i0, j0) = patch.interior().start();
    let (i1, j1) = patch.interior().end();
    let (x0, y0) = patch.extended().start();
    let (x1, y1) = patch.extended().end();

    let li = IndexSpace::new(x0..i0, y0..y1);
    let ri = IndexSpace::new(i1..x1, y0..y1);
    let lj = IndexSpace::new(i0..i1, y0..j0);
    let rj = IndexSpace::new(i0..i1, j1..y1);

    for index in li.iter().chain(ri.iter()).chain(lj.iter()).chain(rj.iter()) {
        let value = *patch.get_wrapped(index);
        *patch.get_mut(index) = value;
    }
}

#[cfg(test)]
mod test {
    use super::{apply_periodic, Mesh};
    use crate::index_space::range2d;
    use crate::patch::Patch;

    #[test]
    fn guard_zones_hold_periodic_images() {
        let mut patch = Patch::from_function(range2d(0..5, 0..7), 3, |(i, j)| (i * 100 + j) as f64);
        apply_periodic(&mut patch);

        for index in patch.extended().clone().iter() {
            assert_eq!(patch.get(index), patch.get_wrapped(index));
        }
        assert_eq!(*patch.get((-1, -1)), 406.0);
        assert_eq!(*patch.get((7, 9)), 202.0);
    }

    #[test]
    fn periodic_fill_leaves_interior_alone() {
        let mut patch = Patch::from_function(range2d(0..4, 0..4), 3, |(i, j)| (i + j) as f64);
        let before: Vec<_> = patch.iter_interior().map(|(_, &u)| u).collect();
        apply_periodic(&mut patch);
        let after: Vec<_> = patch.iter_interior().map(|(_, &u)| u).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn cell_centers_are_offset_by_half_a_zone() {
        let mesh = Mesh { area: (0.0..2.0, 0.0..2.0), size: (4, 4) };
        assert_eq!(mesh.cell_center((0, 0)), (0.25, 0.25));
        assert_eq!(mesh.cell_center((3, 1)), (1.75, 0.75));
        assert_eq!(mesh.cell_area(), 0.25);
        assert_eq!(mesh.total_zones(), 16);
    }
}
