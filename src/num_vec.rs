use core::ops::{Add, Sub, Mul, Div, Index, IndexMut};




/**
 * A statically-sized numeric vector over a generic scalar data type T, which
 * supports arithmetic operations also supported by T. The conserved state at
 * a single grid cell, and each of the derived flux and slope vectors, are
 * represented as `Vector<f64, NUM_FIELDS>`.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const DIM: usize> {
    data: [T; DIM]
}




// ============================================================================
impl<T: Copy, const DIM: usize> Vector<T, DIM> {

    pub fn new(data: [T; DIM]) -> Self {
        Self { data }
    }

    pub fn as_array(&self) -> [T; DIM] {
        self.data
    }

    /**
     * Apply a function to each component.
     */
    pub fn map<U, F>(self, mut f: F) -> Vector<U, DIM>
    where
        U: Copy + Default,
        F: FnMut(T) -> U
    {
        let mut data = [U::default(); DIM];

        for (x, y) in data.iter_mut().zip(self.data) {
            *x = f(y)
        }
        Vector { data }
    }

    /**
     * Combine this vector with two others, component by component. This is
     * the shape of a three-point stencil applied to each field.
     */
    pub fn zip3_map<U, F>(self, b: Self, c: Self, mut f: F) -> Vector<U, DIM>
    where
        U: Copy + Default,
        F: FnMut(T, T, T) -> U
    {
        let mut data = [U::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = f(self.data[i], b.data[i], c.data[i])
        }
        Vector { data }
    }
}

impl<T: Copy + Default, const DIM: usize> Default for Vector<T, DIM> {
    fn default() -> Self {
        Self { data: [T::default(); DIM] }
    }
}





// ============================================================================
impl<T, U, V, const DIM: usize> Add<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Add<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn add(self, other: Vector<U, DIM>) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].add(other[i])
        }
        Self::Output { data }
    }
}

impl<T, U, V, const DIM: usize> Sub<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Sub<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn sub(self, other: Vector<U, DIM>) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].sub(other[i])
        }
        Self::Output { data }
    }
}

impl<T, U, V, const DIM: usize> Mul<U> for Vector<T, DIM>
where
    T: Copy + Mul<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn mul(self, other: U) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].mul(other)
        }
        Self::Output { data }
    }
}

impl<T, U, V, const DIM: usize> Div<U> for Vector<T, DIM>
where
    T: Copy + Div<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn div(self, other: U) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].div(other)
        }
        Self::Output { data }
    }
}




// ============================================================================
impl<T, const DIM: usize> Index<usize> for Vector<T, DIM> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const DIM: usize> IndexMut<usize> for Vector<T, DIM> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Vector;

    #[test]
    fn arithmetic_is_componentwise() {
        let x = Vector::new([1.0, 2.0, 3.0]);
        let y = Vector::new([0.5, 0.5, 0.5]);
        assert_eq!((x + y).as_array(), [1.5, 2.5, 3.5]);
        assert_eq!((x - y).as_array(), [0.5, 1.5, 2.5]);
        assert_eq!((x * 2.0).as_array(), [2.0, 4.0, 6.0]);
        assert_eq!((x / 2.0).as_array(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn zip3_map_sees_matching_components() {
        let a = Vector::new([1.0, 10.0]);
        let b = Vector::new([2.0, 20.0]);
        let c = Vector::new([3.0, 30.0]);
        let s = a.zip3_map(b, c, |a, b, c| a + b + c);
        assert_eq!(s.as_array(), [6.0, 60.0]);
    }

    #[test]
    fn vectors_can_be_indexed_and_mutated() {
        let mut x: Vector<f64, 3> = Vector::default();
        x[1] = 4.0;
        assert_eq!(x[0], 0.0);
        assert_eq!(x[1], 4.0);
        assert_eq!(x.map(|v| v * v).as_array(), [0.0, 16.0, 0.0]);
    }
}
