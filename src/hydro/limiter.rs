use crate::num_vec::Vector;




/**
 * Minmod of two numbers: the one with smaller magnitude if they have the same
 * sign, and zero otherwise.
 */
pub fn xmin(a: f64, b: f64) -> f64 {
    (0.5f64.copysign(a) + 0.5f64.copysign(b)) * a.abs().min(b.abs())
}




/**
 * Limited centered difference at `u0`, given its left and right neighbors.
 * The result is zero at a local extremum, and otherwise lies between zero
 * and the unlimited central difference `(up - um) / 2`. The parameter
 * `theta` ranges from 1 (most dissipative) to 2 (least dissipative).
 */
pub fn limited_diff(um: f64, u0: f64, up: f64, theta: f64) -> f64 {
    let d1 = u0 - um;
    let d2 = up - u0;
    xmin(theta * xmin(d1, d2), 0.5 * (d1 + d2))
}




/**
 * Apply `limited_diff` to each component of a state or flux vector.
 */
pub fn limited_diff_vec<const DIM: usize>(
    um: Vector<f64, DIM>,
    u0: Vector<f64, DIM>,
    up: Vector<f64, DIM>,
    theta: f64) -> Vector<f64, DIM>
{
    um.zip3_map(u0, up, |um, u0, up| limited_diff(um, u0, up, theta))
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{limited_diff, limited_diff_vec, xmin};
    use crate::num_vec::Vector;
    use proptest::prelude::*;

    #[test]
    fn xmin_picks_smaller_magnitude_or_zero() {
        assert_eq!(xmin(1.0, 3.0), 1.0);
        assert_eq!(xmin(-4.0, -2.0), -2.0);
        assert_eq!(xmin(-1.0, 3.0), 0.0);
        assert_eq!(xmin(0.0, 3.0), 0.0);
    }

    #[test]
    fn smooth_linear_data_gives_central_difference() {
        assert_eq!(limited_diff(1.0, 2.0, 3.0, 1.0), 1.0);
        assert_eq!(limited_diff(1.0, 2.0, 3.0, 2.0), 1.0);
    }

    #[test]
    fn theta_controls_limiting_near_a_jump() {
        // d1 = 0.1, d2 = 1.0, central difference 0.55
        assert!((limited_diff(0.0, 0.1, 1.1, 1.0) - 0.1).abs() < 1e-15);
        assert!((limited_diff(0.0, 0.1, 1.1, 2.0) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn vector_form_is_componentwise() {
        let um = Vector::new([1.0, 0.0, 5.0]);
        let u0 = Vector::new([2.0, 1.0, 5.0]);
        let up = Vector::new([3.0, 0.0, 5.0]);
        assert_eq!(limited_diff_vec(um, u0, up, 1.5).as_array(), [1.0, 0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn limited_diff_is_bounded_by_central_difference(
            um in -10.0f64..10.0,
            u0 in -10.0f64..10.0,
            up in -10.0f64..10.0,
            theta in 1.0f64..=2.0,
        ) {
            let du = limited_diff(um, u0, up, theta);
            let central = 0.5 * (up - um);
            prop_assert!(du.abs() <= central.abs() + 1e-12);
            prop_assert!(du.abs() <= (up - um).abs() + 1e-12);
            prop_assert!(du == 0.0 || du.signum() == central.signum());
        }

        #[test]
        fn limited_diff_vanishes_at_extrema(
            u0 in -10.0f64..10.0,
            a in 0.0f64..5.0,
            b in 0.0f64..5.0,
            theta in 1.0f64..=2.0,
        ) {
            prop_assert_eq!(limited_diff(u0 - a, u0, u0 - b, theta), 0.0);
            prop_assert_eq!(limited_diff(u0 + a, u0, u0 + b, theta), 0.0);
        }
    }
}
