use super::{ConservationLaw, StateVector};
use crate::num_vec::Vector;




/**
 * The shallow water (St. Venant) equations. The conserved state is
 * `U = (h, hu, hv)`: the depth and the two components of the horizontal
 * momentum of each water column, with fluxes
 *
 *   F = (hu, hu^2 + g h^2 / 2, huv)
 *   G = (hv, huv, hv^2 + g h^2 / 2)
 *
 * The characteristic speeds along each axis are bounded by `|u| + sqrt(g h)`.
 */
#[derive(Clone, Copy, Debug)]
pub struct ShallowWater {
    gravity: f64,
}




// ============================================================================
impl ShallowWater {

    pub fn new(gravity: f64) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    fn hydrostatic_pressure(&self, h: f64) -> f64 {
        0.5 * self.gravity * h * h
    }
}

impl Default for ShallowWater {
    fn default() -> Self {
        Self::new(9.8)
    }
}




// ============================================================================
impl ConservationLaw<3> for ShallowWater {

    fn flux_x(&self, u: &StateVector<3>) -> StateVector<3> {
        let [h, hu, hv] = u.as_array();
        Vector::new([
            hu,
            hu * hu / h + self.hydrostatic_pressure(h),
            hu * hv / h,
        ])
    }

    fn flux_y(&self, u: &StateVector<3>) -> StateVector<3> {
        let [h, hu, hv] = u.as_array();
        Vector::new([
            hv,
            hu * hv / h,
            hv * hv / h + self.hydrostatic_pressure(h),
        ])
    }

    fn wave_speed(&self, u: &StateVector<3>) -> (f64, f64) {
        let [h, hu, hv] = u.as_array();
        let root_gh = (self.gravity * h).sqrt();
        ((hu / h).abs() + root_gh, (hv / h).abs() + root_gh)
    }
}
