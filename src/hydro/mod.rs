//! Physics for the integrator: the conservation-law capability the central
//! scheme is generic over, a concrete shallow water model, and the slope
//! limiter used to difference state and flux fields.

pub mod limiter;
pub mod shallow;

use crate::num_vec::Vector;

/// The conserved quantities at one grid zone.
///
pub type StateVector<const NUM_FIELDS: usize> = Vector<f64, NUM_FIELDS>;

/// A hyperbolic system of conservation laws in two dimensions,
///
///   U_t + F(U)_x + G(U)_y = 0
///
/// The integrator needs only the two flux functions and a bound on the
/// characteristic wave speeds; no Riemann solver or flux Jacobian. All three
/// functions must be defined for any state whose first component is
/// strictly positive.
///
pub trait ConservationLaw<const NUM_FIELDS: usize>: Sync {
    /// Return the flux of conserved quantities in the x direction.
    fn flux_x(&self, u: &StateVector<NUM_FIELDS>) -> StateVector<NUM_FIELDS>;

    /// Return the flux of conserved quantities in the y direction.
    fn flux_y(&self, u: &StateVector<NUM_FIELDS>) -> StateVector<NUM_FIELDS>;

    /// Return non-negative upper bounds `(cx, cy)` on the fastest signal
    /// speed along each axis.
    fn wave_speed(&self, u: &StateVector<NUM_FIELDS>) -> (f64, f64);
}
