use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::meshing::Mesh;




/// Number of guard zones the central scheme reaches into on each side: the
/// corrector reads one zone beyond the interior, the predictor and slope
/// limiter one more each.
///
pub const MIN_GUARD: usize = 3;




/// Run parameters for the central scheme integrator.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Physical extent of the periodic domain (width, height)
    pub domain: (f64, f64),

    /// Number of interior zones on each axis
    pub size: (usize, usize),

    /// Courant number used to choose the time step
    pub cfl: f64,

    /// Minmod limiter parameter, 1 (most dissipative) to 2 (least)
    pub theta: f64,

    /// Width of the guard zone halo
    #[serde(default = "default_num_guard")]
    pub num_guard: usize,
}

fn default_num_guard() -> usize {
    MIN_GUARD
}




// ============================================================================
impl Default for Config {
    fn default() -> Self {
        Self {
            domain: (2.0, 2.0),
            size: (200, 200),
            cfl: 0.2,
            theta: 2.0,
            num_guard: MIN_GUARD,
        }
    }
}

impl Config {

    pub fn new(domain: (f64, f64), size: (usize, usize), cfl: f64, theta: f64) -> Self {
        Self { domain, size, cfl, theta, num_guard: MIN_GUARD }
    }

    /// Reject configurations the scheme can't be run with. This is called by
    /// the integrator constructor, before any memory is allocated.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        let fail = |message: String| Err(Error::InvalidConfig(message));

        if self.size.0 == 0 || self.size.1 == 0 {
            return fail(format!("zone counts must be positive, got {} x {}", self.size.0, self.size.1));
        }
        if !(self.domain.0.is_finite() && self.domain.1.is_finite() && self.domain.0 > 0.0 && self.domain.1 > 0.0) {
            return fail(format!("domain extent must be positive, got {} x {}", self.domain.0, self.domain.1));
        }
        if !(self.cfl > 0.0 && self.cfl <= 0.5) {
            return fail(format!("cfl number must be in (0, 0.5], got {}", self.cfl));
        }
        if !(1.0..=2.0).contains(&self.theta) {
            return fail(format!("limiter theta must be in [1, 2], got {}", self.theta));
        }
        if self.num_guard < MIN_GUARD {
            return fail(format!("at least {} guard zones are needed, got {}", MIN_GUARD, self.num_guard));
        }
        Ok(())
    }

    pub fn mesh(&self) -> Mesh {
        Mesh {
            area: (0.0..self.domain.0, 0.0..self.domain.1),
            size: (self.size.0 as i64, self.size.1 as i64),
        }
    }
}
