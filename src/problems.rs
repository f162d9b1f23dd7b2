//! Initial conditions for the shallow water equations on the default 2 x 2
//! domain, and the functions used to render a solution as an image.

use std::str::FromStr;
use crate::hydro::StateVector;
use crate::num_vec::Vector;

/// Circular dam break: a column of water of depth 1.5 and radius 0.5 at the
/// domain center, surrounded by water of depth 1.
///
pub fn dam_break(x: f64, y: f64) -> StateVector<3> {
    let (x, y) = (x - 1.0, y - 1.0);
    let h = if x * x + y * y < 0.25 + 1e-5 { 1.5 } else { 1.0 };
    Vector::new([h, 0.0, 0.0])
}

/// Still pond: uniform depth and no motion, a steady state of the equations.
///
pub fn pond(_x: f64, _y: f64) -> StateVector<3> {
    Vector::new([1.0, 0.0, 0.0])
}

/// A smooth, small amplitude Gaussian bump on a still pond.
///
pub fn wave(x: f64, y: f64) -> StateVector<3> {
    let r2 = (x - 1.0).powi(2) + (y - 1.0).powi(2);
    Vector::new([1.0 + 0.1 * f64::exp(-25.0 * r2), 0.0, 0.0])
}

/// Plot the depth, with maximum value assumed to be 3.
///
pub fn show_height(u: &StateVector<3>) -> i64 {
    (255.0 * (u[0] / 3.0)) as i64
}

/// Plot the momentum magnitude, with maximum value assumed to be 2.5.
///
pub fn show_momentum(u: &StateVector<3>) -> i64 {
    (255.0 * (u[1] * u[1] + u[2] * u[2]).sqrt() / 2.5) as i64
}

/// Names the initial conditions selectable from the command line.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    DamBreak,
    Pond,
    Wave,
}

impl Problem {
    pub fn initial_state(self) -> fn(f64, f64) -> StateVector<3> {
        match self {
            Problem::DamBreak => dam_break,
            Problem::Pond => pond,
            Problem::Wave => wave,
        }
    }
}

impl FromStr for Problem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dam-break" => Ok(Problem::DamBreak),
            "pond" => Ok(Problem::Pond),
            "wave" => Ok(Problem::Wave),
            _ => Err(format!("unknown problem '{}' (expected dam-break, pond, or wave)", s)),
        }
    }
}

/// Names the quantity rendered into the output images.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Show {
    Height,
    Momentum,
}

impl Show {
    pub fn display_map(self) -> fn(&StateVector<3>) -> i64 {
        match self {
            Show::Height => show_height,
            Show::Momentum => show_momentum,
        }
    }
}

impl FromStr for Show {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(Show::Height),
            "momentum" => Ok(Show::Momentum),
            _ => Err(format!("unknown quantity '{}' (expected height or momentum)", s)),
        }
    }
}
