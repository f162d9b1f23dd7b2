//! Tidepool advances two-dimensional hyperbolic systems of conservation
//! laws, like the shallow water equations, on a uniform periodic grid. It
//! uses the second-order central scheme of Jiang and Tadmor: a staggered
//! predictor-corrector method with a minmod-family slope limiter, which needs
//! neither Riemann solvers nor flux Jacobians. The physics is supplied as an
//! implementation of `hydro::ConservationLaw`; the integrator in
//! `solvers::central2d` is generic over it.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod hydro;
pub mod index_space;
pub mod meshing;
pub mod num_vec;
pub mod output;
pub mod patch;
pub mod problems;
pub mod solvers;

pub use config::Config;
pub use error::Error;
pub use solvers::Central2d;
