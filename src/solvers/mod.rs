pub mod central2d;

pub use central2d::{Central2d, RunStats};
