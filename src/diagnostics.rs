use std::fmt;
use crate::error::Error;
use crate::hydro::StateVector;
use crate::patch::Patch;

/// Conserved totals and the range of the first (depth-like) component over
/// the interior of a patch. The numerical method conserves the totals up to
/// rounding errors, and the depth must remain strictly positive.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Totals<const NUM_FIELDS: usize> {
    /// Area-weighted sum of each conserved component
    pub sums: StateVector<NUM_FIELDS>,

    /// Minimum and maximum of the first component
    pub depth_range: (f64, f64),
}

impl<const NUM_FIELDS: usize> Totals<NUM_FIELDS> {
    pub fn volume(&self) -> f64 {
        self.sums[0]
    }
}

impl Totals<3> {
    /// Return the total momentum, for systems whose second and third
    /// components are the momentum densities.
    ///
    pub fn momentum(&self) -> (f64, f64) {
        (self.sums[1], self.sums[2])
    }
}

impl<const NUM_FIELDS: usize> fmt::Display for Totals<NUM_FIELDS> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} volume;", self.sums[0])?;

        if NUM_FIELDS >= 3 {
            write!(fmt, " ({}, {}) momentum;", self.sums[1], self.sums[2])?;
        }
        write!(fmt, " range [{}, {}]", self.depth_range.0, self.depth_range.1)
    }
}

/// Sum the conserved quantities over the interior zones (weighted by the zone
/// area) and find the depth range. A depth which is not strictly positive
/// (or is NaN) means the solution has become physically invalid, and is
/// returned as an error with the first offending zone.
///
pub fn solution_check<const NUM_FIELDS: usize>(
    u: &Patch<StateVector<NUM_FIELDS>>,
    cell_area: f64,
) -> Result<Totals<NUM_FIELDS>, Error> {
    let mut sums = StateVector::<NUM_FIELDS>::default();
    let mut hmin = f64::INFINITY;
    let mut hmax = f64::NEG_INFINITY;

    for (index, &uij) in u.iter_interior() {
        let h = uij[0];

        if !(h > 0.0) {
            return Err(Error::NonPositiveDepth { index, value: h });
        }
        sums = sums + uij;
        hmin = hmin.min(h);
        hmax = hmax.max(h);
    }

    Ok(Totals {
        sums: sums * cell_area,
        depth_range: (hmin, hmax),
    })
}
