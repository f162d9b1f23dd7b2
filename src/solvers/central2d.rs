//! The Jiang-Tadmor central scheme for hyperbolic systems in two space
//! dimensions. Unlike Godunov-type methods it needs neither Riemann solvers
//! nor flux Jacobians: only the fluxes and a bound on the wave speeds of the
//! system. The scheme is second order, and oscillation-free thanks to the
//! minmod-family slope limiter applied to both the solution and the fluxes.
//!
//! The scheme alternates between two staggered grids. A half-step computes
//! the solution at the corners of the zones it started from. The integrator
//! writes those values into the `next` buffer at canonical indexes (shifted
//! back by the staggering offset), then swaps `current` and `next`, so every
//! half-step starts on an array aligned with the canonical grid. Time steps
//! are always taken in pairs, so at the end of a full step the solution is
//! again located at the zone centers.
//!
//! Ref: G.-S. Jiang and E. Tadmor, Nonoscillatory central schemes for
//! multidimensional hyperbolic conservation laws, SIAM J. Sci. Comput. 19
//! (1998).

use log::{debug, error, info};
use rayon::prelude::*;
use crate::config::Config;
use crate::diagnostics::{solution_check, Totals};
use crate::error::Error;
use crate::hydro::limiter::limited_diff_vec;
use crate::hydro::{ConservationLaw, StateVector};
use crate::index_space::Axis;
use crate::meshing::{apply_periodic, Mesh};
use crate::output::Checkpoint;
use crate::patch::Patch;

/// Floor for the wave speed reduction, keeping the CFL divisor positive on
/// an all-quiescent grid.
///
pub const WAVE_SPEED_FLOOR: f64 = 1.0e-15;

/// Summary of the time steps taken by one call to `Central2d::run`.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    /// Number of full (two half-step) steps taken
    pub full_steps: u64,

    /// Smallest and largest half-step size
    pub min_dt: f64,
    pub max_dt: f64,

    /// Largest value of `dt * max(cx / dx, cy / dy)` over the half-steps on
    /// which the time step was chosen
    pub max_courant: f64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            full_steps: 0,
            min_dt: f64::INFINITY,
            max_dt: 0.0,
            max_courant: 0.0,
        }
    }
}

impl RunStats {
    fn record(&mut self, dt: f64, courant: f64) {
        self.full_steps += 1;
        self.min_dt = self.min_dt.min(dt);
        self.max_dt = self.max_dt.max(dt);
        self.max_courant = self.max_courant.max(courant);
    }
}

/// Central scheme integrator on a uniform, periodic grid, generic over the
/// system of conservation laws `L` with `NUM_FIELDS` conserved quantities.
///
/// All the arrays below cover the same guard-extended index space. The flux
/// and difference arrays are scratch: they are recomputed from `current` on
/// every half-step.
///
pub struct Central2d<L, const NUM_FIELDS: usize>
where
    L: ConservationLaw<NUM_FIELDS>,
{
    law: L,
    config: Config,
    mesh: Mesh,
    time: f64,
    iteration: u64,
    current: Patch<StateVector<NUM_FIELDS>>,
    next: Patch<StateVector<NUM_FIELDS>>,
    flux_x: Patch<StateVector<NUM_FIELDS>>,
    flux_y: Patch<StateVector<NUM_FIELDS>>,
    du_dx: Patch<StateVector<NUM_FIELDS>>,
    du_dy: Patch<StateVector<NUM_FIELDS>>,
    df_dx: Patch<StateVector<NUM_FIELDS>>,
    dg_dy: Patch<StateVector<NUM_FIELDS>>,
}

impl<L, const NUM_FIELDS: usize> Central2d<L, NUM_FIELDS>
where
    L: ConservationLaw<NUM_FIELDS>,
{
    /// Allocate an integrator for the given physics and run parameters. The
    /// configuration is validated before anything is allocated. The solution
    /// is zero until `init` is called.
    ///
    pub fn new(law: L, config: Config) -> Result<Self, Error> {
        config.validate()?;

        let mesh = config.mesh();
        let zeros = Patch::zeros(mesh.index_space(), config.num_guard);

        Ok(Self {
            law,
            config,
            mesh,
            time: 0.0,
            iteration: 0,
            current: zeros.clone(),
            next: zeros.clone(),
            flux_x: zeros.clone(),
            flux_y: zeros.clone(),
            du_dx: zeros.clone(),
            du_dy: zeros.clone(),
            df_dx: zeros.clone(),
            dg_dy: zeros,
        })
    }

    /// Set the solution by calling a function of the zone center coordinates
    /// `(x, y)` on each interior zone. This resets the simulation clock.
    ///
    pub fn init<F>(&mut self, f: F)
    where
        F: Fn(f64, f64) -> StateVector<NUM_FIELDS>,
    {
        for index in self.mesh.index_space().iter() {
            let (x, y) = self.mesh.cell_center(index);
            *self.current.get_mut(index) = f(x, y);
        }
        apply_periodic(&mut self.current);
        self.time = 0.0;
        self.iteration = 0;
    }

    /// Advance the solution from the current time to a finite `tfinal`. An even
    /// number of half-steps is always taken, the last pair shortened to land
    /// exactly on `tfinal`, so the solution ends on the canonical grid.
    ///
    /// The solution is checked for positivity at the start of every
    /// half-step and once more at the end; a violation stops the run
    /// immediately and is returned.
    ///
    pub fn run(&mut self, tfinal: f64) -> Result<RunStats, Error> {
        if !tfinal.is_finite() || !(tfinal > self.time) {
            return Err(Error::InvalidTimeHorizon { time: self.time, tfinal });
        }

        let (dx, dy) = self.mesh.cell_spacing();
        let mut stats = RunStats::default();
        let mut done = false;

        while !done {
            let mut dt = 0.0;

            for io in 0..2 {
                apply_periodic(&mut self.current);
                self.check()?;

                let (cx, cy) = self.compute_fg_speeds();
                self.limited_derivs();

                let rate = f64::max(cx / dx, cy / dy);

                if io == 0 {
                    dt = self.config.cfl / rate;

                    if self.time + 2.0 * dt >= tfinal {
                        dt = (tfinal - self.time) / 2.0;
                        done = true;
                    }
                    stats.record(dt, dt * rate);
                } else {
                    debug!("staggered half-step courant number {:.4}", dt * rate);
                }

                self.compute_step(io, dt);
                self.time += dt;
            }
            self.iteration += 1;
            debug!("[{}] t={:.6} dt={:.4e}", self.iteration, self.time, dt);
        }
        self.time = tfinal;

        apply_periodic(&mut self.current);
        let totals = self.check()?;

        info!(
            "reached t={:.4} in {} steps (dt {:.3e} .. {:.3e}); {}",
            self.time, stats.full_steps, stats.min_dt, stats.max_dt, totals
        );
        Ok(stats)
    }

    /// Return the conserved totals and depth range of the current solution.
    ///
    pub fn totals(&self) -> Result<Totals<NUM_FIELDS>, Error> {
        solution_check(&self.current, self.mesh.cell_area())
    }

    /// Return the solution at an interior zone.
    ///
    pub fn state(&self, index: (i64, i64)) -> &StateVector<NUM_FIELDS> {
        self.current.get(index)
    }

    /// Return the solution array, guard zones included.
    ///
    pub fn solution(&self) -> &Patch<StateVector<NUM_FIELDS>> {
        &self.current
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Return the number of full steps taken since `init`.
    ///
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Capture the interior solution, clock, and configuration.
    ///
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            config: self.config.clone(),
            time: self.time,
            iteration: self.iteration,
            num_fields: NUM_FIELDS,
            data: self
                .current
                .iter_interior()
                .flat_map(|(_, u)| u.as_array())
                .collect(),
        }
    }

    /// Rebuild an integrator from a checkpoint. The checkpoint must match
    /// the number of conserved fields and the grid size it declares, and
    /// hold a physically valid solution.
    ///
    pub fn from_checkpoint(law: L, checkpoint: Checkpoint) -> Result<Self, Error> {
        let Checkpoint { config, time, iteration, num_fields, data } = checkpoint;

        if !time.is_finite() || time < 0.0 {
            return Err(Error::Checkpoint(format!("invalid simulation time {}", time)));
        }

        if num_fields != NUM_FIELDS {
            return Err(Error::Checkpoint(format!("expected {} fields, found {}", NUM_FIELDS, num_fields)));
        }

        let mut solver = Self::new(law, config)?;
        let expected = solver.mesh.total_zones() as usize * NUM_FIELDS;

        if data.len() != expected {
            return Err(Error::Checkpoint(format!("expected {} values, found {}", expected, data.len())));
        }

        for (index, chunk) in solver.mesh.index_space().iter().zip(data.chunks_exact(NUM_FIELDS)) {
            let u = solver.current.get_mut(index);
            for (m, x) in chunk.iter().enumerate() {
                u[m] = *x;
            }
        }
        apply_periodic(&mut solver.current);
        solver.totals()?;
        solver.time = time;
        solver.iteration = iteration;
        Ok(solver)
    }
}

// ============================================================================
impl<L, const NUM_FIELDS: usize> Central2d<L, NUM_FIELDS>
where
    L: ConservationLaw<NUM_FIELDS>,
{
    fn check(&self) -> Result<Totals<NUM_FIELDS>, Error> {
        match self.totals() {
            Ok(totals) => {
                debug!("{}", totals);
                Ok(totals)
            }
            Err(e) => {
                error!("t={:.6} step {}: {}", self.time, self.iteration, e);
                Err(e)
            }
        }
    }

    /// Evaluate the fluxes at every zone (guard zones included), and return
    /// the largest wave speed on each axis, for the CFL condition.
    ///
    fn compute_fg_speeds(&mut self) -> (f64, f64) {
        let law = &self.law;
        let u = self.current.data();

        self.flux_x
            .data_mut()
            .par_iter_mut()
            .zip(self.flux_y.data_mut().par_iter_mut())
            .zip(u.par_iter())
            .for_each(|((f, g), u)| {
                *f = law.flux_x(u);
                *g = law.flux_y(u);
            });

        u.par_iter()
            .map(|u| law.wave_speed(u))
            .reduce(
                || (WAVE_SPEED_FLOOR, WAVE_SPEED_FLOOR),
                |a, b| (a.0.max(b.0), a.1.max(b.1)),
            )
    }

    /// Compute limited differences of the solution along both axes, of the
    /// x-flux along x, and of the y-flux along y. These are needed on the
    /// interior plus the first ring of guard zones.
    ///
    fn limited_derivs(&mut self) {
        let theta = self.config.theta;
        let space = self.current.extended().clone();
        let inner = space.trim_all(1);
        let u = &self.current;
        let f = &self.flux_x;
        let g = &self.flux_y;

        let diff = |q: &Patch<StateVector<NUM_FIELDS>>, index: (i64, i64), axis: Axis| {
            limited_diff_vec(*q.get(axis.step(index, -1)), *q.get(index), *q.get(axis.step(index, 1)), theta)
        };

        self.du_dx
            .data_mut()
            .par_iter_mut()
            .zip(self.du_dy.data_mut().par_iter_mut())
            .zip(self.df_dx.data_mut().par_iter_mut())
            .zip(self.dg_dy.data_mut().par_iter_mut())
            .enumerate()
            .for_each(|(n, (((ux, uy), fx), gy))| {
                let index = space.index_at(n);

                if inner.contains(index) {
                    *ux = diff(u, index, Axis::I);
                    *fx = diff(f, index, Axis::I);
                    *uy = diff(u, index, Axis::J);
                    *gy = diff(g, index, Axis::J);
                }
            });
    }

    /// Take one half-step of the scheme. The predictor advances the solution
    /// a quarter step in time at the zone centers, using the limited flux
    /// differences, and re-evaluates the fluxes there. The corrector then
    /// computes the solution on the staggered grid, shifted by `io`, and
    /// stores it into the canonical zones of the `next` buffer, which is
    /// then swapped in.
    ///
    fn compute_step(&mut self, io: i64, dt: f64) {
        let (dx, dy) = self.mesh.cell_spacing();
        let dtcdx2 = 0.5 * dt / dx;
        let dtcdy2 = 0.5 * dt / dy;
        let space = self.current.extended().clone();
        let inner = space.trim_all(1);
        let interior = self.current.interior().clone();
        let law = &self.law;

        // Predictor (flux values of f and g at half step)
        {
            let u = &self.current;
            let fx = &self.df_dx;
            let gy = &self.dg_dy;

            self.flux_x
                .data_mut()
                .par_iter_mut()
                .zip(self.flux_y.data_mut().par_iter_mut())
                .enumerate()
                .for_each(|(n, (f, g))| {
                    let index = space.index_at(n);

                    if inner.contains(index) {
                        let uh = *u.get(index) - *fx.get(index) * dtcdx2 - *gy.get(index) * dtcdy2;
                        *f = law.flux_x(&uh);
                        *g = law.flux_y(&uh);
                    }
                });
        }

        // Corrector (finish the step)
        {
            let u = &self.current;
            let ux = &self.du_dx;
            let uy = &self.du_dy;
            let f = &self.flux_x;
            let g = &self.flux_y;

            self.next
                .data_mut()
                .par_iter_mut()
                .enumerate()
                .for_each(|(n, v)| {
                    let index = space.index_at(n);

                    if !interior.contains(index) {
                        return;
                    }
                    let (i, j) = (index.0 - io, index.1 - io);
                    let (i00, i10, i01, i11) = ((i, j), (i + 1, j), (i, j + 1), (i + 1, j + 1));

                    *v = (*u.get(i00) + *u.get(i10) + *u.get(i01) + *u.get(i11)) * 0.2500
                        - (*ux.get(i10) - *ux.get(i00) + *ux.get(i11) - *ux.get(i01)
                            + *uy.get(i01) - *uy.get(i00) + *uy.get(i11) - *uy.get(i10)) * 0.0625
                        - (*f.get(i10) - *f.get(i00) + *f.get(i11) - *f.get(i01)) * dtcdx2
                        - (*g.get(i01) - *g.get(i00) + *g.get(i11) - *g.get(i10)) * dtcdy2;
                });
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }
}
