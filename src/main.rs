use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use tidepool::hydro::shallow::ShallowWater;
use tidepool::output;
use tidepool::problems::{Problem, Show};
use tidepool::{Central2d, Config, Error};




#[derive(Parser, Debug)]
#[clap(version, about = "Shallow water on a periodic grid with the Jiang-Tadmor central scheme")]
struct Opts {
    /// Width of the domain [default: 2.0]
    #[clap(long)]
    width: Option<f64>,

    /// Height of the domain [default: 2.0]
    #[clap(long)]
    height: Option<f64>,

    /// Number of zones along x [default: 200]
    #[clap(long)]
    nx: Option<usize>,

    /// Number of zones along y [default: 200]
    #[clap(long)]
    ny: Option<usize>,

    /// Courant number [default: 0.2]
    #[clap(long)]
    cfl: Option<f64>,

    /// Limiter parameter, in [1, 2] [default: 2.0]
    #[clap(long)]
    theta: Option<f64>,

    /// Gravitational acceleration
    #[clap(long, default_value = "9.8")]
    gravity: f64,

    /// Time to run until
    #[clap(long, default_value = "0.5")]
    tfinal: f64,

    /// Initial condition: dam-break, pond, or wave
    #[clap(long, default_value = "dam-break")]
    problem: Problem,

    /// Quantity to render: height or momentum
    #[clap(long, default_value = "height")]
    show: Show,

    /// Number of images to write after the initial one
    #[clap(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    frames: u64,

    /// Directory for the images
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,

    /// Write a checkpoint of the final state to this file
    #[clap(long)]
    checkpoint: Option<PathBuf>,

    /// Resume from a checkpoint instead of setting up the problem. The grid
    /// and scheme parameters are taken from the checkpoint.
    #[clap(long)]
    restart: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Opts {
    fn has_grid_flags(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.nx.is_some()
            || self.ny.is_some()
            || self.cfl.is_some()
            || self.theta.is_some()
    }

    fn config(&self) -> Config {
        let default = Config::default();

        Config::new(
            (self.width.unwrap_or(default.domain.0), self.height.unwrap_or(default.domain.1)),
            (self.nx.unwrap_or(default.size.0), self.ny.unwrap_or(default.size.1)),
            self.cfl.unwrap_or(default.cfl),
            self.theta.unwrap_or(default.theta),
        )
    }
}




// ============================================================================
fn write_frame(solver: &Central2d<ShallowWater, 3>, show: Show, dir: &Path, frame: u64) -> Result<(), Error> {
    let path = dir.join(format!("frame-{:04}.pgm", frame));
    let file = BufWriter::new(File::create(&path)?);
    output::write_pgm(file, solver.solution(), show.display_map())?;
    info!("write {}", path.display());
    Ok(())
}

fn setup(opts: &Opts) -> Result<Central2d<ShallowWater, 3>, Error> {
    let law = ShallowWater::new(opts.gravity);

    match &opts.restart {
        Some(_) if opts.has_grid_flags() => Err(Error::InvalidConfig(
            "--width, --height, --nx, --ny, --cfl and --theta cannot be combined with --restart".to_string(),
        )),
        Some(path) => {
            let checkpoint = output::read_checkpoint(BufReader::new(File::open(path)?))?;
            info!("restart from {} at t={:.4}", path.display(), checkpoint.time);
            Central2d::from_checkpoint(law, checkpoint)
        }
        None => {
            let mut solver = Central2d::new(law, opts.config())?;
            solver.init(opts.problem.initial_state());
            Ok(solver)
        }
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    let mut solver = setup(&opts)?;
    let t0 = solver.time();

    std::fs::create_dir_all(&opts.output_dir)?;
    info!("{:?}", solver.config());
    info!("initial: {}", solver.totals()?);
    write_frame(&solver, opts.show, &opts.output_dir, 0)?;

    for frame in 1..=opts.frames {
        let t = t0 + (opts.tfinal - t0) * frame as f64 / opts.frames as f64;
        solver.run(t)?;
        write_frame(&solver, opts.show, &opts.output_dir, frame)?;
    }

    if let Some(path) = &opts.checkpoint {
        output::write_checkpoint(BufWriter::new(File::create(path)?), &solver.checkpoint())?;
        info!("write {}", path.display());
    }
    Ok(())
}

fn main() {
    let opts = Opts::parse();

    SimpleLogger::new()
        .with_level(opts.log_level)
        .init()
        .unwrap();

    if let Err(e) = run(opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}
