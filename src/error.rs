use std::error;
use std::fmt;
use std::io;




/**
 * Error to represent invalid solver configuration, physically inadmissible
 * solution data, or a failure to read or write solver output.
 */
#[derive(Debug)]
pub enum Error {
    NonPositiveDepth { index: (i64, i64), value: f64 },
    InvalidConfig(String),
    InvalidTimeHorizon { time: f64, tfinal: f64 },
    Checkpoint(String),
    Io(io::Error),
}




// ============================================================================
impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            NonPositiveDepth { index, value } => write!(fmt, "non-positive depth {} at zone ({} {})", value, index.0, index.1),
            InvalidConfig(message) => write!(fmt, "invalid configuration: {}", message),
            InvalidTimeHorizon { time, tfinal } => write!(fmt, "final time {} is not a finite time after the current time {}", tfinal, time),
            Checkpoint(message) => write!(fmt, "bad checkpoint: {}", message),
            Io(e) => write!(fmt, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
