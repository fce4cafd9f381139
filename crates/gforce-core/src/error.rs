//! Engine error type

use core::fmt;

/// Fatal failure of one of the engine's collaborators
///
/// The engine never retries: the first failing read or flush ends the cycle
/// and is handed back to the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<SE, PE> {
    /// Sensor communication failed
    Sensor(SE),
    /// LED strip communication failed
    Pixels(PE),
}

impl<SE: fmt::Debug, PE: fmt::Debug> fmt::Display for Error<SE, PE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sensor(e) => write!(f, "Sensor error: {:?}", e),
            Error::Pixels(e) => write!(f, "Pixel strip error: {:?}", e),
        }
    }
}

impl<SE: fmt::Debug, PE: fmt::Debug> core::error::Error for Error<SE, PE> {}
