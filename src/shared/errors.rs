/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::error::Error;
use std::fmt;

/***************************************/
/*            Error types              */
/***************************************/
/// Errors returned by the elevator control system operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// `update()` was given an elevator id outside the bank.
    InvalidElevatorId { id: usize, num_elevators: usize },
    /// Every elevator is busy; the request cannot be placed this step.
    NoAvailableElevator,
    /// `pickup()` was given a direction without a sign.
    InvalidDirection { value: i32 },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElevatorId { id, num_elevators } => {
                write!(f, "elevator id {id} out of range (0..{num_elevators})")
            }
            Self::NoAvailableElevator => write!(f, "no elevator available"),
            Self::InvalidDirection { value } => {
                write!(f, "direction must be a nonzero signed value, got {value}")
            }
        }
    }
}

impl Error for DispatchError {}

/// Errors from loading the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "failed to read configuration file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse configuration file: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
