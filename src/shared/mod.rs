pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ConfigError;
pub use errors::DispatchError;
pub use structs::Direction;
pub use structs::ElevatorStatus;
pub use structs::PickupRequest;
