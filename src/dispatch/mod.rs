pub mod rng;
pub mod system;

pub use rng::DispatchRng;
pub use system::ElevatorControlSystem;
