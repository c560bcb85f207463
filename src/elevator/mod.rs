pub mod car;
pub mod car_tests;

pub use car::Elevator;
pub use car::NO_GOAL;
