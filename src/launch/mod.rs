pub mod calculator;
pub mod params;
pub mod price;
pub mod signing;

pub use calculator::compute_launch_parameters;
pub use params::{LaunchInput, LaunchOutput};
