pub mod apod;
pub mod mars_rover;
pub mod neo;
pub mod system;
