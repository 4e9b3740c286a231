pub mod apod;
pub mod cameras;
pub mod mars_rover;
pub mod neo;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{PhotoQuery, RiskLevel, Rover};
pub use crate::domain::ports::{ConfigProvider, NasaApi};
pub use crate::utils::error::Result;
pub use apod::ApodService;
pub use mars_rover::MarsRoverService;
pub use neo::NeoService;
