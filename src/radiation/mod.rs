//! Emission sampling, wall tracing, and the resulting heat-flux estimate.

mod direction;
mod distribution;
mod load;
mod profile;
mod scatter;

pub use direction::DirectionGenerator;
pub use distribution::{RadiationDistribution, RejectionSamplingOptions};
pub use load::RadiationLoad;
#[cfg(feature = "parallel")]
pub use load::ParallelSamplingOptions;
pub use profile::RadiationProfile;
pub use scatter::DiffuseScatter;
