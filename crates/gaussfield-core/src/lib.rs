pub mod amplitude;
pub mod animation;
pub mod clock;
pub mod config;
pub mod constants;
pub mod curve;
pub mod easing;
pub mod particles;
pub mod sampler;
pub mod starfield;
pub mod surface;

pub use amplitude::*;
pub use animation::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use curve::*;
pub use easing::*;
pub use particles::*;
pub use sampler::*;
pub use starfield::*;
pub use surface::*;
