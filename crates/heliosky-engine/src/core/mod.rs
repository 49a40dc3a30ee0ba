pub mod clock;
pub mod intensity;
pub mod rng;
