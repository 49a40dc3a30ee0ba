//! Software raster primitives: colors, gradient ramps, shape fills, and a
//! tiny bitmap font. All functions are stateless and take the target surface
//! explicitly, keeping the layer compositor pure and independently testable.

pub mod color;
pub mod gradient;
pub mod shapes;
pub mod text;

pub use color::Rgba;
pub use gradient::Gradient;
