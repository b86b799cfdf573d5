pub mod generation;
pub mod platforms;

pub use generation::{GenerationContext, GenerationOptions};
pub use platforms::PlatformsContext;
