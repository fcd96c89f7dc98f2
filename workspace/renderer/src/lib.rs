mod context;
mod renderer;
mod transform;

// Public API
pub mod error;
pub use context::*;
pub use error::Error;
pub use renderer::*;
pub use transform::*;
