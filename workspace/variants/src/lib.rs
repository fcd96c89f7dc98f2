mod collection;
mod patch;
mod traits;

// Public API
pub mod error;
pub use collection::*;
pub use error::Error;
pub use patch::*;
pub use traits::*;
