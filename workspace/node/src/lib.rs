mod language;
mod node;
mod reference;
mod symbol;

pub use language::*;
pub use node::*;
pub use reference::*;
pub use symbol::*;
