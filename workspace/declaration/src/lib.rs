mod fragment;
mod token;

pub use fragment::*;
pub use token::*;
