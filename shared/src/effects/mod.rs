mod field;
mod follow;
mod hover;
mod reveal;

pub use field::*;
pub use follow::*;
pub use hover::*;
pub use reveal::*;
