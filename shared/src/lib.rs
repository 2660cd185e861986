#![forbid(missing_docs)]

//! The `shared` crate contains everything about the page's effects that does not touch the DOM: settings, particle motion, easing, hover transforms, reveal bookkeeping and mail composition.

mod effects;
mod mail;
mod settings;

pub use effects::*;
pub use mail::*;
pub use settings::*;
