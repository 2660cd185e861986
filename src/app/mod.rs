mod anchor;
mod app;
mod background;
mod blob;
mod hover;
mod mail;
mod reveal;
mod year;

pub use app::*;
pub use mail::send_mail;
