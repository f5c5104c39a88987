mod common;
mod event;
mod registration;

pub use common::*;
pub use event::*;
pub use registration::*;
