mod config;
mod context;
mod controller;
mod counter;
mod dispatch;
mod error;
mod fallback;
mod form;
mod forms;
mod handoff;
mod payload;
mod status;
mod validate;

pub use config::*;
pub use context::*;
pub use controller::*;
pub use counter::*;
pub use dispatch::*;
pub use error::*;
pub use fallback::*;
pub use form::*;
pub use forms::*;
pub use handoff::*;
pub use payload::*;
pub use status::*;
pub use validate::*;
