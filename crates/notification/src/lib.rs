mod config;
mod emailjs;
mod payload;
mod provider;
mod service;

pub use config::*;
pub use emailjs::*;
pub use payload::*;
pub use provider::*;
pub use service::*;
