#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod alternative;
mod catalog;
mod equipment;
mod fallback;
mod focus;
mod plan;
mod selection;
mod service;
mod settings;

pub use alternative::*;
pub use catalog::*;
pub use equipment::*;
pub use fallback::*;
pub use focus::*;
pub use plan::*;
pub use selection::*;
pub use service::*;
pub use settings::*;
