pub mod config;
pub mod constants;
pub mod cursor;
pub mod entity;
pub mod error;
pub mod fps;
pub mod generators;
pub mod lifecycle;
pub mod profiler;
pub mod registry;
pub mod scheduler;
pub mod surface;

pub use config::*;
pub use cursor::*;
pub use entity::*;
pub use error::*;
pub use fps::*;
pub use generators::{EffectGenerator, Effect};
pub use lifecycle::*;
pub use profiler::*;
pub use registry::*;
pub use scheduler::*;
pub use surface::*;
