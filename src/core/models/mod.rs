//! Model registry and option sets.

mod info;
mod registry;

pub use info::{Model, ModelKind};
pub use registry::{filter_models, find, options, resolve};
