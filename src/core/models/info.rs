//! Shared model info type (no dependencies on the client or API).

use crate::core::config::Provider;

/// An AI model with its display name, API identifier, and provider family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Model {
    /// User-friendly display name (e.g. "GPT-4o").
    pub name: &'static str,
    /// API identifier (e.g. "gpt-4o").
    pub model_name: &'static str,
    pub provider: Provider,
}

/// Which option set a command selects from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelKind {
    Text,
    Multimodal,
    Image,
}
