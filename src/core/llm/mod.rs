//! Provider calls: chat, multimodal query, and image generation.

mod chat;
mod error;
mod image;

pub use chat::{ImageInput, ask, chat, multimodal_parts};
pub use error::{ApiError, InputError};
pub use image::{default_file_name, generate_image, validate_request};

use crate::core::client::ClientError;

/// Error surfaced to the user for one interaction.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LlmError {
    /// True when retrying the same action may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, LlmError::Api(e) if e.is_transient())
    }
}

#[cfg(test)]
mod tests;
