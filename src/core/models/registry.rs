//! Static model registry: text, multimodal, and image option sets.

use crate::core::config::Provider;
use crate::core::util;

use super::info::{Model, ModelKind};

pub const GEMINI_2_0_FLASH: Model = Model {
    name: "Gemini 2.0 Flash",
    model_name: "gemini-2.0-flash",
    provider: Provider::Gemini,
};
pub const GEMINI_2_0_FLASH_LITE: Model = Model {
    name: "Gemini 2.0 Flash Lite",
    model_name: "gemini-2.0-flash-lite",
    provider: Provider::Gemini,
};
pub const GPT_4O: Model = Model {
    name: "GPT-4o",
    model_name: "gpt-4o",
    provider: Provider::OpenAi,
};
pub const GPT_4O_MINI: Model = Model {
    name: "GPT-4o Mini",
    model_name: "gpt-4o-mini",
    provider: Provider::OpenAi,
};
pub const GPT_4_1: Model = Model {
    name: "GPT-4.1",
    model_name: "gpt-4.1",
    provider: Provider::OpenAi,
};
pub const GPT_4_1_MINI: Model = Model {
    name: "GPT-4.1 Mini",
    model_name: "gpt-4.1-mini",
    provider: Provider::OpenAi,
};
pub const DALL_E_3: Model = Model {
    name: "DALL-E 3",
    model_name: "dall-e-3",
    provider: Provider::OpenAi,
};
pub const IMAGEN_3: Model = Model {
    name: "Imagen 3",
    model_name: "imagen-3.0-generate-002",
    provider: Provider::Gemini,
};

const TEXT_MODELS: &[Model] = &[
    GEMINI_2_0_FLASH,
    GEMINI_2_0_FLASH_LITE,
    GPT_4O,
    GPT_4O_MINI,
    GPT_4_1,
    GPT_4_1_MINI,
];

const MULTIMODAL_MODELS: &[Model] = &[GEMINI_2_0_FLASH, GEMINI_2_0_FLASH_LITE, GPT_4O, GPT_4O_MINI];

const IMAGE_MODELS: &[Model] = &[DALL_E_3, IMAGEN_3];

/// Option set for a command kind, in display order. The first entry is the default.
pub fn options(kind: ModelKind) -> &'static [Model] {
    match kind {
        ModelKind::Text => TEXT_MODELS,
        ModelKind::Multimodal => MULTIMODAL_MODELS,
        ModelKind::Image => IMAGE_MODELS,
    }
}

/// Look up a model by API identifier within an option set.
pub fn find(kind: ModelKind, model_name: &str) -> Option<Model> {
    options(kind)
        .iter()
        .find(|m| m.model_name == model_name)
        .copied()
}

/// Resolve the requested model, or the option set's default when none is given.
pub fn resolve(kind: ModelKind, model_name: Option<&str>) -> Option<Model> {
    match model_name {
        Some(id) => find(kind, id),
        None => options(kind).first().copied(),
    }
}

/// Filter models by query (case-insensitive match on API id or display name).
pub fn filter_models<'a>(models: &'a [Model], query: &str) -> Vec<&'a Model> {
    util::filter_by_query(models, query, |m| [m.model_name, m.name])
}
