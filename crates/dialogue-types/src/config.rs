use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_PATH: &str = "./chatbot_model";
pub const DEFAULT_CHAT_FILE: &str = "saved_chat.json";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    /// Where Save/Load read and write the conversation
    pub chat_file: PathBuf,
    /// Initial slider positions
    pub sampling: SamplingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            chat_file: PathBuf::from(DEFAULT_CHAT_FILE),
            sampling: SamplingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding config.json, tokenizer.json and the weights
    pub path: PathBuf,
    pub dtype: ModelDType,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            dtype: ModelDType::F32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelDType {
    F32,
    F16,
    BF16,
}

impl ModelDType {
    pub fn label(&self) -> &str {
        match self {
            ModelDType::F32 => "f32",
            ModelDType::F16 => "f16",
            ModelDType::BF16 => "bf16",
        }
    }
}

/// Sampling parameters read from the sidebar sliders on every turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingConfig {
    pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.1..=1.5;
    pub const TEMPERATURE_STEP: f64 = 0.1;
    pub const DEFAULT_TEMPERATURE: f32 = 1.0;

    pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 50..=300;
    pub const MAX_TOKENS_STEP: f64 = 10.0;
    pub const DEFAULT_MAX_TOKENS: u32 = 150;

    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
        .clamped()
    }

    /// Force both values into their slider bounds
    pub fn clamped(self) -> Self {
        let temperature = if self.temperature.is_nan() {
            Self::DEFAULT_TEMPERATURE
        } else {
            self.temperature.clamp(
                *Self::TEMPERATURE_RANGE.start(),
                *Self::TEMPERATURE_RANGE.end(),
            )
        };
        Self {
            temperature,
            max_tokens: self.max_tokens.clamp(
                *Self::MAX_TOKENS_RANGE.start(),
                *Self::MAX_TOKENS_RANGE.end(),
            ),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }
}
