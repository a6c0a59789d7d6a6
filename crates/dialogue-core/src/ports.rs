//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `dialogue-core` (pure Rust).
//! Implementations live in `dialogue-platform` (candle, tokenizers, files).

use dialogue_types::{config::SamplingConfig, message::Message, Result};

/// Token ids as produced by the tokenizer
pub type TokenSeq = Vec<u32>;

// ─── Tokenizer Port ──────────────────────────────────────────

pub trait TokenizerPort: Send + Sync {
    /// Encode text into token ids, adding the model's special tokens
    fn encode(&self, text: &str) -> Result<TokenSeq>;

    /// Decode token ids back into text
    fn decode(&self, tokens: &[u32], skip_special: bool) -> Result<String>;
}

// ─── Generator Port ──────────────────────────────────────────

/// Knobs passed to a single `generate` call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Upper bound on newly generated tokens
    pub max_new_tokens: usize,
    pub temperature: f64,
    /// Sample from the distribution instead of taking the argmax
    pub do_sample: bool,
    /// Fixed RNG seed; `None` lets the backend pick a fresh one
    pub seed: Option<u64>,
}

impl GenerationParams {
    pub fn from_sampling(sampling: &SamplingConfig) -> Self {
        let sampling = sampling.clamped();
        Self {
            max_new_tokens: sampling.max_tokens as usize,
            temperature: f64::from(sampling.temperature),
            do_sample: true,
            seed: None,
        }
    }
}

pub trait GeneratorPort: Send + Sync {
    /// Run the sequence-to-sequence model on `input` and return only the
    /// newly generated ids (no decoder start token), at most
    /// `params.max_new_tokens` of them.
    fn generate(&self, input: &[u32], params: &GenerationParams) -> Result<TokenSeq>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Chat Store Port ─────────────────────────────────────────

pub trait ChatStorePort {
    /// Overwrite the stored conversation
    fn save(&self, messages: &[Message]) -> Result<()>;

    /// Read the stored conversation; `Ok(None)` when nothing was saved yet
    fn load(&self) -> Result<Option<Vec<Message>>>;

    /// Human-readable location shown in notices
    fn location(&self) -> String;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
