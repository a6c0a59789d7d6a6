//! The model capability handed to the turn controller.

use std::sync::Arc;

use dialogue_types::{config::SamplingConfig, Result};

use crate::ports::{GenerationParams, GeneratorPort, TokenizerPort};

/// Decoded model output for one turn
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Number of new tokens the generator produced
    pub tokens: usize,
}

/// Tokenizer + generator pair, cheap to clone and share across threads.
#[derive(Clone)]
pub struct ChatModel {
    tokenizer: Arc<dyn TokenizerPort>,
    generator: Arc<dyn GeneratorPort>,
}

impl ChatModel {
    pub fn new(tokenizer: Arc<dyn TokenizerPort>, generator: Arc<dyn GeneratorPort>) -> Self {
        Self {
            tokenizer,
            generator,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.generator.backend_name()
    }

    /// Encode `prompt`, generate, and decode the answer.
    ///
    /// Only `prompt` is encoded; earlier turns never reach the model.
    pub fn reply(&self, prompt: &str, sampling: &SamplingConfig) -> Result<Reply> {
        let params = GenerationParams::from_sampling(sampling);
        self.reply_with(prompt, &params)
    }

    pub fn reply_with(&self, prompt: &str, params: &GenerationParams) -> Result<Reply> {
        let input = self.tokenizer.encode(prompt)?;
        let mut output = self.generator.generate(&input, params)?;
        if output.len() > params.max_new_tokens {
            log::warn!(
                "{} returned {} tokens, truncating to {}",
                self.generator.backend_name(),
                output.len(),
                params.max_new_tokens
            );
            output.truncate(params.max_new_tokens);
        }

        let text = self.tokenizer.decode(&output, true)?;
        Ok(Reply {
            text: text.trim().to_string(),
            tokens: output.len(),
        })
    }
}
