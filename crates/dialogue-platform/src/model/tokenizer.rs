//! `tokenizers`-backed implementation of [`TokenizerPort`].

use std::path::Path;

use dialogue_core::ports::{TokenSeq, TokenizerPort};
use dialogue_types::{ChatError, Result};

pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load a `tokenizer.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| ChatError::Tokenizer(format!("{}: {}", path.display(), e)))?;
        Ok(Self { inner })
    }

    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}

impl TokenizerPort for HfTokenizer {
    fn encode(&self, text: &str) -> Result<TokenSeq> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| ChatError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, tokens: &[u32], skip_special: bool) -> Result<String> {
        self.inner
            .decode(tokens, skip_special)
            .map_err(|e| ChatError::Tokenizer(e.to_string()))
    }
}
