//! candle T5 encoder-decoder behind [`GeneratorPort`].

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::t5::{Config, T5ForConditionalGeneration};

use dialogue_core::ports::{GenerationParams, GeneratorPort, TokenSeq};
use dialogue_types::{ChatError, Result};

/// The model keeps a mutable KV cache, so calls are serialized.
pub struct T5Generator {
    model: Mutex<T5ForConditionalGeneration>,
    config: Config,
    device: Device,
}

impl T5Generator {
    pub fn load(vb: VarBuilder, config: Config, device: Device) -> candle_core::Result<Self> {
        let model = T5ForConditionalGeneration::load(vb, &config)?;
        Ok(Self {
            model: Mutex::new(model),
            config,
            device,
        })
    }

    fn decoder_start_token(&self) -> u32 {
        self.config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32
    }

    fn run(
        &self,
        model: &mut T5ForConditionalGeneration,
        input: &[u32],
        params: &GenerationParams,
    ) -> candle_core::Result<TokenSeq> {
        let input_ids = Tensor::new(input, &self.device)?.unsqueeze(0)?;
        let encoder_output = model.encode(&input_ids)?;

        let temperature = params.do_sample.then_some(params.temperature);
        let seed = params.seed.unwrap_or_else(clock_seed);
        let mut sampler = LogitsProcessor::new(seed, temperature, None);

        let mut decoder_ids = vec![self.decoder_start_token()];
        let mut generated = Vec::with_capacity(params.max_new_tokens);

        for step in 0..params.max_new_tokens {
            let decoder_input = if step == 0 || !self.config.use_cache {
                Tensor::new(decoder_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = decoder_ids.last().copied().unwrap_or_else(|| self.decoder_start_token());
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };
            let logits = model.decode(&decoder_input, &encoder_output)?.squeeze(0)?;
            let next = sampler.sample(&logits)?;
            if next as usize == self.config.eos_token_id {
                break;
            }
            decoder_ids.push(next);
            generated.push(next);
        }

        Ok(generated)
    }
}

impl GeneratorPort for T5Generator {
    fn generate(&self, input: &[u32], params: &GenerationParams) -> Result<TokenSeq> {
        if params.max_new_tokens == 0 {
            return Ok(Vec::new());
        }

        let mut model = self.model.lock().unwrap_or_else(|e| e.into_inner());
        let result = self.run(&mut model, input, params);
        model.clear_kv_cache();

        let generated = result.map_err(|e| ChatError::Generation(e.to_string()))?;
        log::debug!(
            "t5: {} input tokens -> {} new tokens (temperature {:.1})",
            input.len(),
            generated.len(),
            params.temperature
        );
        Ok(generated)
    }

    fn backend_name(&self) -> &str {
        "candle-t5"
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(299_792_458)
}
