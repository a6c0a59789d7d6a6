//! Model directory loader.
//!
//! A model directory holds:
//! - `config.json` — T5-family architecture config
//! - `tokenizer.json` — Hugging Face tokenizer
//! - weights: `model.safetensors`, a sharded `model.safetensors.index.json`,
//!   or `pytorch_model.bin`

pub mod t5;
pub mod tokenizer;

use std::collections::BTreeSet;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::Config as T5Config;
use serde::Deserialize;

use dialogue_core::ports::GeneratorPort;
use dialogue_core::ChatModel;
use dialogue_types::{
    config::{ModelConfig, ModelDType},
    ChatError, Result,
};

pub use self::t5::T5Generator;
pub use self::tokenizer::HfTokenizer;

pub const CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const SAFETENSORS_FILE: &str = "model.safetensors";
pub const SAFETENSORS_INDEX_FILE: &str = "model.safetensors.index.json";
pub const PYTORCH_FILE: &str = "pytorch_model.bin";

/// Which weight files were found in the model directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightFiles {
    Safetensors(Vec<PathBuf>),
    Pytorch(PathBuf),
}

#[derive(Deserialize)]
struct SafetensorsIndex {
    weight_map: std::collections::HashMap<String, String>,
}

/// Locate the weights, preferring safetensors over a PyTorch checkpoint
pub fn find_weights(dir: &Path) -> Result<WeightFiles> {
    let single = dir.join(SAFETENSORS_FILE);
    if single.is_file() {
        return Ok(WeightFiles::Safetensors(vec![single]));
    }

    let index = dir.join(SAFETENSORS_INDEX_FILE);
    if index.is_file() {
        let data = fs::read_to_string(&index).map_err(|e| load_error(dir, e))?;
        let index: SafetensorsIndex = serde_json::from_str(&data).map_err(|e| load_error(dir, e))?;
        let shards: BTreeSet<&String> = index.weight_map.values().collect();
        if shards.is_empty() {
            return Err(load_error(dir, "safetensors index lists no shards"));
        }
        let files = shards.into_iter().map(|name| dir.join(name)).collect();
        return Ok(WeightFiles::Safetensors(files));
    }

    let pth = dir.join(PYTORCH_FILE);
    if pth.is_file() {
        return Ok(WeightFiles::Pytorch(pth));
    }

    Err(load_error(
        dir,
        format!(
            "no weights found (expected {}, {} or {})",
            SAFETENSORS_FILE, SAFETENSORS_INDEX_FILE, PYTORCH_FILE
        ),
    ))
}

/// Load the tokenizer + generator pair from `config.path`.
///
/// Every failure is reported as [`ChatError::ModelLoad`] naming the directory.
pub fn load_model(config: &ModelConfig) -> Result<ChatModel> {
    let dir = config.path.as_path();
    if !dir.is_dir() {
        return Err(load_error(dir, "model directory not found"));
    }
    log::info!("Loading model from {} ({})", dir.display(), config.dtype.label());

    let tokenizer = HfTokenizer::from_file(&dir.join(TOKENIZER_FILE)).map_err(|e| load_error(dir, e))?;

    let config_path = dir.join(CONFIG_FILE);
    let raw_config = fs::read_to_string(&config_path)
        .map_err(|e| load_error(dir, format!("{}: {}", config_path.display(), e)))?;
    let t5_config: T5Config = serde_json::from_str(&raw_config).map_err(|e| load_error(dir, e))?;

    let device = Device::cuda_if_available(0).map_err(|e| load_error(dir, e))?;
    let dtype = candle_dtype(config.dtype);
    let vb = match find_weights(dir)? {
        WeightFiles::Safetensors(files) => {
            // SAFETY: the weight files are memory-mapped read-only and must not
            // be modified while the process runs.
            unsafe { VarBuilder::from_mmaped_safetensors(&files, dtype, &device) }
        }
        WeightFiles::Pytorch(file) => VarBuilder::from_pth(&file, dtype, &device),
    }
    .map_err(|e| load_error(dir, e))?;

    let generator = T5Generator::load(vb, t5_config, device).map_err(|e| load_error(dir, e))?;
    log::info!(
        "Model ready: {} tokens in vocabulary, backend {}",
        tokenizer.vocab_size(),
        generator.backend_name()
    );

    Ok(ChatModel::new(Arc::new(tokenizer), Arc::new(generator)))
}

fn candle_dtype(dtype: ModelDType) -> DType {
    match dtype {
        ModelDType::F32 => DType::F32,
        ModelDType::F16 => DType::F16,
        ModelDType::BF16 => DType::BF16,
    }
}

fn load_error(dir: &Path, cause: impl Display) -> ChatError {
    ChatError::ModelLoad {
        path: dir.display().to_string(),
        message: cause.to_string(),
    }
}
