// src/tokens.rs
//! Token counting behind a swappable [`Tokenizer`].
//!
//! The production tokenizer is tiktoken's BPE for [`MODEL`]. Encodings are
//! resolved by model identifier once per process and shared afterwards.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use tiktoken_rs::CoreBPE;

use crate::error::{Result, TallyError};

/// The model whose vocabulary every count is measured against.
pub const MODEL: &str = "gpt-4o";

pub type TokenId = u32;

/// Anything that turns text into a sequence of token ids.
pub trait Tokenizer {
    fn encode(&self, text: &str) -> Vec<TokenId>;

    /// Number of tokens in `text`.
    #[must_use]
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Resolved encodings, keyed by model identifier.
static ENCODINGS: LazyLock<Mutex<HashMap<String, Arc<CoreBPE>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// tiktoken byte-pair encoder for a single model.
#[derive(Clone)]
pub struct BpeTokenizer {
    model: String,
    bpe: Arc<CoreBPE>,
}

impl BpeTokenizer {
    /// Resolves the encoding for `model`, reusing an earlier resolution.
    ///
    /// # Errors
    /// Returns [`TallyError::UnknownModel`] if tiktoken has no encoding for `model`.
    pub fn for_model(model: &str) -> Result<Self> {
        let mut cache = ENCODINGS
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(bpe) = cache.get(model) {
            return Ok(Self {
                model: model.to_string(),
                bpe: Arc::clone(bpe),
            });
        }

        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map(Arc::new)
            .map_err(|e| TallyError::UnknownModel {
                model: model.to_string(),
                reason: e.to_string(),
            })?;
        cache.insert(model.to_string(), Arc::clone(&bpe));

        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }

    /// The tokenizer for [`MODEL`].
    ///
    /// # Errors
    /// Fails only if the bundled encoding for [`MODEL`] cannot be loaded.
    pub fn default_model() -> Result<Self> {
        Self::for_model(MODEL)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Tokenizer for BpeTokenizer {
    // Special-token markup in chat content is plain text here.
    fn encode(&self, text: &str) -> Vec<TokenId> {
        self.bpe.encode_ordinary(text)
    }
}

impl std::fmt::Debug for BpeTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BpeTokenizer")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
