use crate::chunker::DEFAULT_CHUNK_SIZE;
use crate::embedder::DEFAULT_BATCH_SIZE;
use crate::similarity::DEFAULT_TOP_K;
use crate::summarizer::{GenerationParams, PromptLanguage};
use thiserror::Error;

/// Characters of each selected chunk placed in the prompt
pub const DEFAULT_PROMPT_EXCERPT_CHARS: usize = 900;

/// Characters of each selected chunk shown in the report
pub const DEFAULT_REPORT_EXCERPT_CHARS: usize = 500;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{name} must be in {range}, got {value}")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f32,
    },
}

/// Knobs for one comparison run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub chunk_size: usize,
    pub top_k: usize,
    pub batch_size: usize,
    pub normalize: bool,
    pub prompt_excerpt_chars: usize,
    pub report_excerpt_chars: usize,
    pub generation: GenerationParams,
    pub language: PromptLanguage,
    /// Stop after ranking; the conclusion stays empty
    pub skip_generation: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            top_k: DEFAULT_TOP_K,
            batch_size: DEFAULT_BATCH_SIZE,
            normalize: true,
            prompt_excerpt_chars: DEFAULT_PROMPT_EXCERPT_CHARS,
            report_excerpt_chars: DEFAULT_REPORT_EXCERPT_CHARS,
            generation: GenerationParams::default(),
            language: PromptLanguage::default(),
            skip_generation: false,
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("chunk_size", self.chunk_size),
            ("top_k", self.top_k),
            ("batch_size", self.batch_size),
            ("prompt_excerpt_chars", self.prompt_excerpt_chars),
            ("report_excerpt_chars", self.report_excerpt_chars),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
        }

        if self.skip_generation {
            return Ok(());
        }

        let params = &self.generation;
        if params.max_new_tokens == 0 {
            return Err(ConfigError::Zero("max_new_tokens"));
        }
        if params.do_sample && !(params.temperature > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "temperature",
                range: "(0, inf)",
                value: params.temperature,
            });
        }
        if !(params.top_p > 0.0 && params.top_p <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "top_p",
                range: "(0, 1]",
                value: params.top_p,
            });
        }
        if !(params.repetition_penalty > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "repetition_penalty",
                range: "(0, inf)",
                value: params.repetition_penalty,
            });
        }

        Ok(())
    }
}
