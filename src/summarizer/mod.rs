pub mod client;
pub mod prompt;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{DocumenterClient, SummarizerError};
pub use prompt::{ConclusionPrompt, PromptLanguage, extract_conclusion};
pub use types::{GenerateRequest, GenerateResponse, GenerationParams};
