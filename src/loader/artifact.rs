use super::decode::decode_ignoring_invalid;

/// A text file loaded for comparison
#[derive(Debug, Clone)]
pub struct TextArtifact {
    /// Decoded text with invalid bytes removed
    pub text: String,
    /// File metadata
    pub metadata: ArtifactMetadata,
}

/// Metadata gathered while loading
#[derive(Debug, Clone)]
pub struct ArtifactMetadata {
    /// Path as given on the command line
    pub path: String,
    /// File extension (e.g., "txt", "md")
    pub extension: String,
    /// Original byte size
    pub size_bytes: usize,
    /// Unicode scalar values in the decoded text
    pub char_count: usize,
    /// Line count in decoded text
    pub line_count: usize,
    /// Whether the raw bytes were valid UTF-8
    pub is_utf8: bool,
    /// Bytes discarded during decoding
    pub dropped_bytes: usize,
}

impl TextArtifact {
    pub fn from_bytes(path: &str, bytes: &[u8]) -> Self {
        let (text, dropped_bytes) = decode_ignoring_invalid(bytes);
        let metadata = ArtifactMetadata::new(path, bytes.len(), &text, dropped_bytes);
        Self { text, metadata }
    }

    /// Build an artifact from text that is already in memory
    pub fn from_text(path: &str, text: impl Into<String>) -> Self {
        let text = text.into();
        let metadata = ArtifactMetadata::new(path, text.len(), &text, 0);
        Self { text, metadata }
    }
}

impl ArtifactMetadata {
    fn new(path: &str, size_bytes: usize, text: &str, dropped_bytes: usize) -> Self {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self {
            path: path.to_string(),
            extension,
            size_bytes,
            char_count: text.chars().count(),
            line_count: text.lines().count(),
            is_utf8: dropped_bytes == 0,
            dropped_bytes,
        }
    }
}
