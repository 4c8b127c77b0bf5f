mod artifact;
mod decode;


pub use artifact::{ArtifactMetadata, TextArtifact};
pub use decode::decode_ignoring_invalid;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a file as text, dropping any bytes that are not valid UTF-8
pub fn load_text(path: impl AsRef<Path>) -> Result<TextArtifact, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact = TextArtifact::from_bytes(&path.to_string_lossy(), &bytes);
    if artifact.metadata.dropped_bytes > 0 {
        tracing::warn!(
            path = %path.display(),
            dropped = artifact.metadata.dropped_bytes,
            "dropped invalid UTF-8 bytes"
        );
    }
    tracing::debug!(
        path = %path.display(),
        chars = artifact.metadata.char_count,
        lines = artifact.metadata.line_count,
        "loaded artifact"
    );

    Ok(artifact)
}
