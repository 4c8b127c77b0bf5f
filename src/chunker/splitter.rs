use super::ChunkId;

/// A chunk of text ready for embedding
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Sequential id among the kept chunks of one artifact
    pub id: ChunkId,
    /// Trimmed text content of this chunk
    pub text: String,
    /// Metadata about the chunk
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Char offset of the untrimmed window (start)
    pub start_char: usize,
    /// Char offset of the untrimmed window (end, exclusive)
    pub end_char: usize,
    /// Chars in the trimmed text
    pub char_count: usize,
}

/// Split text into fixed-size character windows:
/// - Windows start at 0, chunk_size, 2 * chunk_size, ...
/// - Sizes count Unicode scalar values, never bytes
/// - Each window is trimmed of surrounding whitespace and U+001C..=U+001F
/// - Windows that are blank after trimming are dropped
///
/// `chunk_size` must be non-zero.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<Chunk> {
    debug_assert!(chunk_size > 0, "chunk_size must be non-zero");
    if text.is_empty() || chunk_size == 0 {
        return vec![];
    }

    let mut chunks = Vec::new();
    let mut window_start_byte = 0;
    let mut window_start_char = 0;
    let mut chars_in_window = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_window == chunk_size {
            push_window(
                &mut chunks,
                &text[window_start_byte..byte_idx],
                window_start_char,
                chars_in_window,
            );
            window_start_byte = byte_idx;
            window_start_char += chars_in_window;
            chars_in_window = 0;
        }
        chars_in_window += 1;
    }

    // Flush the final (possibly short) window
    if chars_in_window > 0 {
        push_window(
            &mut chunks,
            &text[window_start_byte..],
            window_start_char,
            chars_in_window,
        );
    }

    chunks
}

fn push_window(chunks: &mut Vec<Chunk>, window: &str, start_char: usize, window_chars: usize) {
    let trimmed = window.trim_matches(is_trimmable);
    if trimmed.is_empty() {
        return;
    }

    chunks.push(Chunk {
        id: chunks.len() as ChunkId,
        text: trimmed.to_string(),
        metadata: ChunkMetadata {
            start_char,
            end_char: start_char + window_chars,
            char_count: trimmed.chars().count(),
        },
    });
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
