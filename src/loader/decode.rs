/// Decode bytes as UTF-8, skipping every invalid sequence.
///
/// Returns the decoded text and the number of bytes that were dropped.
/// Unlike `String::from_utf8_lossy`, no U+FFFD is inserted.
pub fn decode_ignoring_invalid(bytes: &[u8]) -> (String, usize) {
    let mut out = String::with_capacity(bytes.len());
    let mut dropped = 0;
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                if let Ok(valid) = std::str::from_utf8(&rest[..valid_up_to]) {
                    out.push_str(valid);
                }

                // None means the input ends mid-sequence
                let skip = err.error_len().unwrap_or(rest.len() - valid_up_to);
                dropped += skip;
                rest = &rest[valid_up_to + skip..];
            }
        }
    }

    (out, dropped)
}
