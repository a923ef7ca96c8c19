//! Locating a JSON object inside free-form model output.
//!
//! Models asked for "JSON only" still wrap answers in prose or code fences.
//! The span starts at the first `{` and ends where nesting depth returns to
//! zero; braces inside string literals do not count. If the object never
//! closes, the last `}` after the opening brace is used instead, so truncated
//! output is reported as unparseable rather than missing.

/// Return the candidate JSON object span in `text`, if any.
pub fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = balanced_end(text.as_bytes(), start).or_else(|| {
        text.rfind('}').filter(|&end| end > start)
    })?;

    Some(&text[start..=end])
}

/// Index of the `}` closing the object opened at `start`.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
