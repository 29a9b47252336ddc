/*!
 * Splitting of oversized texts into request-sized chunks.
 *
 * Texts are cut on the literal ". " sentence delimiter and sentences are
 * packed greedily. This is a heuristic: abbreviations ("Dr. Silva") and
 * languages without that convention get cut in odd places. A sentence that
 * alone exceeds the limit is hard-split, preferring whitespace, so every
 * chunk stays within `max_chars`.
 */

/// Delimiter used to find sentence boundaries
pub const SENTENCE_DELIMITER: &str = ". ";

/// Split `text` into trimmed chunks of at most `max_chars` characters, in text order
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let sentences: Vec<&str> = text.split(SENTENCE_DELIMITER).collect();
    let last = sentences.len().saturating_sub(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for (index, sentence) in sentences.iter().enumerate() {
        let piece = if index < last {
            format!("{}{}", sentence, SENTENCE_DELIMITER)
        } else {
            sentence.to_string()
        };
        let piece_len = piece.chars().count();

        if piece_len > max_chars {
            push_chunk(&mut chunks, &current);
            current.clear();
            current_len = 0;
            for part in hard_split(&piece, max_chars) {
                push_chunk(&mut chunks, part);
            }
            continue;
        }

        if current_len + piece_len > max_chars {
            push_chunk(&mut chunks, &current);
            current.clear();
            current_len = 0;
        }
        current.push_str(&piece);
        current_len += piece_len;
    }
    push_chunk(&mut chunks, &current);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Cut `text` into pieces of at most `max_chars`, at the last whitespace of each window when possible
fn hard_split(text: &str, max_chars: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(offset, _)| offset)
            .unwrap_or(rest.len());
        let cut = rest[..limit]
            .rfind(char::is_whitespace)
            .filter(|&offset| offset > 0)
            .unwrap_or(limit);
        parts.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    parts.push(rest);

    parts
}
