//! Greedy chunk assembly.
//!
//! Packs sentences into chunks under a maximum character budget by
//! walking them in order and flushing the buffer whenever the next
//! sentence would overflow it. A single sentence longer than the
//! budget becomes its own oversized chunk; content is never truncated
//! or dropped. Deterministic for a given sentence sequence.

/// Assemble sentences into chunks of at most `max_chunk_chars`
/// characters (not bytes).
pub fn assemble(sentences: &[String], max_chunk_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for sentence in sentences {
        let sentence_chars = sentence.chars().count();

        // The buffer keeps a trailing space after each sentence, so
        // the budget check accounts for the joining space implicitly.
        if buffer_chars + sentence_chars <= max_chunk_chars {
            buffer.push_str(sentence);
            buffer.push(' ');
            buffer_chars += sentence_chars + 1;
        } else {
            if !buffer.is_empty() {
                chunks.push(buffer.trim().to_string());
            }
            buffer.clear();
            buffer.push_str(sentence);
            buffer.push(' ');
            buffer_chars = sentence_chars + 1;
        }
    }

    if !buffer.trim().is_empty() {
        chunks.push(buffer.trim().to_string());
    }

    chunks
}
