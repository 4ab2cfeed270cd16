//! Text preparation: sanitize, segment into sentences, and assemble
//! bounded chunks.
//!
//! The three stages are pure functions so they can be tested and
//! reused independently; [`chunk_text`] runs the full pipeline the
//! ingestion path uses.

pub mod assembler;
pub mod sanitize;
pub mod sentences;

pub use assembler::assemble;
pub use sanitize::sanitize;
pub use sentences::segment;

/// Sanitize, segment, and assemble raw extracted text into chunks of
/// at most `max_chunk_chars` characters.
pub fn chunk_text(text: &str, max_chunk_chars: usize) -> Vec<String> {
    let cleaned = sanitize(text);
    let sentences = segment(&cleaned);
    assemble(&sentences, max_chunk_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let text = "First sentence here.\n\nSecond   sentence! Third* one?";
        let chunks = chunk_text(text, 30);
        assert_eq!(
            chunks,
            vec!["First sentence here.", "Second sentence! Third one?"]
        );
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", 800).is_empty());
        assert!(chunk_text("  \n\t  ", 800).is_empty());
    }

    #[test]
    fn test_chunks_reproduce_sanitized_input() {
        let text = "Alpha one. Bravo two. Charlie three. Delta four. Echo five.";
        let chunks = chunk_text(text, 30);
        assert_eq!(chunks.join(" "), sanitize(text));
    }
}
