//! Per-word timing for a segment.
//!
//! Recognizer timestamps are trusted as-is. Without them, the segment
//! duration is shared out in proportion to word length, so longer words
//! stay highlighted longer and the durations sum to the segment duration.

use tracing::trace;

use crate::models::{Segment, WordTiming};

/// Derive a start/end time for every word in `segment`.
///
/// Supplied word timestamps win when at least one non-blank word remains
/// after trimming; otherwise timings are estimated from `segment.text`.
pub fn estimate_word_timings(segment: &Segment) -> Vec<WordTiming> {
    if let Some(words) = &segment.words {
        let supplied: Vec<WordTiming> = words
            .iter()
            .filter_map(|w| {
                let word = w.word.trim();
                (!word.is_empty()).then(|| WordTiming::new(word, w.start, w.end))
            })
            .collect();

        if !supplied.is_empty() {
            return supplied;
        }
        trace!(start = segment.start, "No usable word timestamps, estimating");
    }

    let words: Vec<&str> = segment.text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let segment_duration = segment.duration();
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let word_count = words.len() as f64;

    let mut current = segment.start;
    words
        .into_iter()
        .map(|word| {
            let duration = if total_chars > 0 {
                word.chars().count() as f64 / total_chars as f64 * segment_duration
            } else {
                segment_duration / word_count
            };
            let timing = WordTiming::new(word, current, current + duration);
            current += duration;
            timing
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn estimates_by_character_share() {
        let segment = Segment::new(0.0, 10.0, "ab abcd");
        let words = estimate_word_timings(&segment);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "ab");
        assert_eq!(words[0].start, 0.0);
        assert!((words[0].end - 10.0 * 2.0 / 6.0).abs() < EPS);
        assert_eq!(words[1].word, "abcd");
        assert!((words[1].start - words[0].end).abs() < EPS);
        assert!((words[1].end - 10.0).abs() < EPS);

        let total: f64 = words.iter().map(WordTiming::duration).sum();
        assert!((total - segment.duration()).abs() < EPS);
    }

    #[test]
    fn estimated_starts_increase() {
        let segment = Segment::new(3.5, 7.25, "  the quick  brown fox jumps  ");
        let words = estimate_word_timings(&segment);

        assert_eq!(words.len(), 5);
        assert_eq!(words[0].start, 3.5);
        for pair in words.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
        assert!((words[4].end - 7.25).abs() < EPS);
    }

    #[test]
    fn blank_text_gives_no_words() {
        assert!(estimate_word_timings(&Segment::new(0.0, 1.0, "   ")).is_empty());
    }

    #[test]
    fn supplied_words_pass_through_trimmed() {
        let segment = Segment::new(1.0, 2.0, "hi there").with_words(vec![
            WordTiming::new(" hi", 1.0, 1.4),
            WordTiming::new("  ", 1.4, 1.4),
            WordTiming::new(" there", 1.4, 2.0),
        ]);

        let words = estimate_word_timings(&segment);
        assert_eq!(
            words,
            vec![WordTiming::new("hi", 1.0, 1.4), WordTiming::new("there", 1.4, 2.0)]
        );
    }

    #[test]
    fn blank_supplied_words_fall_back_to_estimate() {
        let segment =
            Segment::new(0.0, 2.0, "one two").with_words(vec![WordTiming::new(" ", 0.0, 0.5)]);

        let words = estimate_word_timings(&segment);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "one");
        assert!((words[1].end - 2.0).abs() < EPS);
    }

    #[test]
    fn zero_length_segment() {
        let words = estimate_word_timings(&Segment::new(5.0, 5.0, "a b"));
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.start == 5.0 && w.end == 5.0));
    }
}
