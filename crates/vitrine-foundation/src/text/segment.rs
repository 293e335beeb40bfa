/// Non-breaking space used for gap units in line mode.
pub const NBSP: char = '\u{00A0}';

/// A single animatable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharUnit {
    pub ch: char,
    /// Index of the containing word; `None` for gap units.
    pub word_index: Option<usize>,
    /// Global index across the whole segmentation, in stagger order.
    pub char_index: usize,
}

/// A whole word, for callers that animate word containers instead of
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUnit {
    pub text: String,
    pub word_index: usize,
}

/// Split a phrase into words. Leading/trailing/repeated whitespace
/// collapses.
pub fn segment_words(phrase: &str) -> Vec<WordUnit> {
    phrase
        .split_whitespace()
        .enumerate()
        .map(|(word_index, word)| WordUnit {
            text: word.to_owned(),
            word_index,
        })
        .collect()
}

/// Word mode: every non-space character becomes a unit; spaces are
/// separators and produce no unit.
pub fn segment_chars(phrase: &str) -> Vec<CharUnit> {
    let mut units = Vec::new();
    for (word_index, word) in phrase.split_whitespace().enumerate() {
        for ch in word.chars() {
            units.push(CharUnit {
                ch,
                word_index: Some(word_index),
                char_index: units.len(),
            });
        }
    }
    units
}

/// Line mode: like [`segment_chars`] but each inter-word gap becomes
/// exactly one non-breaking-space unit, so the line's layout survives while
/// every slot animates.
pub fn segment_line(phrase: &str) -> Vec<CharUnit> {
    let mut units = Vec::new();
    for (word_index, word) in phrase.split_whitespace().enumerate() {
        if word_index > 0 {
            units.push(CharUnit {
                ch: NBSP,
                word_index: None,
                char_index: units.len(),
            });
        }
        for ch in word.chars() {
            units.push(CharUnit {
                ch,
                word_index: Some(word_index),
                char_index: units.len(),
            });
        }
    }
    units
}

/// Segment several lines with one global character numbering, so a stagger
/// flows across line breaks. Word indices restart per line.
pub fn segment_lines(phrases: &[&str]) -> Vec<Vec<CharUnit>> {
    let mut next_index = 0;
    phrases
        .iter()
        .map(|phrase| {
            let mut line = segment_line(phrase);
            for unit in &mut line {
                unit.char_index = next_index;
                next_index += 1;
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_collapse_whitespace() {
        let words = segment_words("  Hi,   I'm Sohaila ");
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Hi,", "I'm", "Sohaila"]);
        assert_eq!(words[2].word_index, 2);
    }

    #[test]
    fn word_mode_emits_no_space_units() {
        let units = segment_chars("ML Engineer");
        assert_eq!(units.len(), 10);
        assert!(units.iter().all(|u| u.ch != ' ' && u.ch != NBSP));
        // Characters keep their word grouping.
        assert_eq!(units[1].word_index, Some(0));
        assert_eq!(units[2].word_index, Some(1));
        // Global indices are dense.
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.char_index, i);
        }
    }

    #[test]
    fn line_mode_inserts_one_nbsp_per_gap() {
        let units = segment_line("I'm  Sohaila");
        // 3 chars + 1 gap + 7 chars
        assert_eq!(units.len(), 11);
        assert_eq!(units[3].ch, NBSP);
        assert_eq!(units[3].word_index, None);
        assert_eq!(units[4].word_index, Some(1));
    }

    #[test]
    fn multi_line_indices_are_global() {
        let lines = segment_lines(&["Hi,", "I'm Sohaila"]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].last().unwrap().char_index, 2);
        assert_eq!(lines[1][0].char_index, 3);
        let total: usize = lines.iter().map(|l| l.len()).sum();
        assert_eq!(lines[1].last().unwrap().char_index, total - 1);
        // Word numbering restarts per line.
        assert_eq!(lines[1][0].word_index, Some(0));
    }

    #[test]
    fn empty_phrase_yields_no_units() {
        assert!(segment_chars("").is_empty());
        assert!(segment_line("   ").is_empty());
    }
}
