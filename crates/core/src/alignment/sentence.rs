use serde::{Deserialize, Serialize};

use super::timed_word::TimedWord;

/// A closed group of consecutive timed words.
///
/// `words` is never empty and `end` equals the last word's end boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub words: Vec<TimedWord>,
    pub end: f64,
}

impl Sentence {
    /// The sentence text as the renderer displays it: word tokens joined
    /// as-is (recognizers keep leading spaces in the tokens), trimmed.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(word: &str, start: f64, end: f64) -> TimedWord {
        TimedWord {
            word: word.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_text_joins_tokens_and_trims() {
        let sentence = Sentence {
            words: vec![timed(" Hello", 0.0, 1.0), timed(" world.", 1.0, 1.5)],
            end: 1.5,
        };
        assert_eq!(sentence.text(), "Hello world.");
    }

    #[test]
    fn test_serializes_with_contract_field_names() {
        let sentence = Sentence {
            words: vec![timed("Hi.", 0.2, 0.4)],
            end: 0.4,
        };
        let json = serde_json::to_value(&sentence).unwrap();
        assert_eq!(json["end"], 0.4);
        assert_eq!(json["words"][0]["word"], "Hi.");
        assert_eq!(json["words"][0]["start"], 0.2);
    }
}
