use serde::{Deserialize, Serialize};

/// A word annotated with resolved start and end boundaries.
///
/// Serialized field names are part of the output contract; the caption
/// renderer indexes into them by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl TimedWord {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timed_word_duration() {
        let w = TimedWord {
            word: "test".to_string(),
            start: 2.0,
            end: 2.8,
        };
        assert_relative_eq!(w.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_serializes_with_contract_field_names() {
        let w = TimedWord {
            word: "hello".to_string(),
            start: 0.0,
            end: 1.0,
        };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["word"], "hello");
        assert_eq!(json["start"], 0.0);
        assert_eq!(json["end"], 1.0);
    }
}
