pub mod sentence;
pub mod sentence_segmenter;
pub mod timed_word;
pub mod word_aligner;
