pub mod json_caption_writer;
