pub mod caption_writer;
