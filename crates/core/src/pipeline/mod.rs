pub mod infrastructure;
pub mod pipeline_logger;
pub mod process_media_use_case;
