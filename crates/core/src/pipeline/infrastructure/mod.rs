pub mod batch_executor;
