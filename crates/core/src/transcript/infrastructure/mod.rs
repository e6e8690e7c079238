pub mod stable_ts_source;
