pub mod merge_config;
