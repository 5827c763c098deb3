pub mod indicator_config;
