pub mod logger;
pub mod run_log;
