pub mod global_setup;
pub mod snapshot;
