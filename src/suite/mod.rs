pub mod case;
pub mod error;
pub mod registry;
pub mod runner;
pub mod scenarios;
