pub mod browser;
pub mod cli;
pub mod data;
pub mod fixture;
pub mod pages;
pub mod report;
pub mod session;
pub mod suite;
pub mod tracker;
pub mod trace;
