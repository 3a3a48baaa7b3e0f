pub mod page;
pub mod scope;
