pub mod pet;
pub mod provider;
