pub mod models;
pub mod packages;
