pub mod models;
pub mod seed;
