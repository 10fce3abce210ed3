pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod events;
pub mod logging;
pub mod screens;
pub mod services;
