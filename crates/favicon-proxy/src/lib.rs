pub mod assets;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod utils;
pub mod web;
