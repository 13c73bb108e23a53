pub mod config;
pub mod credentials;
pub mod models;
pub mod service;
pub mod structs;
