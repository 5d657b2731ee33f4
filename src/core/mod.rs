//! Configuration and payload models shared by the handler

pub mod config;
pub mod models;
