pub mod analytics;
pub mod api;
pub mod assistant;
pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod state;
pub mod store;
pub mod views;
