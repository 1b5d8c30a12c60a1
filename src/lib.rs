pub mod assistant;
pub mod config;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;
pub mod utils;
