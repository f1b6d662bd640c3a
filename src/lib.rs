// Core infrastructure modules
pub mod config;
pub mod core;
pub mod logging;

// Feature-specific modules
pub mod app;
pub mod menu;
pub mod models;
pub mod prompt;
pub mod results_grid;
