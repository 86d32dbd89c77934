//! Startup orchestration for a Rasa assistant: verify the Python environment,
//! make sure the spaCy model is installed, train, then serve the REST API.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
