pub mod cli;
pub mod command_output;
pub mod command_spec;
pub mod config;
pub mod credentials;
