pub mod commands;
pub mod model_status;
pub mod serve_outcome;
