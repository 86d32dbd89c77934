pub mod dependency_checker;
pub mod model_manager;
pub mod rasa_server;
pub mod system_process_runner;
pub mod trainer;
