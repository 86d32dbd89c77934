pub mod launcher_config;
