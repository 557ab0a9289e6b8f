mod client_config;
mod replay_config;

pub use client_config::get_config_manager;
pub use replay_config::ReplayConfig;
