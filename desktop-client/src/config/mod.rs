mod config;
mod game_config;
mod window_config;

pub use config::{get_config_manager, Config};
pub use game_config::GameConfig;
pub use window_config::WindowConfig;
