pub mod config;
pub mod logger;
pub mod snake;
mod session_rng;

pub use session_rng::SessionRng;
