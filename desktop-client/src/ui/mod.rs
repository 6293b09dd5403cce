mod app;
mod board;
mod game_over_dialog;

pub use app::SnakeApp;
