mod cli;
mod colors;
mod config;
mod state;
mod tick_timer;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::{log, logger, SessionRng};

use cli::Args;
use ui::SnakeApp;

const APP_ID: &str = "snake_desktop";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = args.resolve_config()?;
    let settings = config.game.to_settings();
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting {}x{} field, tick every {} ms, seed {}",
        settings.field_size.width,
        settings.field_size.height,
        settings.tick_interval.as_millis(),
        rng.seed()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size()?)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(&settings, rng)))),
    )?;

    log!("Window closed");
    Ok(())
}
