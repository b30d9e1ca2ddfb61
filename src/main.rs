use log::{error, info};
use macroquad::prelude::{clear_background, next_frame, Conf, KeyCode, BLACK};
use zscreen::{ScreenManager, Surface};

use crate::{error::ZError, event::Event, surface::MqSurface};

mod error;
mod event;
mod screen;
mod surface;
mod utils;

type ZResult<T = ()> = std::result::Result<T, ZError>;

const SETTINGS_PATH: &str = "settings.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: "zscreen demo".to_owned(),
        window_width: 500,
        window_height: 320,
        ..Default::default()
    }
}

fn enable_backtrace() {
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

async fn run() -> ZResult {
    let settings = utils::load_settings(SETTINGS_PATH).await?;
    info!("Settings: {:?}", settings);
    let mut screens: screen::Screens = ScreenManager::new(MqSurface::Window, settings);
    screens.register(Box::new(screen::Title::new()));
    screens.register(Box::new(screen::Field::new()));
    let mut window_size = screens.surface().size();
    loop {
        let events = event::poll();
        if events.contains(&Event::Key(KeyCode::Escape)) {
            info!("Exit");
            return Ok(());
        }
        let size = screens.surface().size();
        if size != window_size {
            window_size = size;
            screens.resize();
        }
        clear_background(BLACK);
        if !screens.settings().internal_cycle_events {
            for event in &events {
                screens.external_dispatch(event)?;
            }
        }
        screens.update(&events)?;
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    enable_backtrace();
    env_logger::init();
    if let Err(err) = run().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
