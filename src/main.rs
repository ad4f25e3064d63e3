mod api;
mod app;
mod config;
mod constants;
mod models;
mod screens;
mod services;
mod state;
mod store;
mod ui_components;
mod utils;

use app::MusicStudioApp;
use eframe::egui;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "MuseRS";
const APP_DESCRIPTION: &str = "AI Music Studio";

const APP_WIDTH: f32 = 1180.0;
const APP_HEIGHT: f32 = 780.0;

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let config = config::Config::from_env();
    let store = match store::UserStore::new() {
        Ok(store) => store,
        Err(e) => {
            log::error!("[Main] Could not open user database: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{} - {}",
                APP_NAME, APP_VERSION, APP_DESCRIPTION
            ))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([900.0, 600.0])
            .with_icon(load_icon()),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        options,
        Box::new(move |cc| Ok(Box::new(MusicStudioApp::new(cc, config, store)))),
    )
}

/// Build the window icon: brand gradient with a white music note.
fn load_icon() -> egui::IconData {
    let (icon_width, icon_height) = (64usize, 64usize);
    let mut pixels = vec![0u8; icon_width * icon_height * 4];

    let (start, end) = crate::ui_components::colors::gradient("blue-violet");
    for y in 0..icon_height {
        for x in 0..icon_width {
            let idx = (y * icon_width + x) * 4;
            let t = x as f32 / icon_width as f32;
            pixels[idx] = lerp_u8(start.r(), end.r(), t);
            pixels[idx + 1] = lerp_u8(start.g(), end.g(), t);
            pixels[idx + 2] = lerp_u8(start.b(), end.b(), t);
            pixels[idx + 3] = 255;
        }
    }

    let center_x = icon_width / 2;
    let center_y = icon_height / 2;

    // Note stem
    for y in (center_y - 16)..(center_y + 4) {
        for x in (center_x + 4)..(center_x + 8) {
            let idx = (y * icon_width + x) * 4;
            pixels[idx..idx + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    }

    // Note head
    for y in center_y..(center_y + 10) {
        for x in (center_x - 6)..(center_x + 4) {
            let dx = x as i32 - center_x as i32;
            let dy = y as i32 - (center_y + 5) as i32;
            if dx * dx + dy * dy < 25 {
                let idx = (y * icon_width + x) * 4;
                pixels[idx..idx + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_width as u32,
        height: icon_height as u32,
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}
