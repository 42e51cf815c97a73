mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::protocol::ValueChanged;
use tracing_subscriber::EnvFilter;

use crate::controller::orchestration::build_models;
use crate::ui::WidgetGalleryApp;

const APP_TITLE: &str = "Input Widgets";

#[derive(Parser, Debug)]
#[command(about = "Desktop gallery for the code input, checkbox and radio widgets")]
struct Args {
    /// Settings file; defaults to ./widgets.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    otp_length: Option<usize>,
    #[arg(long)]
    expected_code: Option<String>,
}

impl Args {
    fn apply(&self, settings: &mut config::Settings) {
        if let Some(length) = self.otp_length {
            settings.otp_length = length;
        }
        if let Some(code) = &self.expected_code {
            settings.expected_code = code.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    args.apply(&mut settings);
    tracing::info!(otp_length = settings.otp_length, "starting widget gallery");

    let (change_tx, change_rx) = bounded::<ValueChanged>(256);
    let models = build_models(&settings, change_tx)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(WidgetGalleryApp::new(models, change_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell exited with error: {err}"))
}
