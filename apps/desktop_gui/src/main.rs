use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, FormController, Settings};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::ShippingFormApp;

#[derive(Parser, Debug)]
#[command(name = "shipping-address-gui", about = "Shipping address entry form")]
struct Args {
    /// JSON file backing the local key-value store.
    #[arg(long)]
    storage_path: Option<PathBuf>,
    /// Reject writes that would grow the store past this many bytes.
    #[arg(long)]
    quota_bytes: Option<usize>,
}

impl Args {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(path) = self.storage_path {
            settings.storage_path = path;
        }
        if let Some(quota) = self.quota_bytes {
            settings.quota_bytes = Some(quota);
        }
        settings
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Args::parse().apply(load_settings());
    tracing::info!(path = %settings.storage_path.display(), "using address storage");

    let form =
        FormController::new(settings.address_store()).with_timings(settings.status_timings());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Shipping Address Form")
            .with_inner_size([760.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shipping Address Form",
        options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(ShippingFormApp::new(form)))
        }),
    )
}
