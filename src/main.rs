#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Hostboard - desktop dashboard for your host fleet
#[derive(Parser, Debug)]
#[command(name = "hostboard")]
#[command(about = "Hostboard - desktop dashboard for your host fleet")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!("Starting hostboard ({}x{})", args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Hostboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
