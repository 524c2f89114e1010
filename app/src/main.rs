//! Findings results viewer
//!
//! Web frontend entry point: initializes logging and mounts the root
//! component once the document is ready.

#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod types;
mod utils;
mod visibility;

use dioxus_logger::tracing::{Level, info};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting findings viewer");
    dioxus::launch(app::App);
}
