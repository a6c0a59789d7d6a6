//! Dialogue App — native entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It loads the model once, assembles the platform adapters and hands
//! them to the egui UI.

mod app;
mod fatal;

use std::process::ExitCode;

use dialogue_core::cache::ModelCache;
use dialogue_platform::model::load_model;
use dialogue_types::config::AppConfig;

pub use app::DialogueApp;
pub use fatal::FatalApp;

pub const WINDOW_TITLE: &str = "The Dialogue Engine";

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    }
}

/// Load the model, then run the chat window until it is closed.
///
/// A model that fails to load is reported in its own window and the
/// process exits with a failure status.
pub fn run(config: AppConfig) -> ExitCode {
    let cache = ModelCache::new();
    let model = match cache.get_or_load(|| load_model(&config.model)) {
        Ok(model) => model,
        Err(e) => {
            log::error!("{}", e);
            run_fatal(FatalApp::new(&e));
            return ExitCode::FAILURE;
        }
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| Ok(Box::new(DialogueApp::new(model, &config)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Window error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_fatal(app: FatalApp) {
    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| Ok(Box::new(app))),
    );
    if let Err(e) = result {
        log::error!("Could not open the error window: {}", e);
    }
}
