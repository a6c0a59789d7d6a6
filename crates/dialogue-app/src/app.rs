//! Main egui application — composes the panels around one chat session.

use std::thread::JoinHandle;

use egui::{self, CentralPanel, SidePanel};

use dialogue_core::event_bus::EventBus;
use dialogue_core::ports::ChatStorePort;
use dialogue_core::{ChatArchive, ChatModel, TurnController};
use dialogue_platform::storage::JsonFileStore;
use dialogue_types::config::{AppConfig, SamplingConfig};
use dialogue_types::event::Notice;
use dialogue_types::session::Session;
use dialogue_ui::panels::sidebar::SidebarAction;
use dialogue_ui::panels::{chat, header, sidebar};
use dialogue_ui::state::UiState;
use dialogue_ui::theme;

/// One window, one session
pub struct DialogueApp {
    session: Session,
    ui_state: UiState,
    controller: TurnController,
    archive: ChatArchive,
    first_frame: bool,
}

impl DialogueApp {
    pub fn new(model: ChatModel, config: &AppConfig) -> Self {
        let store = JsonFileStore::new(config.chat_file.clone());
        Self::with_store(model, config.sampling, Box::new(store))
    }

    pub fn with_store(
        model: ChatModel,
        sampling: SamplingConfig,
        store: Box<dyn ChatStorePort>,
    ) -> Self {
        log::info!(
            "Session ready (model backend {}, chat file {})",
            model.backend_name(),
            store.location()
        );
        Self {
            session: Session::new(sampling),
            ui_state: UiState::new(),
            controller: TurnController::new(model, EventBus::new()),
            archive: ChatArchive::new(store),
            first_frame: true,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Start a turn for `text` on a worker thread.
    ///
    /// Empty input does nothing. The worker asks `ctx` for a repaint once
    /// its reply is on the bus.
    pub fn submit(&mut self, text: &str, ctx: &egui::Context) -> Option<JoinHandle<()>> {
        match self.controller.begin_turn(&mut self.session, text) {
            Ok(Some(pending)) => {
                self.ui_state.notice = None;
                let ctx = ctx.clone();
                Some(self.controller.dispatch(pending, move || ctx.request_repaint()))
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Submit rejected: {}", e);
                self.ui_state.set_notice(Notice::error(e.to_string()));
                None
            }
        }
    }

    /// Apply finished turns to the session. Returns whether anything arrived.
    pub fn pump_events(&mut self) -> bool {
        let outcomes = self.controller.apply_events(&mut self.session);
        if outcomes.is_empty() {
            return false;
        }
        self.ui_state.process_outcomes(outcomes);
        true
    }

    pub fn handle_sidebar(&mut self, action: SidebarAction) {
        let notice = match action {
            SidebarAction::None => return,
            SidebarAction::Save => self.archive.save(&self.session),
            SidebarAction::Load => self.archive.load(&mut self.session),
            SidebarAction::Clear => self.archive.clear(&mut self.session),
        };
        self.ui_state.set_notice(notice);
    }
}

impl eframe::App for DialogueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.pump_events() {
            ctx.request_repaint();
        }

        let idle = self.session.is_idle();
        if !idle {
            // keep the spinner moving
            ctx.request_repaint();
        }

        // ── Sidebar ──────────────────────────────────────────
        let mut action = SidebarAction::None;
        SidePanel::left("sidebar")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                action = sidebar::sidebar_panel(
                    ui,
                    &mut self.session.sampling,
                    idle,
                    self.ui_state.notice.as_ref(),
                );
            });
        self.handle_sidebar(action);

        // ── Main content ─────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            header::header(ui);
            ui.separator();
            submitted = chat::chat_panel(ui, &self.session, &mut self.ui_state);
        });

        if let Some(text) = submitted {
            // the worker runs detached; its reply comes back through the bus
            drop(self.submit(&text, ctx));
        }
    }
}
