#[cfg(test)]
mod tests {
    use crate::panels::chat::chat_panel;
    use crate::panels::sidebar::{sidebar_panel, SidebarAction};
    use crate::state::*;
    use dialogue_core::TurnOutcome;
    use dialogue_types::config::SamplingConfig;
    use dialogue_types::event::Notice;
    use dialogue_types::message::Message;
    use dialogue_types::session::Session;

    /// Run one headless frame with `f` inside a central panel
    fn run_frame(mut f: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| f(ui));
        });
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(state.notice.is_none());
        assert_eq!(state.status_text, STATUS_READY);
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert!(state.notice.is_none());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_turn_started() {
        let mut state = UiState::new();
        state.process_outcomes(vec![TurnOutcome::Started { turn_id: 1 }]);
        assert_eq!(state.status_text, STATUS_GENERATING);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_ui_state_turn_replied() {
        let mut state = UiState::new();
        state.process_outcomes(vec![
            TurnOutcome::Started { turn_id: 1 },
            TurnOutcome::Replied { turn_id: 1 },
        ]);
        assert_eq!(state.status_text, STATUS_READY);
        assert!(!state.status_is_error());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_ui_state_retry_after_failure_clears_error_status() {
        let mut state = UiState::new();
        state.process_outcomes(vec![
            TurnOutcome::Started { turn_id: 1 },
            TurnOutcome::Failed {
                turn_id: 1,
                message: "Generation failed: device lost".to_string(),
            },
            TurnOutcome::Started { turn_id: 2 },
        ]);
        assert_eq!(state.status_text, STATUS_GENERATING);
        assert!(!state.status_is_error());
    }

    #[test]
    fn test_ui_state_turn_failed_sets_error_notice() {
        let mut state = UiState::new();
        state.process_outcomes(vec![TurnOutcome::Failed {
            turn_id: 3,
            message: "Generation failed: out of memory".to_string(),
        }]);
        assert_eq!(state.status_text, STATUS_FAILED);
        assert!(state.status_is_error());
        let notice = state.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Generation failed: out of memory");
    }

    #[test]
    fn test_ui_state_stale_outcome_ignored() {
        let mut state = UiState::new();
        state.set_notice(Notice::success("Chat saved as saved_chat.json"));
        state.process_outcomes(vec![TurnOutcome::Stale { turn_id: 9 }]);
        assert_eq!(state.status_text, STATUS_READY);
        assert_eq!(
            state.notice,
            Some(Notice::success("Chat saved as saved_chat.json"))
        );
    }

    #[test]
    fn test_ui_state_set_notice_replaces() {
        let mut state = UiState::new();
        state.set_notice(Notice::success("Chat loaded!"));
        state.set_notice(Notice::error("No saved chat found!"));
        assert_eq!(state.notice, Some(Notice::error("No saved chat found!")));
    }

    // ─── Submission Tests ────────────────────────────────────

    #[test]
    fn test_take_submission_returns_raw_text_and_clears() {
        let mut state = UiState::new();
        state.input_text = "  Hello  ".to_string();
        assert_eq!(state.take_submission(), Some("  Hello  ".to_string()));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_submission_empty_is_none() {
        let mut state = UiState::new();
        assert_eq!(state.take_submission(), None);
    }

    #[test]
    fn test_take_submission_whitespace_is_submitted_and_clears() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert_eq!(state.take_submission(), Some("   ".to_string()));
        assert!(state.input_text.is_empty());
    }

    // ─── Panel Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_panel_renders_without_submission() {
        let mut session = Session::default();
        session.append(Message::user("Hello"));
        session.append(Message::bot("Hi there! How are you doing today?"));
        let mut state = UiState::new();
        state.input_text = "draft".to_string();

        let mut submitted = Some(String::new());
        run_frame(|ui| submitted = chat_panel(ui, &session, &mut state));

        assert_eq!(submitted, None);
        assert_eq!(state.input_text, "draft");
    }

    #[test]
    fn test_chat_panel_renders_while_generating() {
        let mut session = Session::default();
        session.append(Message::user("Hello"));
        session.start_generating();
        let mut state = UiState::new();

        let mut submitted = Some(String::new());
        run_frame(|ui| submitted = chat_panel(ui, &session, &mut state));
        assert_eq!(submitted, None);
    }

    #[test]
    fn test_chat_panel_renders_failed_status() {
        let mut session = Session::default();
        session.append(Message::user("Hello"));
        let mut state = UiState::new();
        state.process_outcomes(vec![TurnOutcome::Failed {
            turn_id: 1,
            message: "Generation failed: device lost".to_string(),
        }]);

        let mut submitted = Some(String::new());
        run_frame(|ui| submitted = chat_panel(ui, &session, &mut state));

        assert_eq!(submitted, None);
        assert_eq!(state.status_text, STATUS_FAILED);
    }

    #[test]
    fn test_sidebar_panel_keeps_sampling_without_input() {
        let mut sampling = SamplingConfig::new(0.7, 120);
        let notice = Notice::error("No saved chat found!");

        let mut action = SidebarAction::Save;
        run_frame(|ui| action = sidebar_panel(ui, &mut sampling, true, Some(&notice)));

        assert_eq!(action, SidebarAction::None);
        assert_eq!(sampling, SamplingConfig::new(0.7, 120));
    }
}
