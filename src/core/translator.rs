use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{
    core::{
        msg::{
            editor::EditorMsg, language::LanguageMsg, service::ServiceMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{editing::EditOp, language::LanguageSide},
    presentation::config::keybindings::{Action, KeyBindings},
};

/// Outcome of looking a key up in the bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDispatch {
    /// The binding layer consumes the key; the text area never sees it
    Bound(Action),
    /// No binding; the key goes to the text area engine unchanged
    Unbound(KeyEvent),
}

/// Looks `key` up in `bindings`. Only code and modifiers take part in the
/// match, so press/repeat kinds and keyboard state flags are ignored.
pub fn dispatch_key(bindings: &KeyBindings, key: KeyEvent) -> KeyDispatch {
    let normalized = KeyEvent::new(key.code, key.modifiers);
    match bindings.get(&normalized) {
        Some(action) => KeyDispatch::Bound(*action),
        None => KeyDispatch::Unbound(key),
    }
}

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::UpdateStatusMessage(format!(
            "Error: {error}"
        )))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on which surface has focus
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if state.system.error.is_some() {
        return translate_error_dialog_keys(key);
    }

    let dispatch = dispatch_key(&state.config.config.keybindings, key);

    // Quit stays reachable from every surface
    if dispatch == KeyDispatch::Bound(Action::Quit) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if state.prompt.is_some() {
        return translate_prompt_keys(key);
    }

    match dispatch {
        KeyDispatch::Bound(action) => translate_action_to_msg(action),
        KeyDispatch::Unbound(key) => vec![Msg::Editor(EditorMsg::Key(key))],
    }
}

/// While the error dialog is open only dismissal is accepted
fn translate_error_dialog_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::System(SystemMsg::DismissError)],
        _ => vec![],
    }
}

fn translate_prompt_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Language(LanguageMsg::SubmitPrompt)],
        KeyCode::Esc => vec![Msg::Language(LanguageMsg::CancelPrompt)],
        _ => vec![Msg::Language(LanguageMsg::PromptKey(key))],
    }
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if state.system.error.is_some() {
        vec![]
    } else if state.prompt.is_some() {
        vec![Msg::Language(LanguageMsg::PromptPaste(text))]
    } else {
        vec![Msg::Editor(EditorMsg::Apply(EditOp::InsertText(text)))]
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    if let Some(op) = action.edit_op() {
        return vec![Msg::Editor(EditorMsg::Apply(op))];
    }

    match action {
        Action::Translate => vec![Msg::Service(ServiceMsg::TranslateRequested)],
        Action::Speak => vec![Msg::Service(ServiceMsg::SpeakRequested)],
        Action::Swap => vec![Msg::Language(LanguageMsg::Swap)],
        Action::ChangeSourceLanguage => {
            vec![Msg::Language(LanguageMsg::OpenPrompt(LanguageSide::Source))]
        }
        Action::ChangeTargetLanguage => {
            vec![Msg::Language(LanguageMsg::OpenPrompt(LanguageSide::Target))]
        }
        Action::Copy => vec![Msg::Editor(EditorMsg::Copy)],
        Action::Cut => vec![Msg::Editor(EditorMsg::Cut)],
        Action::Paste => vec![Msg::Editor(EditorMsg::Paste)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        // Editing actions are covered by edit_op above
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        core::state::{ErrorDialog, LanguagePrompt},
        infrastructure::config::Config,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[fixture]
    fn state() -> AppState {
        AppState {
            config: crate::core::state::ConfigState {
                config: Config::default_settings().expect("embedded config parses"),
            },
            ..Default::default()
        }
    }

    #[rstest]
    #[case(key(KeyCode::Enter, KeyModifiers::NONE), Msg::Service(ServiceMsg::TranslateRequested))]
    #[case(
        key(KeyCode::Enter, KeyModifiers::SHIFT),
        Msg::Editor(EditorMsg::Apply(EditOp::InsertNewline))
    )]
    #[case(key(KeyCode::Enter, KeyModifiers::CONTROL), Msg::Service(ServiceMsg::SpeakRequested))]
    #[case(key(KeyCode::Tab, KeyModifiers::NONE), Msg::Language(LanguageMsg::Swap))]
    #[case(
        key(KeyCode::Backspace, KeyModifiers::ALT),
        Msg::Editor(EditorMsg::Apply(EditOp::DeleteWordBackward))
    )]
    #[case(
        key(KeyCode::Char('u'), KeyModifiers::CONTROL),
        Msg::Editor(EditorMsg::Apply(EditOp::DeleteToLineStart))
    )]
    #[case(
        key(KeyCode::Char('a'), KeyModifiers::CONTROL),
        Msg::Editor(EditorMsg::Apply(EditOp::SelectAll))
    )]
    #[case(
        key(KeyCode::F(2), KeyModifiers::NONE),
        Msg::Language(LanguageMsg::OpenPrompt(LanguageSide::Source))
    )]
    #[case(key(KeyCode::Char('v'), KeyModifiers::CONTROL), Msg::Editor(EditorMsg::Paste))]
    fn test_bound_keys_are_consumed(
        state: AppState,
        #[case] input: KeyEvent,
        #[case] expected: Msg,
    ) {
        let msgs = translate_raw_to_domain(RawMsg::Key(input), &state);
        assert_eq!(msgs, vec![expected]);
    }

    #[rstest]
    fn test_unbound_keys_go_to_text_area(state: AppState) {
        let typed = key(KeyCode::Char('x'), KeyModifiers::NONE);
        let msgs = translate_raw_to_domain(RawMsg::Key(typed), &state);
        assert_eq!(msgs, vec![Msg::Editor(EditorMsg::Key(typed))]);
    }

    #[rstest]
    fn test_dispatch_ignores_kind_and_state(state: AppState) {
        let repeat = KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::KEYPAD,
        };
        assert_eq!(
            dispatch_key(&state.config.config.keybindings, repeat),
            KeyDispatch::Bound(Action::Swap)
        );
    }

    #[rstest]
    fn test_key_release_is_ignored(state: AppState) {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate_raw_to_domain(RawMsg::Key(release), &state).is_empty());
    }

    #[rstest]
    fn test_error_dialog_only_accepts_dismissal(mut state: AppState) {
        state.system.error = Some(ErrorDialog {
            title: "Invalid Language".to_string(),
            message: "nope".to_string(),
        });

        let typed = translate_raw_to_domain(
            RawMsg::Key(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            &state,
        );
        assert!(typed.is_empty());

        let esc = translate_raw_to_domain(
            RawMsg::Key(key(KeyCode::Esc, KeyModifiers::NONE)),
            &state,
        );
        assert_eq!(esc, vec![Msg::System(SystemMsg::DismissError)]);

        assert!(translate_raw_to_domain(RawMsg::Paste("x".into()), &state).is_empty());
    }

    #[rstest]
    fn test_prompt_captures_keys(mut state: AppState) {
        state.prompt = Some(LanguagePrompt::new(LanguageSide::Target));

        let enter = translate_raw_to_domain(
            RawMsg::Key(key(KeyCode::Enter, KeyModifiers::NONE)),
            &state,
        );
        assert_eq!(enter, vec![Msg::Language(LanguageMsg::SubmitPrompt)]);

        let esc = translate_raw_to_domain(
            RawMsg::Key(key(KeyCode::Esc, KeyModifiers::NONE)),
            &state,
        );
        assert_eq!(esc, vec![Msg::Language(LanguageMsg::CancelPrompt)]);

        // Tab is bound to Swap in the editor, but the prompt takes it verbatim
        let tab = key(KeyCode::Tab, KeyModifiers::NONE);
        let msgs = translate_raw_to_domain(RawMsg::Key(tab), &state);
        assert_eq!(msgs, vec![Msg::Language(LanguageMsg::PromptKey(tab))]);

        let quit = translate_raw_to_domain(
            RawMsg::Key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(quit, vec![Msg::System(SystemMsg::Quit)]);
    }

    #[rstest]
    fn test_paste_goes_to_focused_surface(mut state: AppState) {
        let msgs = translate_raw_to_domain(RawMsg::Paste("Bonjour".into()), &state);
        assert_eq!(
            msgs,
            vec![Msg::Editor(EditorMsg::Apply(EditOp::InsertText("Bonjour".into())))]
        );

        state.prompt = Some(LanguagePrompt::new(LanguageSide::Source));
        let msgs = translate_raw_to_domain(RawMsg::Paste("english".into()), &state);
        assert_eq!(msgs, vec![Msg::Language(LanguageMsg::PromptPaste("english".into()))]);
    }

    #[rstest]
    fn test_system_events(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(100, 40), &state),
            vec![Msg::System(SystemMsg::Resize(100, 40))]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }
}
