use std::mem;

use crate::{
    core::{
        cmd::Cmd,
        msg::{
            editor::EditorMsg, language::LanguageMsg, service::ServiceMsg, system::SystemMsg, Msg,
        },
        state::{Activity, AppState, LanguagePrompt},
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::{
        editing::{self, EditOp},
        error::TranslatorError,
        language::LanguageSide,
        text_buffer::TextBuffer,
    },
};

pub const INVALID_LANGUAGE_TITLE: &str = "Invalid Language";
pub const INVALID_LANGUAGE_MESSAGE: &str =
    "The selected language code is invalid or not supported!";
pub const TRANSLATION_FAILED_TITLE: &str = "Translation failed";
pub const SPEECH_FAILED_TITLE: &str = "Speech failed";

/// Collaborators the pure update path may consult
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Without a text area engine, unbound keys leave the buffers unchanged.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &NoopTextAreaEngine,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Editor(editor_msg) => update_editor(editor_msg, &mut state, ctx),
        Msg::Language(language_msg) => update_language(language_msg, &mut state, ctx),
        Msg::Service(service_msg) => update_service(service_msg, &mut state),
    };
    (state, commands)
}

fn update_editor(msg: EditorMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        EditorMsg::Apply(op) => {
            apply_to_input(state, &op);
            vec![]
        }

        EditorMsg::Key(key) => {
            let edited = ctx.text_area.apply_keys(&state.input.snapshot(), &[key]);
            state.input.apply_snapshot(edited);
            vec![]
        }

        EditorMsg::Copy => match state.input.selected_text() {
            Some(text) => vec![Cmd::CopyToClipboard(text)],
            None => set_status(state, "Nothing selected"),
        },

        EditorMsg::Cut => match state.input.selected_text() {
            Some(text) => {
                apply_to_input(state, &EditOp::DeleteSelection);
                vec![Cmd::CopyToClipboard(text)]
            }
            None => set_status(state, "Nothing selected"),
        },

        EditorMsg::Paste => vec![Cmd::ReadClipboard],

        // The read finishes a cycle later; a modal may have opened meanwhile
        EditorMsg::ClipboardText(text) => {
            if state.system.error.is_some() {
                return vec![];
            }
            match state.prompt.as_mut() {
                Some(prompt) => paste_into_prompt(prompt, &text),
                None => apply_to_input(state, &EditOp::InsertText(text)),
            }
            vec![]
        }
    }
}

fn apply_to_input(state: &mut AppState, op: &EditOp) {
    let input = mem::take(&mut state.input);
    state.input = editing::apply(input, op);
}

fn update_language(msg: LanguageMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        LanguageMsg::OpenPrompt(side) => {
            if let Some(cmds) = reject_when_busy(state) {
                return cmds;
            }
            state.prompt = Some(LanguagePrompt::new(side));
            vec![]
        }

        LanguageMsg::PromptKey(key) => {
            if let Some(prompt) = state.prompt.as_mut() {
                let edited = ctx.text_area.apply_keys(&prompt.input.snapshot(), &[key]);
                prompt.input.apply_snapshot(edited);
                keep_single_line(&mut prompt.input);
            }
            vec![]
        }

        LanguageMsg::PromptPaste(text) => {
            if let Some(prompt) = state.prompt.as_mut() {
                paste_into_prompt(prompt, &text);
            }
            vec![]
        }

        LanguageMsg::SubmitPrompt => match state.prompt.take() {
            Some(prompt) => change_language(state, prompt.side, &prompt.input.content()),
            None => vec![],
        },

        LanguageMsg::CancelPrompt => {
            state.prompt = None;
            vec![]
        }

        LanguageMsg::Change { side, code } => change_language(state, side, &code),

        LanguageMsg::Swap => {
            if let Some(cmds) = reject_when_busy(state) {
                return cmds;
            }
            swap(state)
        }
    }
}

/// Exchanges the codes and the buffer contents, then persists the new pair.
fn swap(state: &mut AppState) -> Vec<Cmd> {
    state.languages.pair = state.languages.pair.swapped();

    let previous_input = state.input.content();
    let previous_output = state.output.text().to_string();
    state.input.replace_all(&previous_output);
    state.output.set(previous_input);

    let pair = state.languages.pair.clone();
    state.system.status_message = Some(format!("{} -> {}", pair.source, pair.target));
    vec![Cmd::SaveLanguages(pair)]
}

/// Sets one side of the pair from a display name or code, matched exactly as
/// typed. An empty entry is ignored and an unknown one leaves the pair
/// untouched.
fn change_language(state: &mut AppState, side: LanguageSide, entry: &str) -> Vec<Cmd> {
    if entry.is_empty() {
        return vec![];
    }
    if let Some(cmds) = reject_when_busy(state) {
        return cmds;
    }

    let catalog = &state.languages.catalog;
    if !catalog.validate(entry) {
        let err = TranslatorError::InvalidLanguageCode(entry.to_string());
        let mut cmds = state.system.update(SystemMsg::ShowError {
            title: INVALID_LANGUAGE_TITLE.to_string(),
            message: INVALID_LANGUAGE_MESSAGE.to_string(),
        });
        cmds.push(Cmd::LogInfo {
            message: err.to_string(),
        });
        return cmds;
    }

    let code = catalog.resolve(entry);
    state.languages.pair.set(side, code.clone());
    state.system.status_message = Some(format!("{side} language set to {code}"));
    vec![Cmd::SaveLanguages(state.languages.pair.clone())]
}

fn update_service(msg: ServiceMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ServiceMsg::TranslateRequested => {
            if let Some(cmds) = reject_when_busy(state) {
                return cmds;
            }
            // The previous result goes away even when there is nothing to translate
            state.output.clear();
            let text = state.input.trimmed_text();
            if text.is_empty() {
                return vec![];
            }
            state.activity = Activity::Translating;
            state.system.status_message = Some(Activity::Translating.to_string());
            let pair = &state.languages.pair;
            vec![Cmd::Translate {
                text,
                source: pair.source.clone(),
                target: pair.target.clone(),
            }]
        }

        ServiceMsg::TranslationCompleted(result) => {
            if state.activity != Activity::Translating {
                return ignore_stale("translation", state.activity);
            }
            state.activity = Activity::Idle;
            state.system.status_message = None;
            match result {
                Ok(text) => {
                    state.output.set(text);
                    vec![]
                }
                Err(err) => {
                    state.output.clear();
                    state.system.update(SystemMsg::ShowError {
                        title: TRANSLATION_FAILED_TITLE.to_string(),
                        message: err.to_string(),
                    })
                }
            }
        }

        ServiceMsg::SpeakRequested => {
            if let Some(cmds) = reject_when_busy(state) {
                return cmds;
            }
            let text = state.input.trimmed_text();
            if text.is_empty() {
                return vec![];
            }
            state.activity = Activity::Speaking;
            state.system.status_message = Some(Activity::Speaking.to_string());
            vec![Cmd::Speak {
                text,
                language: state.languages.pair.source.clone(),
            }]
        }

        ServiceMsg::SpeechCompleted(result) => {
            if state.activity != Activity::Speaking {
                return ignore_stale("speech", state.activity);
            }
            state.activity = Activity::Idle;
            state.system.status_message = None;
            match result {
                Ok(()) => vec![],
                Err(err) => state.system.update(SystemMsg::ShowError {
                    title: SPEECH_FAILED_TITLE.to_string(),
                    message: err.to_string(),
                }),
            }
        }
    }
}

/// At most one translate/speak request runs at a time; everything that would
/// race with it is refused while one is in flight.
fn reject_when_busy(state: &mut AppState) -> Option<Vec<Cmd>> {
    if !state.activity.is_busy() {
        return None;
    }
    state.system.status_message = Some(format!("Busy: {}", state.activity));
    Some(vec![])
}

fn ignore_stale(kind: &str, activity: Activity) -> Vec<Cmd> {
    vec![Cmd::LogInfo {
        message: format!("Ignoring {kind} completion while {activity}"),
    }]
}

fn set_status(state: &mut AppState, message: &str) -> Vec<Cmd> {
    state.system.status_message = Some(message.to_string());
    vec![]
}

fn paste_into_prompt(prompt: &mut LanguagePrompt, text: &str) {
    prompt.input.insert_str(&text.replace(['\r', '\n'], " "));
}

/// The prompt is a one-line entry; anything that split it is folded back.
fn keep_single_line(buffer: &mut TextBuffer) {
    if buffer.line_count() > 1 {
        let joined = buffer.lines().join(" ");
        buffer.replace_all(&joined);
    }
}
