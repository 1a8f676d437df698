//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::{prelude::*, widgets::Block};

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::{key_event_to_string, Action, KeyBindings},
        widgets::{
            error_dialog::ErrorDialogWidget, language_bar::LanguageBarWidget,
            status_bar::StatusBarWidget,
        },
    },
};

pub mod input;
pub mod output;
pub mod prompt;

pub use input::InputComponent;
pub use output::OutputComponent;
pub use prompt::PromptComponent;

/// Actions advertised in the status line, in display order
const HINTED_ACTIONS: [Action; 6] = [
    Action::Translate,
    Action::Speak,
    Action::Swap,
    Action::ChangeSourceLanguage,
    Action::ChangeTargetLanguage,
    Action::Quit,
];

/// Collection of all components
pub struct Components {
    pub input: InputComponent,
    pub output: OutputComponent,
    pub prompt: PromptComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            input: InputComponent::new(),
            output: OutputComponent::new(),
            prompt: PromptComponent::new(),
        }
    }

    /// Render the whole screen: panes, bars, then overlays on top
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let styles = &state.config.config.styles;
        let area = frame.area();
        frame.render_widget(Block::default().style(styles.style("window")), area);

        let [input_area, bar_area, output_area, status_area] = Layout::vertical([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.input.view(state, frame, input_area);

        let pair = &state.languages.pair;
        frame.render_widget(
            LanguageBarWidget {
                source: &pair.source,
                target: &pair.target,
                activity: state.activity,
                button_style: styles.style("button"),
                style: styles.style("window"),
            },
            bar_area,
        );

        self.output.view(state, frame, output_area);

        let hints = key_hints(&state.config.config.keybindings);
        frame.render_widget(
            StatusBarWidget::new(state.system.status_message().map(String::as_str), &hints)
                .styles(styles.style("status"), styles.style("hint")),
            status_area,
        );

        self.prompt.view(state, frame, area);

        if let Some(dialog) = &state.system.error {
            frame.render_widget(ErrorDialogWidget::new(dialog, styles.style("error")), area);
        }
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

/// `"<enter> Translate  <f5> Speak ..."`; actions without a key are left out.
/// When several keys map to one action the shortest spelling is shown.
pub fn key_hints(bindings: &KeyBindings) -> String {
    HINTED_ACTIONS
        .iter()
        .filter_map(|action| {
            bindings
                .iter()
                .filter(|(_, bound)| *bound == action)
                .map(|(key, _)| key_event_to_string(key))
                .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
                .map(|key| format!("{key} {action}"))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
