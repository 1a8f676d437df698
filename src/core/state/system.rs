use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Error popup shown until the user dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub error: Option<ErrorDialog>,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError { title, message } => {
                let log = Cmd::LogError {
                    message: format!("{title}: {message}"),
                };
                self.error = Some(ErrorDialog { title, message });
                vec![log]
            }

            SystemMsg::DismissError => {
                self.error = None;
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_flow() {
        let mut system = SystemState::default();
        assert!(system.status_message().is_none());

        system.update(SystemMsg::UpdateStatusMessage("Copied".to_string()));
        assert_eq!(system.status_message(), Some(&"Copied".to_string()));

        system.update(SystemMsg::ClearStatusMessage);
        assert!(system.status_message().is_none());
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_error_dialog_show_and_dismiss() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError {
            title: "Translation failed".to_string(),
            message: "timeout".to_string(),
        });
        assert_eq!(
            system.error,
            Some(ErrorDialog {
                title: "Translation failed".to_string(),
                message: "timeout".to_string(),
            })
        );
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));

        system.update(SystemMsg::DismissError);
        assert!(system.error.is_none());
    }
}
