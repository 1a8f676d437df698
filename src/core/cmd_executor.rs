use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        gateway::{ClipboardGateway, SpeechGateway, TranslationGateway},
        msg::{editor::EditorMsg, service::ServiceMsg, system::SystemMsg, Msg},
    },
    domain::language::LanguagePair,
    infrastructure::preferences::LanguageStore,
};

/// External collaborators used to carry out commands
#[derive(Clone)]
pub struct Services {
    pub translation: Arc<dyn TranslationGateway>,
    pub speech: Arc<dyn SpeechGateway>,
    pub clipboard: Arc<dyn ClipboardGateway>,
    pub store: Arc<LanguageStore>,
}

/// Command executor that turns Elm commands into gateway calls.
///
/// Network and audio work runs on tokio tasks; every outcome comes back to the
/// runtime as a `Msg` over `msg_sender`.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    services: Option<Services>,
    msg_sender: Option<mpsc::UnboundedSender<Msg>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create an executor without services (commands are logged and dropped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor wired to the gateways and the runtime's message channel
    pub fn new_with_services(services: Services, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            services: Some(services),
            msg_sender: Some(msg_sender),
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Translate {
                text,
                source,
                target,
            } => {
                let Some((services, tx)) = self.wired() else {
                    log::warn!("Translate ignored: no translation service configured");
                    return Ok(());
                };
                let translation = Arc::clone(&services.translation);
                let (text, source, target) = (text.clone(), source.clone(), target.clone());
                tokio::spawn(async move {
                    log::info!("Translating {} chars {source} -> {target}", text.chars().count());
                    let result = translation.translate(&text, &source, &target).await;
                    if let Err(e) = &result {
                        log::error!("Translation failed: {e}");
                    }
                    let _ = tx.send(Msg::Service(ServiceMsg::TranslationCompleted(result)));
                });
            }

            Cmd::Speak { text, language } => {
                let Some((services, tx)) = self.wired() else {
                    log::warn!("Speak ignored: no speech service configured");
                    return Ok(());
                };
                let speech = Arc::clone(&services.speech);
                let (text, language) = (text.clone(), language.clone());
                tokio::spawn(async move {
                    let result = match speech.synthesize(&text, &language).await {
                        Ok(audio) => speech.play(audio).await,
                        Err(e) => Err(e),
                    };
                    if let Err(e) = &result {
                        log::error!("Speech failed: {e}");
                    }
                    let _ = tx.send(Msg::Service(ServiceMsg::SpeechCompleted(result)));
                });
            }

            Cmd::SaveLanguages(pair) => self.save_languages(pair),

            Cmd::CopyToClipboard(text) => {
                let Some((services, tx)) = self.wired() else {
                    log::warn!("CopyToClipboard ignored: no clipboard configured");
                    return Ok(());
                };
                let status = match services.clipboard.set_text(text) {
                    Ok(()) => "Copied".to_string(),
                    Err(e) => {
                        log::warn!("{e}");
                        e.to_string()
                    }
                };
                tx.send(Msg::System(SystemMsg::UpdateStatusMessage(status)))?;
            }

            Cmd::ReadClipboard => {
                let Some((services, tx)) = self.wired() else {
                    log::warn!("ReadClipboard ignored: no clipboard configured");
                    return Ok(());
                };
                let msg = match services.clipboard.get_text() {
                    Ok(text) => Msg::Editor(EditorMsg::ClipboardText(text)),
                    Err(e) => {
                        log::warn!("{e}");
                        Msg::System(SystemMsg::UpdateStatusMessage(e.to_string()))
                    }
                };
                tx.send(msg)?;
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    fn wired(&self) -> Option<(&Services, mpsc::UnboundedSender<Msg>)> {
        match (&self.services, &self.msg_sender) {
            (Some(services), Some(tx)) => Some((services, tx.clone())),
            _ => None,
        }
    }

    /// Writes run inline so consecutive saves land in order.
    fn save_languages(&self, pair: &LanguagePair) {
        let Some((services, tx)) = self.wired() else {
            log::warn!("SaveLanguages ignored: no preference store configured");
            return;
        };
        match services.store.save(pair, None) {
            Ok(written) => log::info!("Saved languages {} -> {}", written.source, written.target),
            Err(e) => {
                log::error!("Failed to save languages: {e}");
                let _ = tx.send(Msg::System(SystemMsg::UpdateStatusMessage(format!(
                    "Could not save language preferences: {e}"
                ))));
            }
        }
    }
}
