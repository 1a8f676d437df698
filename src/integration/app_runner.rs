use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand, cmd_executor::Services, gateway::TranslationGateway, raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        clipboard::SystemClipboard,
        config::Config,
        preferences::LanguageStore,
        speech::GoogleSpeech,
        translation::GoogleTranslator,
        tui::{Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the runtime from terminal events and gateway completions.
///
/// The loop ends on quit, or once the terminal has no more events and no
/// request is in flight.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Build a runner around any TUI and set of gateways.
    ///
    /// The persisted language pair is loaded here, so a missing or broken
    /// preferences file is replaced with the defaults before the first frame.
    pub fn new_with_config(
        config: Config,
        services: Services,
        tui: Arc<Mutex<dyn TuiLike>>,
    ) -> Result<Self> {
        let pair = services.store.load();
        log::info!("Starting with {} -> {}", pair.source, pair.target);
        let initial_state = AppState::new_with_config(pair, services.store.catalog(), config);

        let mut runtime = Runtime::new_with_executor(initial_state, services);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime
            .add_tui_sender(tui_cmd_tx)
            .map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            tui_cmd_rx,
            components: Components::new(),
        })
    }

    /// Runner with the Google gateways, the system clipboard and the
    /// preferences file in the user's data directory.
    pub fn new_with_real(config: Config, tui: Arc<Mutex<dyn TuiLike>>) -> Result<Self> {
        let translator = GoogleTranslator::new()?;
        let catalog = Arc::new(translator.supported_languages());
        let services = Services {
            translation: Arc::new(translator),
            speech: Arc::new(GoogleSpeech::new()?),
            clipboard: Arc::new(SystemClipboard::new()),
            store: Arc::new(LanguageStore::in_data_dir(catalog)),
        };
        Self::new_with_config(config, services, tui)
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        let mut input_closed = false;
        loop {
            let tui = Arc::clone(&self.tui);
            tokio::select! {
                event = async move {
                    let mut guard = tui.lock().await;
                    let event = guard.next().await;
                    event
                }, if !input_closed => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => input_closed = true,
                    }
                }
                true = self.runtime.recv_external() => {}
                Some(cmd) = self.tui_cmd_rx.recv() => self.handle_tui_command(cmd).await?,
                else => break,
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime.send_raw_msg(RawMsg::Error(e));
            }
            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                self.handle_tui_command(cmd).await?;
            }

            self.render().await?;

            let state = self.runtime.state();
            if state.system.should_quit {
                break;
            }
            if input_closed && !state.activity.is_busy() {
                log::info!("Input closed; shutting down");
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => self.runtime.send_raw_msg(RawMsg::Render),
            Event::Error(e) => self.runtime.send_raw_msg(RawMsg::Error(e)),
            Event::Init => {}
        }
    }

    async fn handle_tui_command(&mut self, cmd: TuiCommand) -> Result<()> {
        match cmd {
            TuiCommand::Resize { width, height } => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        let mut guard = self.tui.lock().await;
        guard.draw(&mut |f: &mut Frame<'_>| components.render(f, state))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use super::*;
    use crate::{
        infrastructure::tui::test::TestTui,
        test_helpers::{test_services, FakeSpeech, FakeTranslator, MemoryClipboard},
    };

    fn runner_with(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>, TempDir) {
        let (services, dir) = test_services(
            FakeTranslator::replying("Привет"),
            FakeSpeech::default(),
            MemoryClipboard::default(),
        );
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, events).expect("test tui"),
        ));
        let concrete = Arc::clone(&tui);
        let shared: Arc<Mutex<dyn TuiLike>> = concrete;
        let config = Config::default_settings().expect("embedded config parses");
        let runner = AppRunner::new_with_config(config, services, shared).expect("runner");
        (runner, tui, dir)
    }

    #[tokio::test]
    async fn test_runner_quits_on_ctrl_q() {
        let (mut runner, tui, _dir) = runner_with(vec![
            Event::Init,
            Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        ]);

        runner.run().await.expect("run");

        assert!(runner.runtime().state().system.should_quit);
        assert!(runner.runtime().state().input.is_blank());
        assert!(tui.lock().await.draw_count() >= 2);
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() {
        let (mut runner, tui, _dir) = runner_with(vec![Event::Resize(100, 30)]);

        runner.run().await.expect("run");

        assert_eq!(tui.lock().await.screen_lines().len(), 30);
    }

    #[tokio::test]
    async fn test_paste_lands_in_input() {
        let (mut runner, tui, _dir) = runner_with(vec![Event::Paste("Bonjour le monde".into())]);

        runner.run().await.expect("run");

        assert_eq!(runner.runtime().state().input.content(), "Bonjour le monde");
        assert!(tui.lock().await.screen_text().contains("Bonjour le monde"));
    }
}
