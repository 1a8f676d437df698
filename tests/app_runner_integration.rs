use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use tokio::sync::Mutex;

use goodtranslator::{
    core::{cmd_executor::Services, state::Activity},
    domain::language::LanguagePair,
    infrastructure::{
        config::Config,
        preferences::{LanguageStore, PREFERENCES_FILE},
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
    test_helpers::{sample_catalog, FakeSpeech, FakeTranslator, MemoryClipboard},
};

// Headless runner: TestTui replays the given events and then closes input,
// which ends the loop once no request is in flight.
fn headless_runner(
    events: Vec<Event>,
    translator: FakeTranslator,
    speech: FakeSpeech,
) -> (AppRunner, Arc<Mutex<TestTui>>, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = LanguageStore::new(
        dir.path().join(PREFERENCES_FILE),
        Arc::new(sample_catalog()),
    );
    let services = Services {
        translation: Arc::new(translator),
        speech: Arc::new(speech),
        clipboard: Arc::new(MemoryClipboard::default()),
        store: Arc::new(store),
    };

    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, events).expect("failed to create TestTui"),
    ));
    let concrete = Arc::clone(&tui);
    let shared: Arc<Mutex<dyn TuiLike>> = concrete;
    let cfg = Config::default_settings().expect("embedded config parses");
    let runner =
        AppRunner::new_with_config(cfg, services, shared).expect("failed to create AppRunner");
    (runner, tui, dir)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

#[tokio::test]
async fn test_enter_translates_and_shows_result() {
    let translator = FakeTranslator::replying("Привет");
    let mut events = typed("Bonjour");
    events.push(key(KeyCode::Enter));
    let (mut runner, tui, _dir) =
        headless_runner(events, translator.clone(), FakeSpeech::default());

    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.input.content(), "Bonjour");
    assert_eq!(state.output.text(), "Привет");
    assert_eq!(
        translator.calls(),
        vec![("Bonjour".to_string(), "fr".to_string(), "ru".to_string())]
    );
    assert!(tui.lock().await.screen_text().contains("Привет"));
}

#[tokio::test]
async fn test_enter_on_blank_input_does_nothing() {
    let translator = FakeTranslator::replying("unused");
    let mut events = typed("   ");
    events.push(key(KeyCode::Enter));
    let (mut runner, _tui, _dir) =
        headless_runner(events, translator.clone(), FakeSpeech::default());

    runner.run().await.expect("run");

    assert!(runner.runtime().state().output.is_empty());
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn test_ctrl_enter_speaks_source_text() {
    let speech = FakeSpeech::default();
    let mut events = typed("Salut");
    events.push(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL)));
    let (mut runner, _tui, _dir) =
        headless_runner(events, FakeTranslator::replying("unused"), speech.clone());

    runner.run().await.expect("run");

    assert_eq!(runner.runtime().state().activity, Activity::Idle);
    assert_eq!(speech.spoken(), vec![("Salut".to_string(), "fr".to_string())]);
    assert_eq!(speech.played(), 1);
}

#[tokio::test]
async fn test_failed_translation_opens_dialog() {
    let mut events = typed("Bonjour");
    events.push(key(KeyCode::Enter));
    let (mut runner, tui, _dir) = headless_runner(
        events,
        FakeTranslator::failing("connection refused"),
        FakeSpeech::default(),
    );

    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.activity, Activity::Idle);
    assert!(state.output.is_empty());
    let dialog = state.system.error.clone().expect("error dialog");
    assert!(dialog.message.contains("connection refused"));
    assert!(tui.lock().await.screen_text().contains("[Enter] OK"));
}

#[tokio::test]
async fn test_swap_twice_restores_pair() {
    let events = vec![key(KeyCode::Tab), key(KeyCode::Tab)];
    let (mut runner, _tui, dir) = headless_runner(
        events,
        FakeTranslator::replying("unused"),
        FakeSpeech::default(),
    );

    runner.run().await.expect("run");

    assert_eq!(
        runner.runtime().state().languages.pair,
        LanguagePair::new("fr", "ru")
    );
    let saved = std::fs::read_to_string(dir.path().join(PREFERENCES_FILE)).expect("saved");
    assert!(saved.contains(r#""source_lang":"fr""#));
}

#[tokio::test]
async fn test_unknown_language_shows_invalid_language_dialog() {
    let mut events = vec![key(KeyCode::F(3))];
    events.extend(typed("klingon"));
    events.push(key(KeyCode::Enter));
    let (mut runner, tui, _dir) = headless_runner(
        events,
        FakeTranslator::replying("unused"),
        FakeSpeech::default(),
    );

    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.languages.pair, LanguagePair::new("fr", "ru"));
    assert_eq!(
        state.system.error.as_ref().map(|e| e.title.as_str()),
        Some("Invalid Language")
    );
    assert!(tui.lock().await.screen_text().contains("Invalid Language"));
}

#[tokio::test]
async fn test_ctrl_q_quits_before_remaining_events() {
    let mut events = vec![Event::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::CONTROL,
    ))];
    events.extend(typed("ignored"));
    let (mut runner, _tui, _dir) = headless_runner(
        events,
        FakeTranslator::replying("unused"),
        FakeSpeech::default(),
    );

    runner.run().await.expect("run");

    assert!(runner.runtime().state().system.should_quit);
    assert!(runner.runtime().state().input.is_blank());
}
