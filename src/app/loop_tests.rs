use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::features::home::CACHE_FAILED_MESSAGE;
use crate::app::state::{AppMode, AppState, CommandResult, StatusSeverity, ANALYZE_FAILED_MESSAGE};
use crate::domain::analysis::{ApiError, MockAnalysisApi};
use crate::domain::models::{AnalyzeRequest, AnalyzeResponse, ApiHealth, CacheResponse, SubmissionId};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn online_state() -> AppState<'static> {
    let mut state = AppState::default();
    state.home.api_health = ApiHealth::Online;
    state.home.url_input.set_text(VIDEO_URL);
    state.home.sync_video();
    state
}

#[tokio::test]
async fn test_health_probe_success() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_health().times(1).returning(|| Ok(()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::CheckHealth, Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::HealthChecked(ApiHealth::Online));
}

#[tokio::test]
async fn test_health_probe_failure_goes_offline() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_health()
        .times(1)
        .returning(|| Err(ApiError::Status(503)));
    mock.expect_base_url()
        .returning(|| "http://localhost:8000".to_string());

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::CheckHealth, Arc::new(mock), tx).unwrap();

    let mut state = AppState::default();
    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);
    assert_eq!(state.home.api_health, ApiHealth::Offline);
    assert!(!state.home.controls().url_input);
}

#[tokio::test]
async fn test_analyze_success_reaches_state() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_analyze()
        .withf(|request: &AnalyzeRequest| {
            request.url == VIDEO_URL && request.command == "Summarize this video"
        })
        .times(1)
        .returning(|_| {
            Ok(AnalyzeResponse {
                text: "A classic.".to_string(),
                metadata: Some("tokens: 12".to_string()),
            })
        });

    let mut state = online_state();
    state.mode = AppMode::CommandPalette;
    state.palette.query.set_text("Summarize this video");
    let command = crate::app::reducer::update(&mut state, Action::SubmitQuery).unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(command, Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);
    match &state.palette.result {
        CommandResult::Success(answer) => {
            assert_eq!(answer.text, "A classic.");
            assert_eq!(answer.metadata.as_deref(), Some("tokens: 12"));
        }
        other => panic!("Expected success, got {other:?}"),
    }
    assert_eq!(state.palette.in_flight, None);
}

#[tokio::test]
async fn test_analyze_failure_uses_fixed_message() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_analyze()
        .returning(|_| Err(ApiError::Status(500)));

    let (tx, mut rx) = mpsc::channel(1);
    let request = AnalyzeRequest {
        url: VIDEO_URL.to_string(),
        command: "What are the key points?".to_string(),
    };
    handle_command(Command::Analyze(SubmissionId(7), request), Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::AnalyzeCompleted(SubmissionId(7), Err(ANALYZE_FAILED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_cache_status_and_failure() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_cache()
        .withf(|url: &str| url == VIDEO_URL)
        .times(1)
        .returning(|_| {
            Ok(CacheResponse {
                status: "cached".to_string(),
            })
        });
    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::CacheVideo(VIDEO_URL.to_string()), Arc::new(mock), tx).unwrap();
    assert_eq!(
        rx.recv().await.unwrap(),
        Action::VideoCached(Ok("cached".to_string()))
    );

    let mut mock = MockAnalysisApi::new();
    mock.expect_cache().returning(|_| Err(ApiError::Status(502)));
    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::CacheVideo(VIDEO_URL.to_string()), Arc::new(mock), tx).unwrap();

    let mut state = online_state();
    crate::app::reducer::update(&mut state, rx.recv().await.unwrap());
    let status = state.status.unwrap();
    assert_eq!(status.text, CACHE_FAILED_MESSAGE);
    assert_eq!(status.severity, StatusSeverity::Error);
}

#[tokio::test]
async fn test_loop_probes_health_then_quits() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_health().times(1).returning(|| Ok(()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(10);

    let feeder = tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), Arc::new(mock), event_rx),
    )
    .await;
    assert!(matches!(result, Ok(Ok(()))));
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockAnalysisApi::new();
    mock.expect_health().returning(|| Ok(()));
    mock.expect_analyze().returning(|request| {
        Ok(AnalyzeResponse {
            text: format!("Answer to {}\nsecond line\nthird line", request.command),
            metadata: None,
        })
    });
    mock.expect_cache().returning(|_| {
        Ok(CacheResponse {
            status: "queued".to_string(),
        })
    });
    mock.expect_base_url()
        .returning(|| "http://localhost:8000".to_string());

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let _ = event_tx.send(Ok(Event::Paste(VIDEO_URL.to_string()))).await;
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                16..=18 => Event::Paste(random_text(&mut rng)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, Arc::new(mock), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn random_text<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..40);
    (0..len)
        .map(|_| match rng.gen_range(0..20) {
            0 => '\n',
            _ => rng.gen_range(b' '..=b'~') as char,
        })
        .collect()
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
