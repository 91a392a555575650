//! End-to-end flow: a ticker-driven breathing session recorded into the
//! state document, then quit-progress stats derived from the same store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::mpsc;

use rewire_core::{
    AppState, BreathingPattern, BreathingSession, DerivedStats, Event, FileStore, KvStore,
    SessionCompletion, SessionTicker, UserProfile,
};

#[tokio::test]
async fn guided_session_is_recorded_and_stats_follow() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    // Seed a profile three days into a quit.
    let mut state = AppState::load(&store).unwrap();
    let mut profile = UserProfile::new("Ana");
    profile.quit_date = Some(Utc::now() - ChronoDuration::days(3));
    profile.baseline_cigs_per_day = 12;
    profile.complete_onboarding().unwrap();
    state.profile = Some(profile);
    state.save(&store).unwrap();

    // Run a short guided session (4-7-8, one full cycle).
    let pattern = BreathingPattern::relaxing_4_7_8();
    let mut session = BreathingSession::new(pattern, 19);
    session.start();
    let session = Arc::new(Mutex::new(session));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = SessionTicker::spawn(Arc::clone(&session), Duration::from_millis(2), tx);
    ticker.wait().await;

    let mut completion = None;
    while let Some(event) = rx.recv().await {
        if let Event::SessionCompleted {
            completed_cycles, ..
        } = event
        {
            completion = Some(completed_cycles);
        }
    }
    assert_eq!(completion, Some(1));

    // Record the completion the way the CLI does.
    let mut state = AppState::load(&store).unwrap();
    state
        .session_completions
        .push(SessionCompletion::new("4-7-8", 5, ""));
    state.save(&store).unwrap();

    // Stats derive from the stored profile.
    let state = AppState::load(&store).unwrap();
    let stats = DerivedStats::compute(state.profile.as_ref().unwrap(), Utc::now());
    assert_eq!(stats.days_since_quit, 3);
    assert_eq!(stats.cigarettes_not_smoked, 36);
    assert_eq!(state.session_completions.len(), 1);

    // The document on disk is one JSON blob under the fixed key.
    let raw = store.get(AppState::STATE_KEY).unwrap().unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(doc.get("profile").is_some());
    assert!(doc.get("session_completions").is_some());
}
