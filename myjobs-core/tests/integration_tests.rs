//! Integration tests for myjobs-core services
//!
//! These tests run the services against the real file-backed state store in
//! a temp directory, exercising the persistence boundary end to end.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use tempfile::TempDir;

use myjobs_core::adapters::{JsonFileStore, StaticCatalog};
use myjobs_core::config::Config;
use myjobs_core::domain::Theme;
use myjobs_core::ports::{Catalog, StateStore};
use myjobs_core::services::{
    AuthService, DeckOutcome, DeckService, MatchingService, SwipeDirection, ThemeService,
};
use myjobs_core::{MyJobsContext, UserPatch};

// ============================================================================
// Test Helpers
// ============================================================================

/// Config with all simulated latencies zeroed so tests don't sleep
fn fast_config() -> Config {
    let mut config = Config::default();
    config.auth_latency_ms = 0;
    config.recommendation_latency_ms = 0;
    config.swipe_transition_ms = 0;
    config
}

fn file_store(dir: &TempDir) -> Arc<dyn StateStore> {
    Arc::new(JsonFileStore::new(dir.path()).expect("failed to create store"))
}

fn test_context(dir: &TempDir) -> MyJobsContext {
    MyJobsContext::with_parts(fast_config(), file_store(dir), Arc::new(StaticCatalog::new()))
}

// ============================================================================
// Auth Flow
// ============================================================================

#[tokio::test]
async fn test_login_writes_auth_blob_and_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut auth = AuthService::new(file_store(&dir), &fast_config());
        assert!(auth.login("a@b.co", "abcdef").await.unwrap());
    }

    // The blob exists on disk with the web client's field layout
    let content = std::fs::read_to_string(dir.path().join("auth.json")).unwrap();
    let blob: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(blob["isAuthenticated"], serde_json::json!(true));
    assert_eq!(blob["user"]["name"], serde_json::json!("a"));

    // A fresh service over the same directory restores the session
    let restored = AuthService::new(file_store(&dir), &fast_config());
    assert!(restored.is_authenticated());
    assert_eq!(restored.user().unwrap().email, "a@b.co");
}

#[tokio::test]
async fn test_failed_login_leaves_no_session() {
    let dir = TempDir::new().unwrap();
    let mut auth = AuthService::new(file_store(&dir), &fast_config());

    assert!(!auth.login("a@b.co", "abc").await.unwrap());
    assert!(!auth.is_authenticated());

    let restored = AuthService::new(file_store(&dir), &fast_config());
    assert!(!restored.is_authenticated());
}

#[tokio::test]
async fn test_corrupt_auth_blob_falls_back_to_logged_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("auth.json"), "{broken").unwrap();

    let auth = AuthService::new(file_store(&dir), &fast_config());
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_profile_edit_round_trip() {
    let dir = TempDir::new().unwrap();

    let mut auth = AuthService::new(file_store(&dir), &fast_config());
    assert!(auth.login("sarah@example.com", "secret1").await.unwrap());
    auth.update_profile(UserPatch {
        location: Some("Hamburg, Germany".to_string()),
        skills: Some(vec!["Rust".to_string(), "React".to_string()]),
        ..Default::default()
    })
    .unwrap();

    let restored = AuthService::new(file_store(&dir), &fast_config());
    let user = restored.user().unwrap();
    assert_eq!(user.location.as_deref(), Some("Hamburg, Germany"));
    assert_eq!(user.skills, vec!["Rust".to_string(), "React".to_string()]);
    // Fields the patch did not mention keep their login defaults
    assert_eq!(user.role, "Full-Stack Developer");
}

// ============================================================================
// Swipe Flow
// ============================================================================

#[test]
fn test_swipe_through_entire_deck_and_reset() {
    let dir = TempDir::new().unwrap();
    let config = fast_config();
    let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::new());
    let deck = DeckService::new(Arc::clone(&catalog), &config);
    let mut matching = MatchingService::new(file_store(&dir));

    // Like 1 and 2, pass on the rest
    for expected_id in 1..=5 {
        let direction = if expected_id <= 2 {
            SwipeDirection::Like
        } else {
            SwipeDirection::Pass
        };
        match deck.decide(&mut matching, direction).unwrap() {
            DeckOutcome::Decided { company, .. } => assert_eq!(company.id, expected_id),
            DeckOutcome::Exhausted => panic!("deck exhausted early"),
        }
    }

    assert!(matches!(
        deck.decide(&mut matching, SwipeDirection::Like).unwrap(),
        DeckOutcome::Exhausted
    ));

    // Decisions are on disk; a restart sees the exhausted deck
    let restored = MatchingService::new(file_store(&dir));
    assert_eq!(restored.decisions().liked_companies, vec![1, 2]);
    assert_eq!(restored.decisions().disliked_companies, vec![3, 4, 5]);
    assert!(deck.current(restored.decisions()).is_none());

    // Reset refills everything
    let mut restored = restored;
    restored.reset().unwrap();
    assert_eq!(deck.available(restored.decisions()).len(), 5);
}

#[test]
fn test_liked_and_disliked_stay_disjoint_across_restarts() {
    let dir = TempDir::new().unwrap();

    let mut matching = MatchingService::new(file_store(&dir));
    matching.like_company(2).unwrap();
    matching.dislike_company(2).unwrap();

    let restored = MatchingService::new(file_store(&dir));
    let d = restored.decisions();
    for id in &d.liked_companies {
        assert!(!d.disliked_companies.contains(id));
    }
    assert_eq!(d.disliked_companies, vec![2]);
    assert!(d.matches.is_empty());
}

// ============================================================================
// Theme Flow
// ============================================================================

#[test]
fn test_theme_toggle_persists_and_restores() {
    let dir = TempDir::new().unwrap();

    let mut theme = ThemeService::new(file_store(&dir));
    assert_eq!(theme.toggle().unwrap(), Theme::Dark);

    let restored = ThemeService::new(file_store(&dir));
    assert_eq!(restored.current(), Theme::Dark);
    assert_eq!(restored.current().dom_class(), Some("dark"));

    let mut restored = restored;
    assert_eq!(restored.toggle().unwrap(), Theme::Light);
    assert_eq!(restored.current().dom_class(), None);
}

// ============================================================================
// Context / Stores Independence
// ============================================================================

#[tokio::test]
async fn test_stores_persist_independently() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = test_context(&dir);
        assert!(ctx.auth_service.login("a@b.co", "abcdef").await.unwrap());
        ctx.theme_service.set(Theme::Dark).unwrap();
        ctx.matching_service.like_company(1).unwrap();
    }

    // Three separate blobs, one per store
    for blob in ["auth.json", "theme.json", "matching.json"] {
        assert!(dir.path().join(blob).exists(), "{} missing", blob);
    }

    // Logging out must not disturb theme or matching state
    let mut ctx = test_context(&dir);
    ctx.auth_service.logout().unwrap();

    let ctx = test_context(&dir);
    assert!(!ctx.auth_service.is_authenticated());
    assert_eq!(ctx.theme_service.current(), Theme::Dark);
    assert_eq!(ctx.matching_service.decisions().liked_companies, vec![1]);
}

#[tokio::test]
async fn test_dashboard_status_reflects_session_and_decisions() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);

    assert!(ctx.auth_service.login("a@b.co", "abcdef").await.unwrap());
    ctx.matching_service.like_company(1).unwrap();
    ctx.matching_service.dislike_company(2).unwrap();

    let status = ctx.status();
    assert_eq!(status.user_name.as_deref(), Some("a"));
    assert_eq!(status.likes, 1);
    assert_eq!(status.passed, 1);
    assert_eq!(status.companies_remaining, 3);
}

// ============================================================================
// Recommendations
// ============================================================================

#[tokio::test]
async fn test_recommendations_through_context() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let recs = ctx.recommendation_service.recommendations().await.unwrap();
    assert_eq!(recs.len(), 3);
    assert!(recs.windows(2).all(|w| w[0].match_score >= w[1].match_score));
}
