//! Auth service - dummy login/signup with simulated network latency
//!
//! No credential store exists: any non-empty email with a long-enough
//! password signs in, and signup accepts anything carrying a name and an
//! email. The async calls sleep for the configured latency to stand in for
//! a backend round trip.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{AuthSession, User, UserPatch};
use crate::ports::{load_state, save_state, StateStore, AUTH_BLOB};

/// Counter for generating unique user ids within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh user id from timestamp + counter.
///
/// Lower 16 bits hold a per-millisecond counter, so consecutive signups in
/// the same millisecond still get distinct ids.
fn generate_user_id() -> i64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((timestamp << 16) | counter) as i64
}

/// Randomized placeholder avatar for new signups
fn placeholder_avatar() -> String {
    let photo_id = 1_000_000 + rand::thread_rng().gen_range(0..1_000_000);
    format!(
        "https://images.pexels.com/photos/{}/pexels-photo.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        photo_id
    )
}

/// The demo profile every login resolves to, named after the email
fn demo_user(email: &str) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    User {
        id: 1,
        name,
        email: email.to_string(),
        role: "Full-Stack Developer".to_string(),
        avatar: Some(
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
                .to_string(),
        ),
        skills: vec![
            "React".to_string(),
            "TypeScript".to_string(),
            "Node.js".to_string(),
        ],
        experience: Some("3 years".to_string()),
        location: Some("Berlin, Germany".to_string()),
        availability: Some("Available now".to_string()),
        salary_expectation: Some("60,000 - 75,000 EUR".to_string()),
        preferred_work_mode: Some("Hybrid".to_string()),
        bio: Some("Passionate developer looking for the next challenge.".to_string()),
    }
}

/// Auth service owning the single session, persisted to the `auth` blob
pub struct AuthService {
    session: AuthSession,
    store: Arc<dyn StateStore>,
    min_password_length: usize,
    latency: Duration,
}

impl AuthService {
    /// Create the service, seeding the session from persisted state.
    /// An absent or unreadable blob yields the logged-out default.
    pub fn new(store: Arc<dyn StateStore>, config: &Config) -> Self {
        let session = load_state::<AuthSession>(store.as_ref(), AUTH_BLOB)
            .map(AuthSession::normalized)
            .unwrap_or_default();
        Self {
            session,
            store,
            min_password_length: config.min_password_length,
            latency: config.auth_latency(),
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Attempt a login. Succeeds iff the email is non-empty and the password
    /// meets the minimum length; there is no credential check beyond that.
    /// Failure carries no detail, matching the single generic message the
    /// UI shows.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        tokio::time::sleep(self.latency).await;

        if email.is_empty() || password.len() < self.min_password_length {
            return Ok(false);
        }

        self.session = AuthSession::authenticated(demo_user(email));
        self.persist()?;
        Ok(true)
    }

    /// Register a new user. Succeeds iff the payload carries a name and an
    /// email; everything else gets a default.
    pub async fn signup(&mut self, payload: UserPatch) -> Result<bool> {
        tokio::time::sleep(self.latency).await;

        let (name, email) = match (&payload.name, &payload.email) {
            (Some(n), Some(e)) if !n.is_empty() && !e.is_empty() => (n.clone(), e.clone()),
            _ => return Ok(false),
        };

        let user = User {
            id: generate_user_id(),
            name,
            email,
            role: payload.role.unwrap_or_else(|| "Developer".to_string()),
            avatar: Some(placeholder_avatar()),
            skills: payload.skills.unwrap_or_default(),
            experience: Some(payload.experience.unwrap_or_else(|| "0 years".to_string())),
            location: Some(payload.location.unwrap_or_default()),
            availability: Some(
                payload
                    .availability
                    .unwrap_or_else(|| "Flexible".to_string()),
            ),
            salary_expectation: Some(payload.salary_expectation.unwrap_or_default()),
            preferred_work_mode: Some(
                payload
                    .preferred_work_mode
                    .unwrap_or_else(|| "Hybrid".to_string()),
            ),
            bio: Some(payload.bio.unwrap_or_default()),
        };

        self.session = AuthSession::authenticated(user);
        self.persist()?;
        Ok(true)
    }

    /// Clear the session back to the logged-out default
    pub fn logout(&mut self) -> Result<()> {
        self.session = AuthSession::anonymous();
        self.persist()
    }

    /// Shallow-merge profile fields into the current user. A no-op when
    /// nobody is logged in; no validation is performed.
    pub fn update_profile(&mut self, patch: UserPatch) -> Result<()> {
        let Some(user) = self.session.user_mut() else {
            return Ok(());
        };
        user.apply(patch);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        save_state(self.store.as_ref(), AUTH_BLOB, &self.session)
    }
}
