//! Mock session lifecycle: login and register against a fixed user list,
//! with the session user persisted under a single key-value slot.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::MarketplaceConfig;
use crate::db::models::User;
use crate::db::repo::SessionStore;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(User),
}

pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    session_key: String,
    delay: Duration,
    users: Vec<User>,
    current: RwLock<Option<User>>,
    in_flight: AtomicUsize,
}

/// Marks a login/register as running until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AuthContext {
    pub fn new(
        store: Arc<dyn SessionStore>,
        users: Vec<User>,
        session_key: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            session_key: session_key.into(),
            delay,
            users,
            current: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Builds the context and rehydrates any session left in the store.
    pub async fn load(
        store: Arc<dyn SessionStore>,
        users: Vec<User>,
        config: &MarketplaceConfig,
    ) -> Result<Self> {
        let context = Self::new(
            store,
            users,
            config.storage.session_key.clone(),
            config.auth.delay(),
        );
        context.rehydrate().await?;
        Ok(context)
    }

    pub async fn rehydrate(&self) -> Result<()> {
        let Some(raw) = self.store.get(&self.session_key).await? else {
            return Ok(());
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                info!(user_id = %user.id, "restored persisted session");
                *self.current.write().await = Some(user);
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable session record");
                self.store.remove(&self.session_key).await?;
            }
        }

        Ok(())
    }

    pub async fn state(&self) -> SessionState {
        if self.is_loading() {
            return SessionState::Authenticating;
        }

        match self.current.read().await.clone() {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Succeeds iff `email` belongs to a known user. The password is not checked.
    pub async fn login(&self, email: &str, _password: &str) -> Result<bool> {
        let _running = InFlight::start(&self.in_flight);
        tokio::time::sleep(self.delay).await;

        let Some(user) = self.users.iter().find(|u| u.email == email).cloned() else {
            warn!(email, "login rejected: unknown email");
            return Ok(false);
        };

        self.persist(&user).await?;
        info!(user_id = %user.id, "logged in");
        *self.current.write().await = Some(user);
        Ok(true)
    }

    /// Fails iff `email` belongs to a known user. The new account only lives in
    /// the session; it is never added to the user list.
    pub async fn register(&self, name: &str, email: &str, _password: &str) -> Result<bool> {
        let _running = InFlight::start(&self.in_flight);
        tokio::time::sleep(self.delay).await;

        if self.users.iter().any(|u| u.email == email) {
            warn!(email, "registration rejected: email already in use");
            return Ok(false);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            bio: None,
            location: None,
            skills: Vec::new(),
            is_verified: false,
            joined_date: Utc::now().date_naive(),
        };

        self.persist(&user).await?;
        info!(user_id = %user.id, "registered");
        *self.current.write().await = Some(user);
        Ok(true)
    }

    /// The in-memory session is only cleared once the stored record is gone.
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(&self.session_key).await?;

        if let Some(user) = self.current.write().await.take() {
            info!(user_id = %user.id, "logged out");
        }
        Ok(())
    }

    async fn persist(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.session_key, &raw).await
    }
}
