//! # Mock Authentication
//!
//! The dashboard is gated by a fixed allow-list of accounts. There is no
//! password check beyond "not empty": this guards against accidental edits,
//! not against an attacker with access to the data directory.
//!
//! A successful login is persisted under the `user` key so the session
//! survives restarts, and is restored when the service is created.
//! Logins are answered after an artificial delay (1s by default).

use crate::error::{Result, VitrineError};
use crate::store::backend::StorageBackend;
use crate::store::PersistStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const SESSION_KEY: &str = "user";
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas. Tente novamente.";
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Editor,
    Author,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Author => "author",
        };
        f.write_str(name)
    }
}

const ACCOUNTS: [(&str, Role); 4] = [
    ("superadmin@example.com", Role::Superadmin),
    ("admin@example.com", Role::Admin),
    ("editor@example.com", Role::Editor),
    ("author@example.com", Role::Author),
];

/// Role of an allow-listed account. Matching ignores case.
pub fn lookup_role(email: &str) -> Option<Role> {
    let email = email.to_lowercase();
    ACCOUNTS
        .iter()
        .find(|(known, _)| *known == email)
        .map(|(_, role)| *role)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The identifier exactly as typed at login.
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

pub struct AuthService<B: StorageBackend> {
    backend: B,
    session: Option<Session>,
    delay: Duration,
    status: PersistStatus,
}

impl<B: StorageBackend> AuthService<B> {
    /// Create the service and restore a persisted session, if any.
    /// A corrupt session is logged and removed.
    pub fn restore(backend: B, delay: Duration) -> Self {
        let session = match backend.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    crate::store::discard_corrupt(&backend, SESSION_KEY, &e.to_string());
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(error = %e, "failed to read session");
                None
            }
        };

        Self {
            backend,
            session,
            delay,
            status: PersistStatus::Clean,
        }
    }

    /// Outcome of the last attempt to persist or clear the session.
    pub fn persist_status(&self) -> &PersistStatus {
        &self.status
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current session, or `LoginRequired` naming what was attempted.
    pub fn require(&self, action: &str) -> Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| VitrineError::LoginRequired(action.to_string()))
    }

    /// Check the credentials after the artificial delay.
    ///
    /// Rejection leaves any existing session in place.
    pub fn login(&mut self, email: &str, secret: &str) -> Result<&Session> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let role = match lookup_role(email.trim()) {
            Some(role) if !secret.is_empty() => role,
            _ => {
                tracing::info!(email, "login rejected");
                return Err(VitrineError::AuthenticationRejected(
                    INVALID_CREDENTIALS.to_string(),
                ));
            }
        };

        let session = Session {
            email: email.to_string(),
            role,
            logged_in_at: Some(Utc::now()),
        };
        let blob = serde_json::to_string(&session).map_err(VitrineError::from);
        self.status = crate::store::write_snapshot(&self.backend, SESSION_KEY, blob);
        tracing::info!(email, %role, "logged in");

        Ok(self.session.insert(session))
    }

    /// End the session. Returns the session that was active, if any.
    pub fn logout(&mut self) -> Option<Session> {
        self.status = match self.backend.remove(SESSION_KEY) {
            Ok(()) => PersistStatus::Synced,
            Err(e) => {
                tracing::error!(error = %e, "failed to remove persisted session");
                PersistStatus::Failed(e.to_string())
            }
        };
        self.session.take()
    }
}
