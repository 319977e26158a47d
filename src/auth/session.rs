use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Platoon, Role};

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

/// Idle sessions are discarded after this long.
const SESSION_EXPIRY_MINUTES: i64 = 30;

/// The authenticated viewer: who they are, what role they hold, and the
/// platoon binding that scopes rater dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub platoon: Option<Platoon>,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn is_expired(&self) -> bool {
        let expiry = self.created_at + Duration::minutes(SESSION_EXPIRY_MINUTES);
        Utc::now() > expiry
    }

    /// Minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> i64 {
        let expiry = self.created_at + Duration::minutes(SESSION_EXPIRY_MINUTES);
        (expiry - Utc::now()).num_minutes().max(0)
    }
}

/// Holds the current session and persists it across restarts.
pub struct Session {
    cache_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            data: None,
        }
    }

    /// Load a previously saved session from disk. Expired sessions are
    /// ignored, forcing a fresh login.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;

            if !data.is_expired() {
                debug!(username = %data.username, role = %data.role, "Session restored");
                self.data = Some(data);
                return Ok(true);
            }
            debug!("Stored session has expired");
        }
        Ok(false)
    }

    /// Save the current session to disk
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
            debug!(username = %data.username, "Session saved");
        }
        Ok(())
    }

    /// Log out: drop the in-memory session and delete the session file.
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        debug!("Session cleared");
        Ok(())
    }

    /// Install a freshly authenticated session.
    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// Check if a session exists and has not expired
    pub fn is_valid(&self) -> bool {
        self.data.as_ref().map(|d| !d.is_expired()).unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.data.as_ref().map(|d| d.role)
    }

    pub fn platoon(&self) -> Option<Platoon> {
        self.data.as_ref().and_then(|d| d.platoon)
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}
