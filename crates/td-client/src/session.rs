//! Locally persisted session: the authenticated user and the bearer token,
//! stored as JSON in the config directory and cleared on logout.

use crate::{ClientError, ClientResult};

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use td_core::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}

impl Session {
    pub fn new(user: User, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: access_token.into(),
        }
    }

    /// Load a persisted session.
    ///
    /// Returns:
    /// - `Ok(Some(...))` - loaded successfully
    /// - `Ok(None)` - file doesn't exist (not logged in) or is corrupted
    pub fn load(path: &Path) -> ClientResult<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ClientError::session_error(path.to_path_buf(), e))?;

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Loaded session for {}", session.user.id);
                Ok(Some(session))
            }
            Err(e) => {
                // A corrupted session just means logging in again.
                warn!("Session file corrupted at {path:?}: {e}");
                Ok(None)
            }
        }
    }

    /// Save the session using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    pub fn save(&self, path: &Path) -> ClientResult<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| ClientError::session_error(dir.to_path_buf(), e))?;
        }

        let temp_path = path.with_extension(format!("tmp.{}", std::process::id()));
        let json = serde_json::to_string_pretty(self)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| ClientError::session_error(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| ClientError::session_error(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| ClientError::session_error(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::session_error(path.to_path_buf(), e)
        })?;

        info!("Saved session for {}", self.user.id);
        Ok(())
    }

    /// Remove the persisted session, if any.
    pub fn clear(path: &Path) -> ClientResult<()> {
        if path.exists() {
            fs::remove_file(path).map_err(|e| ClientError::session_error(path.to_path_buf(), e))?;
            info!("Cleared session at {path:?}");
        }
        Ok(())
    }
}
