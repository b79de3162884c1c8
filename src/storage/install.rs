//! First-use install date
//!
//! A single timestamp kept in its own file. It is read once at startup and
//! written only when absent, so it always records the first run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EduEasyError;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct InstallData {
    installed_at: Option<DateTime<Utc>>,
}

/// Read the install date, recording `now` as the install date on first use
pub fn load_or_record_install_date(path: &Path, now: DateTime<Utc>) -> Result<DateTime<Utc>, EduEasyError> {
    let data: InstallData = read_json(path)?;
    if let Some(installed_at) = data.installed_at {
        return Ok(installed_at);
    }

    debug!(path = %path.display(), "recording install date");
    write_json_atomic(
        path,
        &InstallData {
            installed_at: Some(now),
        },
    )?;
    Ok(now)
}

/// Handle on the install marker file
#[derive(Debug, Clone)]
pub struct InstallMarker {
    path: PathBuf,
}

impl InstallMarker {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn installed_at(&self) -> Result<DateTime<Utc>, EduEasyError> {
        load_or_record_install_date(&self.path, Utc::now())
    }
}
