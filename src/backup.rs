// Copyright 2025 sssh contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Named whole-file backups of the SSH config
//!
//! Backups are plain copies under a per-user data directory, addressed by
//! the name the user gave them. No rotation, no timestamps.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::sshconfig::{ConfigError, ConfigStore};

/// Handle on the backup directory.
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default backup directory under the user's data dir.
    pub fn default_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "sssh") {
            return proj_dirs.data_dir().join("backups");
        }
        PathBuf::from(".sssh").join("backups")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Backup file names, sorted lexicographically. Missing directory means
    /// no backups.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.join(name.trim()).is_file()
    }

    /// Copy the current config into a new named backup.
    pub fn create(&self, config: &ConfigStore, name: &str) -> Result<(), ConfigError> {
        let name = valid_name(name)?;
        if self.exists(&name) {
            return Err(ConfigError::DuplicateBackupName { name });
        }

        let doc = config.load()?;
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(&name), doc.render())?;
        tracing::info!("backup created: {name}");
        Ok(())
    }

    /// Overwrite the config file with a named backup's contents.
    pub fn restore(&self, config: &ConfigStore, name: &str) -> Result<(), ConfigError> {
        let name = valid_name(name)?;
        if !self.exists(&name) {
            return Err(ConfigError::BackupNotFound { name });
        }

        let text = fs::read_to_string(self.dir.join(&name))?;
        config.write(&text)?;
        tracing::info!("backup restored: {name}");
        Ok(())
    }

    /// Delete a named backup.
    pub fn delete(&self, name: &str) -> Result<(), ConfigError> {
        let name = valid_name(name)?;
        if !self.exists(&name) {
            return Err(ConfigError::BackupNotFound { name });
        }

        fs::remove_file(self.dir.join(&name))?;
        tracing::info!("backup deleted: {name}");
        Ok(())
    }
}

fn valid_name(name: &str) -> Result<String, ConfigError> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ConfigError::BackupNotFound {
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}
