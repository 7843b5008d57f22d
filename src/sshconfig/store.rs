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

//! File-backed engine boundary
//!
//! Every operation re-reads the config file, works on a fresh
//! [`ConfigDocument`], and (for mutations) writes the whole file back,
//! restricting permissions to owner-only where the platform supports it.
//! There is no cross-call caching and no file locking; a crash during the
//! write step can leave a truncated file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::fs::restrict_permissions;

use super::document::{ConfigDocument, Entry};
use super::error::ConfigError;
use super::mutate::{self, HostDraft, HostUpdate};
use super::sort::sorted_document;

/// Handle on the config file; the unit of load/save.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the config file.
    pub fn load(&self) -> Result<ConfigDocument, ConfigError> {
        if !self.path.is_file() {
            return Err(ConfigError::ConfigNotFound {
                path: self.path.clone(),
            });
        }
        let text = fs::read_to_string(&self.path)?;
        tracing::debug!("loaded {} ({} bytes)", self.path.display(), text.len());
        Ok(ConfigDocument::parse(&text))
    }

    /// True if `short_name` appears as any alias of any stanza. A missing
    /// file means no host exists.
    pub fn exists(&self, short_name: &str) -> Result<bool, ConfigError> {
        match self.load() {
            Ok(doc) => Ok(doc.contains_alias(short_name.trim())),
            Err(ConfigError::ConfigNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Append a new host stanza, creating the file if it does not exist yet.
    pub fn add_host(&self, draft: &HostDraft) -> Result<(), ConfigError> {
        let doc = match self.load() {
            Ok(doc) => doc,
            Err(ConfigError::ConfigNotFound { .. }) => {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent)?;
                }
                ConfigDocument::default()
            }
            Err(e) => return Err(e),
        };

        let text = mutate::add_host(&doc, draft)?;
        self.write(&text)
    }

    /// Rewrite the selected stanza with updated connection fields.
    pub fn edit_host(&self, entry: &Entry, update: &HostUpdate) -> Result<(), ConfigError> {
        let doc = self.load()?;
        let text = mutate::edit_host(&doc, entry, update)?;
        self.write(&text)
    }

    /// Remove the selected stanza.
    pub fn delete_host(&self, entry: &Entry) -> Result<(), ConfigError> {
        let doc = self.load()?;
        let text = mutate::delete_host(&doc, entry)?;
        self.write(&text)
    }

    /// Rewrite the whole file in canonical grouped/sorted order.
    pub fn sort(&self) -> Result<(), ConfigError> {
        let doc = self.load()?;
        let text = sorted_document(&doc);
        self.write(&text)
    }

    /// Persist new file contents with owner-only permissions.
    pub fn write(&self, text: &str) -> Result<(), ConfigError> {
        fs::write(&self.path, text)?;
        restrict_permissions(&self.path)?;
        tracing::debug!("wrote {} ({} bytes)", self.path.display(), text.len());
        Ok(())
    }
}
