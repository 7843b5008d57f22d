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

//! Error types for the SSH config document engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, querying, or mutating the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist (recoverable: callers may create it)
    #[error("SSH config not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Short name is empty or contains whitespace
    #[error("invalid short name '{name}' (must be non-empty, without whitespace)")]
    InvalidShortName { name: String },

    /// Short name collides with an alias already present in the config
    #[error("short name '{name}' already exists in SSH config")]
    DuplicateShortName { name: String },

    /// Not a dotted-quad IPv4 address with octets 0-255
    #[error("invalid IP address '{value}' (expected dotted-quad IPv4)")]
    InvalidIp { value: String },

    /// Not an integer in 1-65535
    #[error("invalid port '{value}' (expected 1-65535)")]
    InvalidPort { value: String },

    /// No entry in the document carries this group
    #[error("group '{name}' not found")]
    GroupNotFound { name: String },

    /// The group marker exists but no entry resolved to it
    #[error("group '{name}' exists but has no hosts")]
    GroupEmpty { name: String },

    /// Named backup file is missing
    #[error("backup not found: {name}")]
    BackupNotFound { name: String },

    /// A backup with this name already exists
    #[error("backup '{name}' already exists")]
    DuplicateBackupName { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidShortName {
            name: "my host".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid short name 'my host' (must be non-empty, without whitespace)"
        );

        let err = ConfigError::InvalidPort {
            value: "70000".to_string(),
        };
        assert_eq!(err.to_string(), "invalid port '70000' (expected 1-65535)");

        let err = ConfigError::GroupEmpty {
            name: "prod".to_string(),
        };
        assert_eq!(err.to_string(), "group 'prod' exists but has no hosts");
    }
}
