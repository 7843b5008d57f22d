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

//! Filesystem helpers: home-relative paths and permission tightening.

use std::io;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in a path to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        return PathBuf::from(expand_tilde_str(path_str));
    }
    path.to_path_buf()
}

/// String variant of [`expand_tilde`], for directive values.
pub fn expand_tilde_str(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = home_dir() {
            return path.replacen('~', &home, 1);
        }
    }
    path.to_string()
}

/// Home directory from the environment; `USERPROFILE` on Windows.
pub fn home_dir() -> Option<String> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
}

/// Default SSH client config location: `~/.ssh/config`.
pub fn default_config_path() -> PathBuf {
    match home_dir() {
        Some(home) => PathBuf::from(home).join(".ssh").join("config"),
        None => PathBuf::from(".ssh").join("config"),
    }
}

/// Restrict a file to owner read/write where the platform supports it.
#[cfg(unix)]
pub fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
pub fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
