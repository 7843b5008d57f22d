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

//! Typed host record derived on demand from a stanza's raw lines

#[cfg(not(windows))]
use crate::utils::fs::expand_tilde_str;

use super::document::Entry;

/// The closed set of directive keys the engine recognizes.
///
/// Matching is case-insensitive. Everything else is preserved verbatim in
/// the stanza but contributes no field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKey {
    HostName,
    User,
    Port,
    IdentityFile,
    LocalForward,
}

impl DirectiveKey {
    /// Case-insensitive lookup of a directive key.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "hostname" => Some(Self::HostName),
            "user" => Some(Self::User),
            "port" => Some(Self::Port),
            "identityfile" => Some(Self::IdentityFile),
            "localforward" => Some(Self::LocalForward),
            _ => None,
        }
    }
}

/// Fields of one stanza, derived from its raw lines.
///
/// Single-valued directives take the first occurrence; `LocalForward`
/// collects all occurrences in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    pub short_name: String,
    pub hostname: Option<String>,
    pub user: Option<String>,
    pub port: Option<String>,
    pub identity_file: Option<String>,
    pub local_forwards: Vec<String>,
    pub notes: Option<String>,
    pub group: String,
}

impl HostRecord {
    /// Derive the record from a stanza. The `Host` line itself is excluded
    /// from directive scanning.
    pub fn from_entry(entry: &Entry) -> Self {
        let mut record = Self {
            short_name: entry.short_name().to_string(),
            group: entry.group.clone(),
            ..Self::default()
        };

        for line in entry.raw_lines.iter().skip(1) {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(comment) = trimmed.strip_prefix('#') {
                if record.notes.is_none() {
                    record.notes = parse_notes(comment);
                }
                continue;
            }

            let mut parts = trimmed.splitn(2, char::is_whitespace);
            let key = match parts.next() {
                Some(k) => k,
                None => continue,
            };
            let value = match parts.next() {
                Some(v) => v.trim(),
                // Directive without a value: skipped, not an error
                None => continue,
            };
            if value.is_empty() {
                continue;
            }

            match DirectiveKey::parse(key) {
                Some(DirectiveKey::HostName) if record.hostname.is_none() => {
                    record.hostname = Some(value.to_string());
                }
                Some(DirectiveKey::User) if record.user.is_none() => {
                    record.user = Some(value.to_string());
                }
                Some(DirectiveKey::Port) if record.port.is_none() => {
                    record.port = Some(value.to_string());
                }
                Some(DirectiveKey::IdentityFile) if record.identity_file.is_none() => {
                    record.identity_file = Some(expand_identity_path(value));
                }
                Some(DirectiveKey::LocalForward) => {
                    record.local_forwards.push(value.to_string());
                }
                Some(_) => {
                    // Repeated single-valued directive: first occurrence wins
                }
                None => {
                    tracing::debug!("unrecognized directive '{}' kept verbatim", key);
                }
            }
        }

        record
    }

    /// Remote address, `"-"` when absent.
    pub fn hostname_or_dash(&self) -> &str {
        self.hostname.as_deref().unwrap_or("-")
    }

    /// Port, `"22"` when absent.
    pub fn port_or_default(&self) -> &str {
        self.port.as_deref().unwrap_or("22")
    }

    /// Notes, `"-"` when absent.
    pub fn notes_or_dash(&self) -> &str {
        self.notes.as_deref().unwrap_or("-")
    }
}

/// Extract a notes value from a comment body: `Notes: <text>` or
/// `notes <text>`, case-insensitive.
fn parse_notes(comment: &str) -> Option<String> {
    let body = comment.trim();
    let lower = body.to_ascii_lowercase();

    if lower.starts_with("notes:") {
        let text = body.splitn(2, ':').nth(1)?.trim();
        return Some(text.to_string());
    }
    if lower.starts_with("notes ") {
        let text = body.splitn(2, char::is_whitespace).nth(1)?.trim();
        return Some(text.to_string());
    }
    None
}

/// Tilde-expand an IdentityFile value on non-Windows platforms.
#[cfg(not(windows))]
fn expand_identity_path(value: &str) -> String {
    expand_tilde_str(value)
}

/// Windows keeps the path as written.
#[cfg(windows)]
fn expand_identity_path(value: &str) -> String {
    value.to_string()
}
