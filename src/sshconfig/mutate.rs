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

//! Mutations over the config document
//!
//! Add appends a synthesized stanza; edit and delete splice the line span
//! of the first stanza whose raw lines equal the selected one, leaving all
//! other formatting untouched. Each function is pure: it takes a parsed
//! document and returns the new full text for the caller to persist.

use super::document::{ConfigDocument, Entry};
use super::error::ConfigError;
use super::validate::{validate_ip, validate_port, validate_short_name};

const INDENT: &str = "        ";

/// A `LocalForward` spec for a new host: local port forwarded to
/// `localhost:<remote>` on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortForward {
    pub local: u16,
    pub remote: u16,
}

/// Validated, immutable description of a host to add.
///
/// Built once via [`HostDraft::new`] plus `with_*` setters and handed to
/// the store; there is no partially-filled ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDraft {
    short_name: String,
    hostname: String,
    user: String,
    port: u16,
    identity_file: Option<String>,
    notes: Option<String>,
    group: Option<String>,
    forward: Option<PortForward>,
}

impl HostDraft {
    /// Create a draft from the four mandatory fields, validating the short
    /// name, address, and port.
    pub fn new(short_name: &str, hostname: &str, user: &str, port: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            short_name: validate_short_name(short_name)?,
            hostname: validate_ip(hostname)?,
            user: user.trim().to_string(),
            port: validate_port(port)?,
            identity_file: None,
            notes: None,
            group: None,
            forward: None,
        })
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Associate a private key path, written as `IdentityFile`.
    pub fn with_identity_file(mut self, path: &str) -> Self {
        let path = path.trim();
        self.identity_file = (!path.is_empty()).then(|| path.to_string());
        self
    }

    /// Attach a `# Notes:` comment.
    pub fn with_notes(mut self, notes: &str) -> Self {
        let notes = notes.trim();
        self.notes = (!notes.is_empty()).then(|| notes.to_string());
        self
    }

    /// Assign a group; the stanza gets a `# G:` marker line.
    pub fn with_group(mut self, group: &str) -> Self {
        let group = group.trim();
        self.group = (!group.is_empty()).then(|| group.to_string());
        self
    }

    /// Add a `LocalForward` line, both ports validated.
    pub fn with_forward(mut self, local: &str, remote: &str) -> Result<Self, ConfigError> {
        self.forward = Some(PortForward {
            local: validate_port(local)?,
            remote: validate_port(remote)?,
        });
        Ok(self)
    }

    /// Render the stanza (marker line included when grouped).
    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(group) = &self.group {
            lines.push(format!("# G: {group}"));
        }
        lines.push(format!("Host {}", self.short_name));
        lines.push(format!("{INDENT}HostName {}", self.hostname));
        lines.push(format!("{INDENT}User {}", self.user));
        lines.push(format!("{INDENT}Port {}", self.port));
        if let Some(key) = &self.identity_file {
            lines.push(format!("{INDENT}IdentityFile {key}"));
        }
        if let Some(notes) = &self.notes {
            lines.push(format!("{INDENT}# Notes: {notes}"));
        }
        if let Some(forward) = &self.forward {
            lines.push(format!(
                "{INDENT}LocalForward {} localhost:{}",
                forward.local, forward.remote
            ));
        }
        lines
    }
}

/// Replacement connection fields for an existing host. The short name is
/// taken from the selected stanza and cannot change here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUpdate {
    hostname: String,
    user: String,
    port: u16,
}

impl HostUpdate {
    pub fn new(hostname: &str, user: &str, port: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            hostname: validate_ip(hostname)?,
            user: user.trim().to_string(),
            port: validate_port(port)?,
        })
    }
}

/// Append a new stanza to the document.
///
/// Refuses a short name that already appears as any alias of any stanza.
pub fn add_host(doc: &ConfigDocument, draft: &HostDraft) -> Result<String, ConfigError> {
    if doc.contains_alias(&draft.short_name) {
        return Err(ConfigError::DuplicateShortName {
            name: draft.short_name.clone(),
        });
    }

    let mut text = doc.render();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    for line in draft.render() {
        text.push_str(&line);
        text.push('\n');
    }

    tracing::debug!("appended host '{}'", draft.short_name);
    Ok(text)
}

/// Replace the selected stanza with a freshly synthesized block carrying
/// the updated connection fields.
///
/// When the document contains byte-identical duplicate blocks, the first
/// one is replaced regardless of which duplicate was selected. This is the
/// documented limitation of text-identity mutation, kept intentionally.
pub fn edit_host(
    doc: &ConfigDocument,
    entry: &Entry,
    update: &HostUpdate,
) -> Result<String, ConfigError> {
    let target = match doc.first_matching(entry) {
        Some(t) => t,
        None => return Ok(doc.render()),
    };

    let replacement = vec![
        format!("Host {}", target.short_name()),
        format!("{INDENT}HostName {}", update.hostname),
        format!("{INDENT}User {}", update.user),
        format!("{INDENT}Port {}", update.port),
    ];

    tracing::debug!("rewrote host '{}'", target.short_name());
    Ok(doc.splice(&target.span, &replacement))
}

/// Remove the selected stanza. Same first-occurrence rule as [`edit_host`].
pub fn delete_host(doc: &ConfigDocument, entry: &Entry) -> Result<String, ConfigError> {
    let target = match doc.first_matching(entry) {
        Some(t) => t,
        None => return Ok(doc.render()),
    };

    tracing::debug!("deleted host '{}'", target.short_name());
    Ok(doc.splice(&target.span, &[]))
}
