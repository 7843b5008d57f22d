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

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::sshconfig::{ConfigStore, Entry, HostDraft, HostUpdate};

/// Parameters for `sssh add`, straight off the CLI.
pub struct AddParams<'a> {
    pub name: &'a str,
    pub hostname: &'a str,
    pub user: &'a str,
    pub port: &'a str,
    pub identity: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub group: Option<&'a str>,
    pub forward: Option<(&'a str, &'a str)>,
}

/// Validate the fields into a draft and append the stanza.
pub fn add(store: &ConfigStore, params: &AddParams) -> Result<()> {
    let mut draft = HostDraft::new(params.name, params.hostname, params.user, params.port)?;
    if let Some(identity) = params.identity {
        draft = draft.with_identity_file(identity);
    }
    if let Some(notes) = params.notes {
        draft = draft.with_notes(notes);
    }
    if let Some(group) = params.group {
        draft = draft.with_group(group);
    }
    if let Some((local, remote)) = params.forward {
        draft = draft.with_forward(local, remote)?;
    }

    store.add_host(&draft)?;
    println!("{} host '{}' added", "●".green(), draft.short_name().bold());
    Ok(())
}

/// Rewrite a host's connection fields, preserving its short name.
pub fn edit(
    store: &ConfigStore,
    name: &str,
    hostname: &str,
    user: &str,
    port: &str,
) -> Result<()> {
    let update = HostUpdate::new(hostname, user, port)?;
    let entry = select_host(store, name)?;
    store.edit_host(&entry, &update)?;
    println!("{} host '{}' updated", "●".green(), entry.short_name().bold());
    Ok(())
}

/// Remove a host stanza.
pub fn delete(store: &ConfigStore, name: &str) -> Result<()> {
    let entry = select_host(store, name)?;
    store.delete_host(&entry)?;
    println!("{} host '{}' deleted", "●".green(), entry.short_name().bold());
    Ok(())
}

fn select_host(store: &ConfigStore, name: &str) -> Result<Entry> {
    let doc = store.load()?;
    match doc.entry_by_name(name.trim()) {
        Some(entry) => Ok(entry.clone()),
        None => bail!("host '{}' not found in SSH config", name.trim()),
    }
}
