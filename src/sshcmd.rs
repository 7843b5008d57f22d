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

//! Ready-to-paste command lines for a configured host
//!
//! Pure string formatting over a [`HostRecord`]; nothing is spawned.

use crate::sshconfig::HostRecord;

/// The full and short command sets rendered for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommands {
    /// `ssh` with identity file and port.
    pub ssh: String,
    /// `ssh` with `-L` forwards appended, when the host declares any.
    pub ssh_forward: Option<String>,
    /// `rsync` of the current directory over the full ssh transport.
    pub rsync: String,
    /// Recursive `scp` of the current directory.
    pub scp: String,
    /// Minimal `ssh -p` form, no identity file.
    pub ssh_short: String,
    pub rsync_short: String,
    pub scp_short: String,
}

/// Render the command set for a host record.
pub fn render_commands(record: &HostRecord) -> HostCommands {
    let port = record.port_or_default();
    let target = target_for(record);

    let mut ssh_parts: Vec<String> = vec!["ssh".to_string()];
    if let Some(key) = &record.identity_file {
        ssh_parts.push("-i".to_string());
        ssh_parts.push(key.clone());
    }
    ssh_parts.push("-p".to_string());
    ssh_parts.push(port.to_string());

    let ssh_prefix = ssh_parts.join(" ");
    let ssh = format!("{ssh_prefix} {target}");

    let forward_args: Vec<String> = record
        .local_forwards
        .iter()
        .filter_map(|fwd| {
            let fwd = fwd.trim();
            if fwd.is_empty() {
                return None;
            }
            let mut parts = fwd.splitn(2, char::is_whitespace);
            let local = parts.next()?;
            Some(match parts.next() {
                Some(remote) => format!("-L {}:{}", local, remote.trim()),
                None => format!("-L {local}"),
            })
        })
        .collect();

    let ssh_forward = (!forward_args.is_empty())
        .then(|| format!("{ssh_prefix} {} {target}", forward_args.join(" ")));

    let rsync = format!("rsync -rvu --progress ./* -e \"{ssh_prefix}\" {target}:~/");

    let mut scp_parts: Vec<String> = vec!["scp".to_string(), "-r".to_string()];
    if let Some(key) = &record.identity_file {
        scp_parts.push("-i".to_string());
        scp_parts.push(key.clone());
    }
    scp_parts.push("-P".to_string());
    scp_parts.push(port.to_string());
    let scp = format!("{} ./* {target}:~/", scp_parts.join(" "));

    let ssh_short = format!("ssh -p {port} {target}");
    let rsync_short = format!("rsync -rvu --progress ./* -e \"ssh -p {port}\" {target}:~/");
    let scp_short = format!("scp -r -P {port} ./* {target}:~/");

    HostCommands {
        ssh,
        ssh_forward,
        rsync,
        scp,
        ssh_short,
        rsync_short,
        scp_short,
    }
}

/// `user@hostname` when both are present, falling back to the hostname or
/// the short name.
fn target_for(record: &HostRecord) -> String {
    match (&record.user, &record.hostname) {
        (Some(user), Some(host)) => format!("{user}@{host}"),
        (None, Some(host)) => host.clone(),
        (Some(user), None) => format!("{user}@{}", record.short_name),
        (None, None) => record.short_name.clone(),
    }
}
