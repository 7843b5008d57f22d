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

use crate::sshcmd::render_commands;
use crate::sshconfig::{ConfigStore, HostRecord};

/// Print the ssh/rsync/scp command lines for one host.
pub fn run(store: &ConfigStore, name: &str) -> Result<()> {
    let doc = store.load()?;
    let entry = match doc.entry_by_name(name.trim()) {
        Some(entry) => entry,
        None => bail!("host '{}' not found in SSH config", name.trim()),
    };

    let record = HostRecord::from_entry(entry);
    let commands = render_commands(&record);

    println!("{} {}\n", "▶".cyan(), "Full command for host:".bold());
    println!("{}", commands.ssh);
    if let Some(forward) = &commands.ssh_forward {
        println!("{forward}");
    }
    println!("{}", commands.rsync);
    println!("{}", commands.scp);

    println!("\n{} {}\n", "▶".cyan(), "Short command for host:".bold());
    println!("{}", commands.ssh_short);
    println!("{}", commands.rsync_short);
    println!("{}", commands.scp_short);

    Ok(())
}
