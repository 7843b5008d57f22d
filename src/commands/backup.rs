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

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::backup::BackupStore;
use crate::cli::BackupAction;
use crate::sshconfig::ConfigStore;

/// Dispatch one backup subcommand.
pub fn run(store: &ConfigStore, backups: &BackupStore, action: &BackupAction) -> Result<()> {
    match action {
        BackupAction::Create { name } => {
            backups.create(store, name)?;
            println!("{} backup created: {}", "●".green(), name.bold());
        }
        BackupAction::Restore { name } => {
            backups.restore(store, name)?;
            println!("{} backup restored: {}", "●".green(), name.bold());
        }
        BackupAction::Delete { name } => {
            backups.delete(name)?;
            println!("{} backup deleted: {}", "●".green(), name.bold());
        }
        BackupAction::List => {
            let names = backups.list()?;
            if names.is_empty() {
                println!("{}", "No backups".dimmed());
            } else {
                println!("{} {}\n", "▶".cyan(), "Backups".bold());
                for name in names {
                    println!("  {} {}", "•".dimmed(), name);
                }
            }
        }
    }
    Ok(())
}
