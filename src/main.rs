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
use clap::Parser;

use sssh::{
    backup::BackupStore,
    cli::{Cli, Commands},
    commands::{backup, find, host, list, show},
    sshconfig::ConfigStore,
    utils::{default_config_path, expand_tilde, init_logging},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => expand_tilde(path),
        None => default_config_path(),
    };
    let store = ConfigStore::new(config_path);

    match &cli.command {
        Commands::List { group } => list::run(&store, group.as_deref())?,
        Commands::Find { kind, query } => find::run(&store, *kind, query)?,
        Commands::Add {
            name,
            hostname,
            user,
            port,
            identity,
            notes,
            group,
            forward,
        } => {
            let forward = forward
                .as_ref()
                .map(|pair| (pair[0].as_str(), pair[1].as_str()));
            host::add(
                &store,
                &host::AddParams {
                    name,
                    hostname,
                    user,
                    port,
                    identity: identity.as_deref(),
                    notes: notes.as_deref(),
                    group: group.as_deref(),
                    forward,
                },
            )?;
        }
        Commands::Edit {
            name,
            hostname,
            user,
            port,
        } => host::edit(&store, name, hostname, user, port)?,
        Commands::Delete { name } => host::delete(&store, name)?,
        Commands::Sort => {
            store.sort()?;
            println!("SSH config sorted");
        }
        Commands::Show { name } => show::run(&store, name)?,
        Commands::Backup(action) => {
            let backups = BackupStore::new(BackupStore::default_dir());
            backup::run(&store, &backups, action)?;
        }
    }

    Ok(())
}
