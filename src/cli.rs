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

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sshconfig::FindKind;

#[derive(Parser, Debug)]
#[command(
    name = "sssh",
    version,
    about = "Manage ~/.ssh/config as a grouped registry of short-named hosts",
    long_about = "sssh keeps your SSH client config editable as a registry of short-named hosts.\nHosts can be grouped with '# G: <name>' comment markers and annotated with\n'# Notes: <text>' comments; sssh lists, searches, edits, and sorts the file\nwhile preserving everything it does not explicitly manage.",
    after_help = "EXAMPLES:\n  List all hosts by group:      sssh list\n  List one group:               sssh list prod\n  Search by address substring:  sssh find ip 10.0.0\n  Add a host:                   sssh add web 10.0.0.5 deploy --port 2222 --group prod\n  Print commands for a host:    sssh show web\n  Sort the config by group:     sssh sort"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        help = "SSH config file path [default: ~/.ssh/config]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List hosts with address, port, and notes",
        long_about = "Lists every host as a table of short name, address, port, and notes.\nHosts are clustered by group; ungrouped hosts come first, named groups\nfollow alphabetically. Pass a group name to list only that group."
    )]
    List {
        #[arg(help = "Group name to list (omit for all groups)")]
        group: Option<String>,
    },

    #[command(
        about = "Search hosts by field substring",
        long_about = "Searches stanzas by a case-insensitive substring of one field kind:\n  ip        match against HostName directive lines\n  hostname  match against the Host line (aliases)\n  port      match against Port directive lines\n  user      match against User directive lines\nMatching stanzas are printed verbatim in document order."
    )]
    Find {
        #[arg(help = "Field kind: ip, hostname, port, or user")]
        kind: FindKind,

        #[arg(help = "Substring to search for")]
        query: String,
    },

    #[command(
        about = "Add a new host",
        long_about = "Appends a new host stanza. The short name must not collide with any\nexisting alias. The address must be a dotted-quad IPv4 and the port an\ninteger in 1-65535. A group, notes comment, identity file, and one\nLocalForward spec are optional."
    )]
    Add {
        #[arg(help = "Short name (no whitespace)")]
        name: String,

        #[arg(help = "Remote IPv4 address")]
        hostname: String,

        #[arg(help = "Remote username")]
        user: String,

        #[arg(short, long, default_value = "22", help = "SSH port")]
        port: String,

        #[arg(short, long, help = "Private key path, written as IdentityFile")]
        identity: Option<String>,

        #[arg(short, long, help = "Notes comment for listings")]
        notes: Option<String>,

        #[arg(short, long, help = "Group name, written as a '# G:' marker")]
        group: Option<String>,

        #[arg(
            long,
            value_names = ["LOCAL", "REMOTE"],
            num_args = 2,
            help = "LocalForward: local port forwarded to localhost:REMOTE"
        )]
        forward: Option<Vec<String>>,
    },

    #[command(
        about = "Edit a host's connection fields",
        long_about = "Rewrites the selected host stanza with new HostName, User, and Port.\nThe short name is preserved; identity files, notes, and forwards are\ndropped from the rewritten block (delete and re-add to keep them)."
    )]
    Edit {
        #[arg(help = "Short name (or any alias) of the host")]
        name: String,

        #[arg(help = "New remote IPv4 address")]
        hostname: String,

        #[arg(help = "New remote username")]
        user: String,

        #[arg(short, long, default_value = "22", help = "New SSH port")]
        port: String,
    },

    #[command(about = "Delete a host stanza")]
    Delete {
        #[arg(help = "Short name (or any alias) of the host")]
        name: String,
    },

    #[command(
        about = "Rewrite the config in canonical sorted order",
        long_about = "Clusters stanzas by group (alphabetical, ungrouped last), sorts each\ngroup by short name, and re-synthesizes '# G:' markers. Idempotent."
    )]
    Sort,

    #[command(about = "Print ssh/rsync/scp command lines for a host")]
    Show {
        #[arg(help = "Short name (or any alias) of the host")]
        name: String,
    },

    #[command(subcommand, about = "Backup, restore, or delete config snapshots")]
    Backup(BackupAction),
}

#[derive(Subcommand, Debug)]
pub enum BackupAction {
    #[command(about = "Copy the current config to a named backup")]
    Create {
        #[arg(help = "Backup name")]
        name: String,
    },

    #[command(about = "Overwrite the config with a named backup")]
    Restore {
        #[arg(help = "Backup name")]
        name: String,
    },

    #[command(about = "Delete a named backup")]
    Delete {
        #[arg(help = "Backup name")]
        name: String,
    },

    #[command(about = "List backup names")]
    List,
}
