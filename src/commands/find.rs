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

use crate::sshconfig::{find, ConfigStore, FindKind};

/// Search stanzas by field substring and print the matches verbatim.
pub fn run(store: &ConfigStore, kind: FindKind, query: &str) -> Result<()> {
    let doc = store.load()?;
    let matches = find(&doc, kind, query);

    if matches.is_empty() {
        println!("{}", "Not found".dimmed());
        return Ok(());
    }

    println!(
        "{} {} {}\n",
        "▶".cyan(),
        "Found:".bold(),
        matches.len().to_string().yellow()
    );

    for (idx, entry) in matches.iter().enumerate() {
        println!("{}. {}", idx + 1, entry.raw_text().trim_end());
        println!();
    }

    Ok(())
}
