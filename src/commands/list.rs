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

use crate::sshconfig::{list_group, list_grouped, ConfigStore, DisplayRow};

/// List hosts, either across all groups or scoped to one.
pub fn run(store: &ConfigStore, group: Option<&str>) -> Result<()> {
    let doc = store.load()?;

    let sections: Vec<(String, Vec<DisplayRow>)> = match group {
        Some(name) => vec![(name.trim().to_string(), list_group(&doc, name)?)],
        None => list_grouped(&doc),
    };

    if sections.iter().all(|(_, rows)| rows.is_empty()) {
        println!("{}", "No hosts configured".dimmed());
        return Ok(());
    }

    print_table(&sections);
    Ok(())
}

/// Fixed-width table in the style the tool has always printed:
/// `| Name | IP | Port | Notes |` with group banner rows.
fn print_table(sections: &[(String, Vec<DisplayRow>)]) {
    let all_rows: Vec<&DisplayRow> = sections.iter().flat_map(|(_, rows)| rows).collect();

    let w_name = column_width("Name", all_rows.iter().map(|r| r.name.len()));
    let w_ip = column_width("IP", all_rows.iter().map(|r| r.hostname.len()));
    let w_port = column_width("Port", all_rows.iter().map(|r| r.port.len()));
    let w_notes = column_width("Notes", all_rows.iter().map(|r| r.notes.len()));

    let header = format!(
        "| {} | {} | {} | {} |",
        pad("Name", w_name),
        pad("IP", w_ip),
        pad("Port", w_port),
        pad("Notes", w_notes)
    );
    let rule = "=".repeat(header.len());

    println!("{rule}");
    println!("{header}");
    println!("{rule}");

    for (group, rows) in sections {
        let banner = format!("Group: {group}");
        let inner = header.len() - 4;
        println!("| {} |", pad(&banner, inner).bold());
        println!("{rule}");

        for row in rows {
            println!(
                "| {} | {} | {} | {} |",
                pad(&row.name, w_name),
                pad(&row.hostname, w_ip),
                pad(&row.port, w_port),
                pad(&row.notes, w_notes)
            );
        }
        println!("{rule}");
    }
}

fn column_width(header: &str, widths: impl Iterator<Item = usize>) -> usize {
    widths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
