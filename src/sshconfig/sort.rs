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

//! Canonical re-serialization: entries clustered by group and sorted
//!
//! Groups are ordered alphabetically (case-insensitive) with the sentinel
//! group last; entries within a group are ordered by short name
//! (case-insensitive). Grouped stanzas get their `# G:` marker
//! re-synthesized. The operation is idempotent: group and order are fully
//! determined by group name and short name alone.

use super::document::{ConfigDocument, Entry, UNGROUPED};

/// Produce the canonical sorted rendering of the document.
pub fn sorted_document(doc: &ConfigDocument) -> String {
    let mut out: Vec<String> = doc.prelude.clone();
    if !out.is_empty() && !last_is_blank(&out) {
        out.push(String::new());
    }

    // Cluster case-insensitively; the first-seen spelling is rendered.
    let mut groups: Vec<(String, Vec<&Entry>)> = Vec::new();
    for entry in &doc.entries {
        match groups
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&entry.group))
        {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.group.clone(), vec![entry])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| {
        let a_sentinel = a.eq_ignore_ascii_case(UNGROUPED);
        let b_sentinel = b.eq_ignore_ascii_case(UNGROUPED);
        a_sentinel
            .cmp(&b_sentinel)
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    });

    for (name, members) in &mut groups {
        members.sort_by_key(|e| e.short_name().to_lowercase());
        let sentinel = name.eq_ignore_ascii_case(UNGROUPED);

        for entry in members.iter() {
            if !last_is_blank(&out) && !out.is_empty() {
                out.push(String::new());
            }
            if !sentinel {
                out.push(format!("# G: {name}"));
            }
            out.extend(entry.raw_lines.iter().cloned());
        }
    }

    // Canonical form ends with exactly one newline after the last stanza.
    while last_is_blank(&out) {
        out.pop();
    }
    if out.is_empty() {
        return String::new();
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn last_is_blank(lines: &[String]) -> bool {
    lines.last().is_some_and(|l| l.trim().is_empty())
}
