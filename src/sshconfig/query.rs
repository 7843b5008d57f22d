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

//! Read-only queries over a parsed config document

use std::str::FromStr;

use super::document::{ConfigDocument, Entry, UNGROUPED};
use super::error::ConfigError;
use super::record::HostRecord;

/// One listing row: short name, address, port, notes, with the documented
/// defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub hostname: String,
    pub port: String,
    pub notes: String,
}

impl DisplayRow {
    fn from_entry(entry: &Entry) -> Self {
        let record = HostRecord::from_entry(entry);
        Self {
            name: record.short_name.clone(),
            hostname: record.hostname_or_dash().to_string(),
            port: record.port_or_default().to_string(),
            notes: record.notes_or_dash().to_string(),
        }
    }
}

/// Field kind accepted by [`find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindKind {
    Ip,
    Hostname,
    Port,
    User,
}

impl FromStr for FindKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ip" => Ok(Self::Ip),
            "hostname" => Ok(Self::Hostname),
            "port" => Ok(Self::Port),
            "user" => Ok(Self::User),
            other => Err(format!(
                "unknown find kind '{other}' (expected ip, hostname, port, or user)"
            )),
        }
    }
}

/// List every stanza, clustered by group.
///
/// [`UNGROUPED`] comes first; the remaining groups follow alphabetically,
/// case-insensitive. Rows within a group keep document order.
pub fn list_grouped(doc: &ConfigDocument) -> Vec<(String, Vec<DisplayRow>)> {
    let mut groups: Vec<(String, Vec<DisplayRow>)> = Vec::new();

    for entry in &doc.entries {
        let row = DisplayRow::from_entry(entry);
        match groups
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&entry.group))
        {
            Some((_, rows)) => rows.push(row),
            None => groups.push((entry.group.clone(), vec![row])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| {
        let a_sentinel = a.eq_ignore_ascii_case(UNGROUPED);
        let b_sentinel = b.eq_ignore_ascii_case(UNGROUPED);
        b_sentinel
            .cmp(&a_sentinel)
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    });
    groups
}

/// List the stanzas of one group, exact case-insensitive match.
///
/// Distinguishes an unknown group from a known-but-empty one by checking
/// membership of the name among all entries' groups.
pub fn list_group(doc: &ConfigDocument, name: &str) -> Result<Vec<DisplayRow>, ConfigError> {
    let name = name.trim();
    let rows: Vec<DisplayRow> = doc
        .entries
        .iter()
        .filter(|e| e.group.eq_ignore_ascii_case(name))
        .map(DisplayRow::from_entry)
        .collect();

    if rows.is_empty() {
        let known = doc
            .entries
            .iter()
            .any(|e| e.group.eq_ignore_ascii_case(name));
        if known {
            return Err(ConfigError::GroupEmpty {
                name: name.to_string(),
            });
        }
        return Err(ConfigError::GroupNotFound {
            name: name.to_string(),
        });
    }

    Ok(rows)
}

/// Substring search by field kind, case-insensitive, in document order.
///
/// Each stanza is included at most once. `Hostname` matches against the
/// `Host` line itself; `Ip`, `Port`, and `User` match against lines
/// starting with the corresponding directive.
pub fn find<'a>(doc: &'a ConfigDocument, kind: FindKind, query: &str) -> Vec<&'a Entry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    doc.entries
        .iter()
        .filter(|entry| entry_matches(entry, kind, &query))
        .collect()
}

fn entry_matches(entry: &Entry, kind: FindKind, query: &str) -> bool {
    match kind {
        FindKind::Hostname => entry.raw_lines[0].to_lowercase().contains(query),
        FindKind::Ip => any_directive_line_contains(entry, "hostname ", query),
        FindKind::Port => any_directive_line_contains(entry, "port ", query),
        FindKind::User => any_directive_line_contains(entry, "user ", query),
    }
}

fn any_directive_line_contains(entry: &Entry, prefix: &str, query: &str) -> bool {
    entry.raw_lines.iter().skip(1).any(|line| {
        let lowered = line.trim().to_lowercase();
        lowered.starts_with(prefix) && lowered.contains(query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# G: prod
Host web
    HostName 10.0.0.5
    Port 2222

Host db
    HostName 10.0.0.6
    User postgres
    # Notes: primary
";

    #[test]
    fn test_list_grouped_order() {
        let doc = ConfigDocument::parse(SAMPLE);
        let groups = list_grouped(&doc);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, UNGROUPED);
        assert_eq!(groups[1].0, "prod");

        let db = &groups[0].1[0];
        assert_eq!(db.name, "db");
        assert_eq!(db.port, "22");
        assert_eq!(db.notes, "primary");
    }

    #[test]
    fn test_list_group_case_insensitive() {
        let doc = ConfigDocument::parse(SAMPLE);
        let rows = list_group(&doc, "PROD").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "web");
        assert_eq!(rows[0].hostname, "10.0.0.5");
    }

    #[test]
    fn test_list_group_not_found() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert!(matches!(
            list_group(&doc, "staging"),
            Err(ConfigError::GroupNotFound { .. })
        ));
    }

    #[test]
    fn test_find_by_each_kind() {
        let doc = ConfigDocument::parse(SAMPLE);

        let hits = find(&doc, FindKind::Ip, "10.0.0");
        assert_eq!(hits.len(), 2);

        let hits = find(&doc, FindKind::Port, "222");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].short_name(), "web");

        let hits = find(&doc, FindKind::Hostname, "web");
        assert_eq!(hits.len(), 1);

        let hits = find(&doc, FindKind::User, "postgres");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].short_name(), "db");
    }

    #[test]
    fn test_ip_does_not_match_port_lines() {
        let doc =
            ConfigDocument::parse("Host odd\n    Port 10005\n");
        assert!(find(&doc, FindKind::Ip, "10.0.0").is_empty());
        assert!(find(&doc, FindKind::Ip, "1000").is_empty());
    }

    #[test]
    fn test_find_kind_from_str() {
        assert_eq!("IP".parse::<FindKind>().unwrap(), FindKind::Ip);
        assert!("proxy".parse::<FindKind>().is_err());
    }
}
