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

//! Parsed representation of an SSH client config file
//!
//! A [`ConfigDocument`] is rebuilt from the file text at the start of every
//! operation and discarded after the corresponding write. It keeps the full
//! original line sequence so that rendering without sorting is
//! byte-identical, and partitions it into a prelude plus an ordered list of
//! [`Entry`] stanzas, each tagged with its resolved group.

use std::ops::Range;

use super::classify::{classify, LineKind};

/// Group assigned to stanzas with no preceding `# G:` marker.
pub const UNGROUPED: &str = "Ungrouped";

/// One `Host` stanza: its resolved group, aliases, and verbatim lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Resolved group name, [`UNGROUPED`] when no marker preceded the stanza.
    pub group: String,
    /// Whitespace-separated tokens after `Host`; the first is the short name.
    pub aliases: Vec<String>,
    /// Verbatim lines from the `Host` line up to the next marker or stanza.
    pub raw_lines: Vec<String>,
    /// Half-open line span of `raw_lines` within the document.
    pub span: Range<usize>,
}

impl Entry {
    /// First alias on the `Host` line, used for sorting and primary lookup.
    pub fn short_name(&self) -> &str {
        &self.aliases[0]
    }

    /// The stanza joined back into one newline-terminated string.
    pub fn raw_text(&self) -> String {
        let mut text = self.raw_lines.join("\n");
        text.push('\n');
        text
    }
}

/// A parsed config file: prelude lines, stanzas, and the retained original
/// line sequence they were extracted from.
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    lines: Vec<String>,
    ends_with_newline: bool,
    /// Lines preceding the first stanza or group marker, verbatim.
    pub prelude: Vec<String>,
    /// Stanzas in document order.
    pub entries: Vec<Entry>,
}

impl ConfigDocument {
    /// Parse config text into a document.
    ///
    /// Single forward scan: a pending group set by a `# G:` marker applies
    /// only to the immediately following stanza; a marker with no following
    /// stanza is discarded. Marker lines are never stored on any entry.
    pub fn parse(text: &str) -> Self {
        let ends_with_newline = text.ends_with('\n');
        let mut lines: Vec<String> = text.split('\n').map(|l| l.to_string()).collect();
        if ends_with_newline {
            // split('\n') leaves one empty trailing element
            lines.pop();
        }
        if text.is_empty() {
            lines.clear();
        }

        let mut prelude = Vec::new();
        let mut entries: Vec<Entry> = Vec::new();
        let mut pending_group: Option<String> = None;
        let mut open: Option<(Entry, usize)> = None;
        let mut in_prelude = true;

        for (idx, line) in lines.iter().enumerate() {
            match classify(line) {
                LineKind::GroupMarker(name) => {
                    in_prelude = false;
                    if let Some((mut entry, start)) = open.take() {
                        entry.span = start..idx;
                        entries.push(entry);
                    }
                    pending_group = name;
                }
                LineKind::HostStart(aliases) => {
                    in_prelude = false;
                    if let Some((mut entry, start)) = open.take() {
                        entry.span = start..idx;
                        entries.push(entry);
                    }
                    let group = pending_group.take().unwrap_or_else(|| UNGROUPED.to_string());
                    let entry = Entry {
                        group,
                        aliases,
                        raw_lines: vec![line.clone()],
                        span: idx..idx,
                    };
                    open = Some((entry, idx));
                }
                LineKind::Other => {
                    if in_prelude {
                        prelude.push(line.clone());
                    } else if let Some((ref mut entry, _)) = open {
                        entry.raw_lines.push(line.clone());
                    } else {
                        // Content between a group marker and the next Host
                        // line belongs to no stanza; it stays in `lines` and
                        // survives an unsorted render.
                        tracing::debug!("line {} outside any stanza: {:?}", idx + 1, line);
                    }
                }
            }
        }

        if let Some((mut entry, start)) = open.take() {
            entry.span = start..lines.len();
            entries.push(entry);
        }

        Self {
            lines,
            ends_with_newline,
            prelude,
            entries,
        }
    }

    /// Render the document without reordering: byte-identical to the input.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.ends_with_newline {
            text.push('\n');
        }
        text
    }

    /// Borrow the retained line sequence.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any alias of any stanza equals `short_name` exactly.
    pub fn contains_alias(&self, short_name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.aliases.iter().any(|a| a == short_name))
    }

    /// First stanza whose alias list contains `name` (case-insensitive).
    pub fn entry_by_name(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
    }

    /// First stanza whose raw lines equal `entry`'s.
    ///
    /// Byte-identical duplicate blocks resolve to the first occurrence;
    /// mutations issued against a later duplicate affect the first one.
    pub fn first_matching(&self, entry: &Entry) -> Option<&Entry> {
        self.entries.iter().find(|e| e.raw_lines == entry.raw_lines)
    }

    /// Replace the line span `[span.start, span.end)` with `replacement`
    /// lines and return the re-rendered text.
    pub(crate) fn splice(&self, span: &Range<usize>, replacement: &[String]) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(
            self.lines.len() - (span.end - span.start) + replacement.len(),
        );
        lines.extend_from_slice(&self.lines[..span.start]);
        lines.extend_from_slice(replacement);
        lines.extend_from_slice(&self.lines[span.end..]);

        let mut text = lines.join("\n");
        if self.ends_with_newline && !lines.is_empty() {
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# managed by sssh

# G: prod
Host web
    HostName 10.0.0.5
    Port 2222

Host db backup-db
    HostName 10.0.0.6
";

    #[test]
    fn test_prelude_and_entries() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert_eq!(doc.prelude, vec!["# managed by sssh", ""]);
        assert_eq!(doc.entries.len(), 2);

        let web = &doc.entries[0];
        assert_eq!(web.group, "prod");
        assert_eq!(web.short_name(), "web");
        assert_eq!(
            web.raw_lines,
            vec!["Host web", "    HostName 10.0.0.5", "    Port 2222", ""]
        );

        let db = &doc.entries[1];
        assert_eq!(db.group, UNGROUPED);
        assert_eq!(db.aliases, vec!["db", "backup-db"]);
    }

    #[test]
    fn test_render_is_byte_identical() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert_eq!(doc.render(), SAMPLE);

        // No trailing newline
        let text = "Host a\n    Port 22";
        assert_eq!(ConfigDocument::parse(text).render(), text);

        // Empty document
        assert_eq!(ConfigDocument::parse("").render(), "");
    }

    #[test]
    fn test_marker_applies_to_next_stanza_only() {
        let text = "# G: prod\n# G: staging\nHost a\n";
        let doc = ConfigDocument::parse(text);
        assert_eq!(doc.entries[0].group, "staging");
    }

    #[test]
    fn test_trailing_marker_is_discarded() {
        let text = "Host a\n# G: prod\n";
        let doc = ConfigDocument::parse(text);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].group, UNGROUPED);
        assert_eq!(doc.entries[0].raw_lines, vec!["Host a"]);
        // The orphan marker still renders
        assert_eq!(doc.render(), text);
    }

    #[test]
    fn test_empty_marker_clears_pending_group() {
        let text = "# G: prod\n# G:\nHost a\n";
        let doc = ConfigDocument::parse(text);
        assert_eq!(doc.entries[0].group, UNGROUPED);
    }

    #[test]
    fn test_contains_alias_matches_any_alias() {
        let doc = ConfigDocument::parse(SAMPLE);
        assert!(doc.contains_alias("web"));
        assert!(doc.contains_alias("backup-db"));
        assert!(!doc.contains_alias("WEB"));
        assert!(!doc.contains_alias("missing"));
    }

    #[test]
    fn test_entry_spans_cover_raw_lines() {
        let doc = ConfigDocument::parse(SAMPLE);
        for entry in &doc.entries {
            let span_lines = &doc.lines()[entry.span.clone()];
            assert_eq!(span_lines, entry.raw_lines.as_slice());
        }
    }
}
