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

//! Line classification for the SSH config document
//!
//! Recognizes the three line kinds the block extractor cares about: the
//! `# G: <name>` group marker convention, `Host <alias...>` stanza starts,
//! and everything else (directives, plain comments, blanks).

/// Classification of a single config line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `# G: <name>` marker. `None` means the name was empty, which clears
    /// any pending group without setting a new one.
    GroupMarker(Option<String>),
    /// `Host <alias...>` with at least one alias token.
    HostStart(Vec<String>),
    /// Directive, plain comment, or blank line. Kept verbatim.
    Other,
}

/// Classify one line of config text.
pub fn classify(line: &str) -> LineKind {
    if let Some(marker) = parse_group_marker(line) {
        return LineKind::GroupMarker(marker);
    }

    let trimmed = line.trim_start();
    let mut tokens = trimmed.split_whitespace();
    if let Some(keyword) = tokens.next() {
        if keyword.eq_ignore_ascii_case("host") {
            let aliases: Vec<String> = tokens.map(|s| s.to_string()).collect();
            if !aliases.is_empty() {
                return LineKind::HostStart(aliases);
            }
        }
    }

    LineKind::Other
}

/// Match `optional-ws # optional-ws G optional-ws : name`, case-insensitive.
///
/// Returns `Some(None)` when the marker shape matches but the captured name
/// is empty.
fn parse_group_marker(line: &str) -> Option<Option<String>> {
    let rest = line.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('G')
        .or_else(|| rest.strip_prefix('g'))?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':')?;

    let name = rest.trim();
    if name.is_empty() {
        Some(None)
    } else {
        Some(Some(name.to_string()))
    }
}
