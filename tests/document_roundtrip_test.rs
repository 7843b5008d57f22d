use sssh::sshconfig::{ConfigDocument, UNGROUPED};

#[test]
fn test_roundtrip_typical_config() {
    let text = "\
# global defaults
Host *
    ServerAliveInterval 60

# G: prod
Host web
    HostName 10.0.0.5
    Port 2222
    # Notes: edge

Host db backup-db
    HostName 10.0.0.6
";
    let doc = ConfigDocument::parse(text);
    assert_eq!(doc.render(), text);
}

#[test]
fn test_roundtrip_without_trailing_newline() {
    let text = "Host a\n    Port 22";
    assert_eq!(ConfigDocument::parse(text).render(), text);
}

#[test]
fn test_roundtrip_preserves_orphan_content() {
    // Lines between a marker and the next Host belong to no stanza but
    // must survive an unsorted render.
    let text = "# G: prod\n# stray comment\nHost a\n    Port 22\n";
    let doc = ConfigDocument::parse(text);
    assert_eq!(doc.render(), text);
    assert_eq!(doc.entries.len(), 1);
    assert_eq!(doc.entries[0].group, "prod");
    assert!(!doc.entries[0].raw_lines.contains(&"# stray comment".to_string()));
}

#[test]
fn test_roundtrip_blank_and_comment_heavy() {
    let text = "\n\n# only comments\n\n# and blanks\n\n";
    let doc = ConfigDocument::parse(text);
    assert_eq!(doc.render(), text);
    assert!(doc.entries.is_empty());
    assert_eq!(doc.prelude.len(), 6);
}

#[test]
fn test_wildcard_stanza_is_an_entry_like_any_other() {
    let doc = ConfigDocument::parse("Host *\n    ServerAliveInterval 60\n");
    assert_eq!(doc.entries.len(), 1);
    assert_eq!(doc.entries[0].short_name(), "*");
    assert_eq!(doc.entries[0].group, UNGROUPED);
}
