use sssh::sshconfig::{sorted_document, ConfigDocument};

#[test]
fn test_sort_end_to_end() {
    let input = "Host a\n  HostName 1.1.1.1\n  Port 22\n\n# G: prod\nHost b\n  HostName 2.2.2.2\n  Port 2200\n";
    let expected = "# G: prod\nHost b\n  HostName 2.2.2.2\n  Port 2200\n\nHost a\n  HostName 1.1.1.1\n  Port 22\n";
    assert_eq!(sorted_document(&ConfigDocument::parse(input)), expected);
}

#[test]
fn test_sort_idempotence_on_varied_inputs() {
    let inputs = [
        "",
        "# just a prelude\n",
        "Host a\n",
        "Host b\nHost a\n",
        "# G: z\nHost a\n\n\n# G: A\nHost b\n    Port 2222\n",
        "# prelude\n\n# G: prod\nHost web\n    HostName 10.0.0.5\n\nHost db\n",
    ];
    for input in inputs {
        let once = sorted_document(&ConfigDocument::parse(input));
        let twice = sorted_document(&ConfigDocument::parse(&once));
        assert_eq!(once, twice, "sort not idempotent for input {input:?}");
    }
}

#[test]
fn test_sort_group_order_is_case_insensitive_alpha_with_sentinel_last() {
    let input = "\
# G: beta
Host b1
# G: Alpha
Host a1
Host loose
# G: gamma
Host g1
";
    let sorted = sorted_document(&ConfigDocument::parse(input));
    let alpha = sorted.find("# G: Alpha").unwrap();
    let beta = sorted.find("# G: beta").unwrap();
    let gamma = sorted.find("# G: gamma").unwrap();
    let loose = sorted.find("Host loose").unwrap();
    assert!(alpha < beta && beta < gamma && gamma < loose);
}

#[test]
fn test_sort_drops_orphan_marker_content() {
    // Content stranded between a marker and the next Host line belongs to
    // no stanza, so a canonical rewrite leaves it out (matching the
    // longstanding sort behavior).
    let input = "# G: prod\n# stray\nHost a\n";
    let sorted = sorted_document(&ConfigDocument::parse(input));
    assert_eq!(sorted, "# G: prod\nHost a\n");
}

#[test]
fn test_sort_separates_blocks_with_one_blank_line() {
    let input = "Host b\n    Port 22\nHost a\n    Port 23\n";
    let sorted = sorted_document(&ConfigDocument::parse(input));
    assert_eq!(sorted, "Host a\n    Port 23\n\nHost b\n    Port 22\n");
}
