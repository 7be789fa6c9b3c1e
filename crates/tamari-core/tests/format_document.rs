//! Integration test driving the public formatting API end to end.

use tamari_core::{CstBuilder, FormatterConfiguration, TomlSyntaxKind, format_document};

/// Build the tree a parser would produce for:
///
/// ```toml
/// # database settings
/// [database]
/// ports = [8001, 8001, 8002]
/// enabled = true # toggle
/// ```
fn build_database_document() -> tamari_core::TomlSyntaxNode {
    let mut builder = CstBuilder::new();
    builder.start_node(TomlSyntaxKind::Root);

    builder.start_node(TomlSyntaxKind::Expression);
    builder.token(TomlSyntaxKind::Comment, "# database settings");
    builder.finish_node();
    builder.token(TomlSyntaxKind::Newline, "\n");

    builder.start_node(TomlSyntaxKind::Expression);
    builder.start_node(TomlSyntaxKind::Table);
    builder.start_node(TomlSyntaxKind::StdTable);
    builder.token(TomlSyntaxKind::LBracket, "[");
    builder.start_node(TomlSyntaxKind::Key);
    builder.token(TomlSyntaxKind::BareKey, "database");
    builder.finish_node();
    builder.token(TomlSyntaxKind::RBracket, "]");
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    builder.token(TomlSyntaxKind::Newline, "\n");

    builder.start_node(TomlSyntaxKind::Expression);
    builder.start_node(TomlSyntaxKind::KeyVal);
    builder.start_node(TomlSyntaxKind::Key);
    builder.token(TomlSyntaxKind::BareKey, "ports");
    builder.finish_node();
    builder.token(TomlSyntaxKind::Whitespace, " ");
    builder.token(TomlSyntaxKind::Equals, "=");
    builder.token(TomlSyntaxKind::Whitespace, " ");
    builder.start_node(TomlSyntaxKind::Val);
    builder.start_node(TomlSyntaxKind::Array);
    builder.token(TomlSyntaxKind::LBracket, "[");
    builder.start_node(TomlSyntaxKind::ArrayValues);
    for (index, port) in ["8001", "8001", "8002"].iter().enumerate() {
        if index > 0 {
            builder.token(TomlSyntaxKind::Comma, ",");
            builder.token(TomlSyntaxKind::Whitespace, " ");
        }
        builder.start_node(TomlSyntaxKind::Val);
        builder.token(TomlSyntaxKind::Integer, port);
        builder.finish_node();
    }
    builder.finish_node();
    builder.token(TomlSyntaxKind::RBracket, "]");
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    builder.token(TomlSyntaxKind::Newline, "\n");

    builder.start_node(TomlSyntaxKind::Expression);
    builder.start_node(TomlSyntaxKind::KeyVal);
    builder.start_node(TomlSyntaxKind::Key);
    builder.token(TomlSyntaxKind::BareKey, "enabled");
    builder.finish_node();
    builder.token(TomlSyntaxKind::Whitespace, " ");
    builder.token(TomlSyntaxKind::Equals, "=");
    builder.token(TomlSyntaxKind::Whitespace, " ");
    builder.start_node(TomlSyntaxKind::Val);
    builder.token(TomlSyntaxKind::Boolean, "true");
    builder.finish_node();
    builder.finish_node();
    builder.token(TomlSyntaxKind::Whitespace, " ");
    builder.token(TomlSyntaxKind::Comment, "# toggle");
    builder.finish_node();
    builder.token(TomlSyntaxKind::Newline, "\n");

    builder.finish_node();
    builder.finish()
}

#[test]
fn formats_a_document_with_defaults() {
    let root = build_database_document();
    let formatted = format_document(&root, &FormatterConfiguration::default()).unwrap();
    assert_eq!(
        formatted,
        "# database settings\n[database]\nports = [8001, 8001, 8002]\nenabled = true # toggle\n"
    );
}

#[test]
fn narrow_width_breaks_the_array() {
    let root = build_database_document();
    let config: FormatterConfiguration =
        serde_json::from_str(r#"{"lineWidth": 20}"#).unwrap();
    let formatted = format_document(&root, &config).unwrap();
    assert_eq!(
        formatted,
        "# database settings\n[database]\nports = [\n  8001,\n  8001,\n  8002,\n]\nenabled = true # toggle\n"
    );
}
