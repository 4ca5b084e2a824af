// Multibyte heading content
//
// Chapter titles in a translated book are mostly CJK with ASCII
// fragments; anchors must carry them through unchanged.

use crate::common::{anchor_names, index_docs, TestDocs};

#[test]
fn test_cjk_chapter_title() {
    let docs = TestDocs::with_files(&[("chapter.md", "# 闭包（Closures）\n")]);

    let (table, _) = index_docs(docs.path());

    assert_eq!(anchor_names(&table), vec!["doc:闭包（Closures）"]);
    assert_eq!(table.anchors()[0].pattern, "/^# 闭包（Closures）/");
}

#[test]
fn test_cjk_paths() {
    let docs = TestDocs::with_files(&[("语言指南/基础.md", "# 基础\n")]);

    let (table, _) = index_docs(docs.path());

    assert_eq!(table.anchors()[0].path, "语言指南/基础.md");
}

#[test]
fn test_emoji_and_rtl_titles() {
    let docs = TestDocs::with_files(&[("a.md", "# Rust 🦀 notes\n# مرحبا بالعالم\n")]);

    let (table, _) = index_docs(docs.path());

    assert_eq!(
        anchor_names(&table),
        vec!["doc:Rust 🦀 notes", "doc:مرحبا بالعالم"]
    );
}

#[test]
fn test_crlf_line_endings() {
    let docs = TestDocs::with_files(&[("win.md", "# Windows\r\nbody\r\n")]);

    let (table, _) = index_docs(docs.path());

    assert_eq!(anchor_names(&table), vec!["doc:Windows"]);
    assert_eq!(table.anchors()[0].pattern, "/^# Windows/");
}
