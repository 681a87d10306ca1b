#![allow(clippy::unwrap_used)]

//! CLI integration tests over a JSON corpus fixture.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write as _;

const CORPUS: &str = r#"{
  "types": [
    { "name": "post", "label": "Posts", "public": true, "editor_capable": true },
    { "name": "page", "label": "Pages", "public": true, "editor_capable": true },
    { "name": "revision", "label": "Revisions", "public": false, "editor_capable": false }
  ],
  "documents": [
    {
      "id": 1,
      "title": "Post A",
      "type": "post",
      "status": "published",
      "body": "<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->",
      "edit_link": "/edit/1",
      "view_link": "/view/1"
    },
    {
      "id": 2,
      "title": "Post B",
      "type": "post",
      "status": "published",
      "body": "<!-- wp:columns --><!-- wp:paragraph --><p>Nested</p><!-- /wp:paragraph --><!-- /wp:columns -->",
      "edit_link": "/edit/2",
      "view_link": "/view/2"
    },
    {
      "id": 3,
      "title": "Draft C",
      "type": "post",
      "status": "draft",
      "body": "<!-- wp:paragraph --><p>Unpublished</p><!-- /wp:paragraph -->",
      "edit_link": "/edit/3",
      "view_link": "/view/3"
    }
  ]
}"#;

fn corpus_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();
    file
}

fn blockfind() -> Command {
    let mut cmd = Command::cargo_bin("blockfind").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn search_renders_both_documents() {
    let corpus = corpus_file();
    blockfind()
        .args(["search", "core/paragraph", "--corpus"])
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraph Block"))
        .stdout(predicate::str::contains("(2 documents)"))
        .stdout(predicate::str::contains("Post A"))
        .stdout(predicate::str::contains("Post B"))
        .stdout(predicate::str::contains("Parent: Columns"))
        // Drafts never reach the result set.
        .stdout(predicate::str::contains("Draft C").not());
}

#[test]
fn nested_filter_emits_structured_json() {
    let corpus = corpus_file();
    let output = blockfind()
        .args([
            "search",
            "core/paragraph",
            "--filter",
            "nested",
            "--format",
            "json",
            "--corpus",
        ])
        .arg(corpus.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let set: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(set["all_count"], 2);
    assert_eq!(set["nested_count"], 1);
    assert_eq!(set["total"], 1);
    assert_eq!(set["items"][0]["title"], "Post B");
    assert_eq!(set["items"][0]["has_root"], false);
    assert_eq!(set["items"][0]["has_nested"], true);
    assert_eq!(set["items"][0]["parent_labels"][0], "Columns");
}

#[test]
fn no_results_is_a_message_not_a_failure() {
    let corpus = corpus_file();
    blockfind()
        .args(["search", "core/pullquote", "--scope", "post", "--corpus"])
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents found"))
        .stdout(predicate::str::contains("Pullquote"));
}

#[test]
fn empty_target_fails_with_invalid_request() {
    let corpus = corpus_file();
    blockfind()
        .args(["search", "", "--corpus"])
        .arg(corpus.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request"));
}

#[test]
fn types_lists_editor_capable_types_only() {
    let corpus = corpus_file();
    blockfind()
        .args(["types", "--corpus"])
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages (page)"))
        .stdout(predicate::str::contains("Posts (post)"))
        .stdout(predicate::str::contains("Revisions").not());
}

#[test]
fn blocks_lists_distinct_names_with_labels() {
    let corpus = corpus_file();
    blockfind()
        .args(["blocks", "--corpus"])
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns (core/columns)"))
        .stdout(predicate::str::contains("Paragraph (core/paragraph)"));
}

#[test]
fn missing_corpus_file_is_a_clear_error() {
    blockfind()
        .args(["search", "core/quote", "--corpus", "/nonexistent/corpus.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load corpus"));
}
