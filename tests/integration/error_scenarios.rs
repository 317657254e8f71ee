//! Failure paths: every error class aborts the run with a message naming
//! the offending file.

use predicates::prelude::*;

use crate::common::{MICROBIOME_KEYWORDS, TestCorpus};

#[test]
fn recipe_missing_package_name_aborts_the_run() {
    let corpus = TestCorpus::new();
    let recipe_path = corpus.add_recipe("nameless", "about:\n  summary: no package section\n");
    let keywords = corpus.write_keywords(MICROBIOME_KEYWORDS);

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing 'package.name'"))
        .stderr(predicate::str::contains(recipe_path.display().to_string()));
}

#[test]
fn broken_template_aborts_the_run() {
    let corpus = TestCorpus::new();
    corpus.add_recipe("broken", "package:\n  name: {% if %}\n");
    let keywords = corpus.write_keywords(MICROBIOME_KEYWORDS);

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render recipe template"))
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn invalid_rendered_yaml_aborts_the_run() {
    let corpus = TestCorpus::new();
    corpus.add_recipe("badyaml", "package: [unclosed\n");
    let keywords = corpus.write_keywords(MICROBIOME_KEYWORDS);

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"))
        .stderr(predicate::str::contains("badyaml"));
}

#[test]
fn keywords_file_without_keywords_key_aborts_the_run() {
    let corpus = TestCorpus::new();
    let keywords = corpus.write_keywords("terms:\n  - microbiome\n");

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No 'keywords' key found"));
}

#[test]
fn scalar_keywords_value_aborts_the_run() {
    let corpus = TestCorpus::new();
    let keywords = corpus.write_keywords("keywords: microbiome\n");

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a list"));
}

#[test]
fn missing_keywords_file_aborts_the_run() {
    let corpus = TestCorpus::new();
    let missing = corpus.recipes_dir().join("does-not-exist.yaml");

    corpus
        .biosift_with_defaults(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read keywords file"));
}

#[test]
fn a_bad_keyword_config_fails_before_the_corpus_is_scanned() {
    let corpus = TestCorpus::new();
    // A corpus that would itself fail to load.
    corpus.add_recipe("nameless", "about:\n  summary: no package section\n");
    let keywords = corpus.write_keywords("terms:\n  - microbiome\n");

    // The keyword error wins: keywords load first.
    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No 'keywords' key found"))
        .stderr(predicate::str::contains("Missing 'package.name'").not());
}
