//! End-to-end success paths for the filter pipeline.

use std::fs;

use predicates::prelude::*;

use crate::common::{MICROBIOME_KEYWORDS, TestCorpus};

fn populate_sample_corpus(corpus: &TestCorpus) {
    corpus.add_recipe(
        "pkg1-folder",
        concat!(
            "package:\n",
            "  name: pkg1\n",
            "  version: \"1.0\"\n",
            "about:\n",
            "  summary: Analysis of 16S rRNA microbial communities\n",
            "  description: This tool profiles microbial diversity in metagenomics studies\n",
        ),
    );
    corpus.add_recipe(
        "pkg2-folder",
        concat!(
            "package:\n",
            "  name: pkg2\n",
            "  version: \"1.0\"\n",
            "about:\n",
            "  summary: A completely unrelated package\n",
            "  description: bla\n",
        ),
    );
    // pkg3 exercises template rendering on the way in.
    corpus.add_recipe(
        "pkg3-folder",
        concat!(
            "{% set name = \"pkg3\" %}\n",
            "{% set version = \"2.1\" %}\n",
            "package:\n",
            "  name: {{ name }}\n",
            "  version: \"{{ version }}\"\n",
            "requirements:\n",
            "  build:\n",
            "    - {{ compiler('c') }}\n",
            "about:\n",
            "  summary: Metagenome assembly pipeline\n",
            "  description: Assembles metagenomic reads into contigs\n",
        ),
    );
}

#[test]
fn filters_and_exports_matching_recipes() {
    let corpus = TestCorpus::new();
    populate_sample_corpus(&corpus);
    let keywords = corpus.write_keywords(MICROBIOME_KEYWORDS);

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 keywords"))
        .stdout(predicate::str::contains("Match found in: pkg1"))
        .stdout(predicate::str::contains("Match found in: pkg3"))
        .stdout(predicate::str::contains("Match found in: pkg2").not())
        .stdout(predicate::str::contains("Total matches: 2"))
        .stdout(predicate::str::contains("Filtered metadata written to:"));

    let output: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(corpus.output_path()).unwrap()).unwrap();
    let object = output.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["pkg1", "pkg3"]);

    // The templated recipe was rendered before parsing.
    assert_eq!(output["pkg3"]["package"]["version"], "2.1");
    // Fields outside package/about survive verbatim.
    assert!(output["pkg3"]["requirements"]["build"].is_array());
}

#[test]
fn output_is_indented_and_preserves_non_ascii() {
    let corpus = TestCorpus::new();
    corpus.add_recipe(
        "diversity",
        concat!(
            "package:\n",
            "  name: diversity\n",
            "about:\n",
            "  summary: \"Microbiome β-diversity metrics\"\n",
        ),
    );
    let keywords = corpus.write_keywords("keywords:\n  - microbiome\n");

    corpus.biosift_with_defaults(&keywords).assert().success();

    let text = fs::read_to_string(corpus.output_path()).unwrap();
    assert!(text.contains("\n    \"diversity\""));
    assert!(text.contains("β-diversity"));
    assert!(!text.contains("\\u"));
}

#[test]
fn empty_corpus_exports_an_empty_object() {
    let corpus = TestCorpus::new();
    let keywords = corpus.write_keywords(MICROBIOME_KEYWORDS);

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 0"));

    let text = fs::read_to_string(corpus.output_path()).unwrap();
    assert_eq!(text.trim(), "{}");
}

#[test]
fn recipes_without_matches_are_dropped_from_the_output() {
    let corpus = TestCorpus::new();
    corpus.add_recipe(
        "unrelated",
        "package:\n  name: unrelated\nabout:\n  summary: plain genomics\n",
    );
    let keywords = corpus.write_keywords("keywords:\n  - microbiome\n");

    corpus
        .biosift_with_defaults(&keywords)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 0"));

    let output: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(corpus.output_path()).unwrap()).unwrap();
    assert!(output.as_object().unwrap().is_empty());
}
