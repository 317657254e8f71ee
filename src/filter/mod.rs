//! Keyword filtering over recipe description/summary text.
//!
//! A recipe survives the filter when at least one keyword matches its
//! lower-cased search text (`about.description` plus `about.summary`).
//! Two matching modes exist:
//!
//! - **Literal**: keywords without a wildcard are case-insensitive
//!   substring tests against the whole search text.
//! - **Wildcard**: keywords containing `*` are shell-glob patterns matched
//!   per whitespace-delimited token, so `metagenom*` matches the word
//!   `metagenomics` but a `*` never spans across a word boundary.
//!
//! Filtering never fails: recipes without an `about` section simply have
//! empty search text, and an unparseable wildcard pattern matches nothing.

use colored::Colorize;
use glob::Pattern;

use crate::recipes::RecipeSet;

/// Test one keyword against a recipe's (already lower-cased) search text.
///
/// Keywords containing `*` use per-token shell-glob matching; everything
/// else is a plain substring test. Matching is case-insensitive because
/// both sides are lower-cased.
pub fn keyword_matches(text: &str, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    if needle.contains('*') {
        let Ok(pattern) = Pattern::new(&needle) else {
            tracing::warn!("ignoring unparseable wildcard keyword: {needle:?}");
            return false;
        };
        text.split_whitespace().any(|word| pattern.matches(word))
    } else {
        text.contains(&needle)
    }
}

/// Keep the recipes whose description/summary matches at least one keyword.
///
/// Returns a new collection restricted to the matching entries; the input
/// is left untouched. Filtering an already-filtered collection with the
/// same keywords yields the same collection.
///
/// When `verbose` is set, prints one line per match naming the recipe and
/// the keywords that hit, followed by the total match count.
pub fn filter_by_keywords(recipes: &RecipeSet, keywords: &[String], verbose: bool) -> RecipeSet {
    let mut filtered = RecipeSet::new();

    for (name, recipe) in recipes {
        let text = recipe.search_text();
        let matched: Vec<&str> = keywords
            .iter()
            .map(String::as_str)
            .filter(|keyword| keyword_matches(&text, keyword))
            .collect();

        if !matched.is_empty() {
            if verbose {
                println!(
                    "Match found in: {} | matched keywords: {}",
                    name.cyan(),
                    matched.join(", ")
                );
            }
            filtered.insert(name.clone(), recipe.clone());
        }
    }

    if verbose {
        println!("Total matches: {}", filtered.len().to_string().bold());
    }

    filtered
}
