//! Stub template environment for recipe rendering.
//!
//! Bioconda recipes are Jinja-templated YAML documents that call
//! conda-build helper macros: compiler selection (`{{ compiler('c') }}`),
//! pin constraints (`{{ pin_compatible('numpy') }}`), environment lookups,
//! and so on. None of those helpers exist outside conda-build, so rendering
//! here substitutes inert stand-ins: every recognized helper becomes a
//! no-op function and undefined variables resolve to empty strings. The
//! output only has to be parseable YAML with intact `package` and `about`
//! sections, not a buildable recipe.

use minijinja::value::{Kwargs, Rest, Value};
use minijinja::{Environment, UndefinedBehavior};

/// conda-build helper macros replaced by no-op stand-ins during rendering.
const STUBBED_HELPERS: &[&str] = &[
    "compiler",
    "cdt",
    "pin_compatible",
    "pin_subpackage",
    "exact",
    "stdlib",
];

/// No-op stand-in for a conda-build helper macro.
///
/// Accepts any positional and keyword arguments and yields an undefined
/// value, which renders as an empty string.
fn noop_helper(args: Rest<Value>, kwargs: Kwargs) -> Value {
    let _ = (args, kwargs);
    Value::UNDEFINED
}

/// Build the sandboxed environment used to render every recipe.
///
/// The environment has chainable-undefined semantics, so nested lookups
/// like `os.environ.something` render as empty strings instead of failing.
/// The `environ` global is explicitly bound to the empty string to mirror
/// how environment lookups are neutralized.
fn stub_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Chainable);
    env.set_keep_trailing_newline(true);
    env.add_global("environ", Value::from(""));
    for helper in STUBBED_HELPERS {
        env.add_function(*helper, noop_helper);
    }
    env
}

/// Render one recipe template with inert stand-in values.
///
/// Returns the expanded text ready for YAML parsing. Any template failure
/// (syntax errors, calls to unknown callables) is returned as-is so the
/// caller can wrap it with the recipe path.
pub fn render_recipe(source: &str) -> Result<String, minijinja::Error> {
    stub_environment().render_str(source, minijinja::context! {})
}
