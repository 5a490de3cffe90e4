use std::{
    collections::{BTreeSet, HashSet},
    sync::LazyLock,
};

use regex::Regex;

/// Matches the parameter type in a `@param { T } params` annotation.
static PARAM_DOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param\s*\{\s*([^}]+?)\s*\}\s*params").expect("valid `@param` pattern")
});

/// Matches the wrapped type in a `@returns {Promise<T>}` annotation.
static RETURNS_DOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@returns\s*\{Promise<([^>]+)>\}").expect("valid `@returns` pattern")
});

/// Matches the parameter and response types in a function signature.
static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+\w+\(params:\s*([^)]+)\):\s*Promise<([^>]+)>")
        .expect("valid signature pattern")
});

/// Discovers every type name that a rendered function mentions in its
/// `@param` annotation, its `@returns` annotation, or its signature.
///
/// Each pattern is applied independently; a name found by any of them
/// counts.
pub fn discover_types(text: &str) -> BTreeSet<&str> {
    let params = PARAM_DOC.captures_iter(text).filter_map(|c| c.get(1));
    let returns = RETURNS_DOC.captures_iter(text).filter_map(|c| c.get(1));
    let signatures = SIGNATURE
        .captures_iter(text)
        .flat_map(|c| [c.get(1), c.get(2)])
        .flatten();
    params
        .chain(returns)
        .chain(signatures)
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Returns the sorted, deduplicated names to import into a module
/// from the shared types module: every type discovered in the rendered
/// functions that the shared module declares.
pub fn resolve_imports<'a>(
    functions: impl IntoIterator<Item = &'a str>,
    shared: &HashSet<&str>,
) -> Vec<&'a str> {
    functions
        .into_iter()
        .flat_map(discover_types)
        .filter(|name| shared.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
