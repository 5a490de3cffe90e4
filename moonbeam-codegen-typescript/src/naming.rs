use heck::AsLowerCamelCase;

/// The module that holds every type declaration.
pub const SHARED_MODULE: &str = "types";

/// The module for operations whose tag would otherwise
/// collide with [`SHARED_MODULE`].
pub const SHARED_MODULE_TAG: &str = "types_api";

/// The default module for operations without tags.
pub const DEFAULT_MODULE: &str = "common";

/// The parameter type of operations without a body or query parameters.
pub const EMPTY_REQUEST: &str = "EmptyRequest";

/// The response type of operations without a success response schema.
pub const EMPTY_REPLY: &str = "EmptyReply";

/// The name of the runtime helper that every generated function calls.
pub const REQUEST_HELPER: &str = "request";

/// TypeScript reserved words that can't be used as identifiers.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    // Strict mode reserved words.
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
];

/// Returns the names that a generated function can't take: reserved words,
/// and the imported runtime helper.
pub fn reserved_function_names() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().copied().chain(std::iter::once(REQUEST_HELPER))
}

/// Returns the module for an operation: its first tag, lower-cased,
/// or the default module if it doesn't have one.
///
/// The module name becomes a directory under the output, so a tag that
/// isn't a single path segment falls back to the default module, and a
/// default module that isn't one falls back to [`DEFAULT_MODULE`].
pub fn module_name(tag: Option<&str>, default_module: &str) -> String {
    let name = match tag.map(str::to_lowercase) {
        Some(tag) if is_path_segment(&tag) => tag,
        Some(tag) => {
            if !tag.is_empty() {
                tracing::warn!(
                    tag = %tag,
                    "tag isn't a valid module name; using the default module"
                );
            }
            default_name(default_module)
        }
        None => default_name(default_module),
    };
    if name == SHARED_MODULE {
        SHARED_MODULE_TAG.to_owned()
    } else {
        name
    }
}

fn default_name(default_module: &str) -> String {
    if is_path_segment(default_module) {
        default_module.to_owned()
    } else {
        tracing::warn!(
            default_module,
            "default module isn't a valid module name; using `{DEFAULT_MODULE}`"
        );
        DEFAULT_MODULE.to_owned()
    }
}

/// Returns `true` if `s` names a single directory: non-empty, without
/// separators, and not `.` or `..`.
fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains(['/', '\\']) && !s.contains("..") && s != "."
}

/// Joins `_`-separated parts, capitalizing the first letter and
/// lower-casing the rest of every part after the first. The first part
/// is kept as-is.
///
/// # Examples
///
/// ```
/// # use moonbeam_codegen_typescript::to_camel;
/// assert_eq!(to_camel("List"), "List");
/// assert_eq!(to_camel("List_ALL_items"), "ListAllItems");
/// assert_eq!(to_camel("get__Role"), "getRole");
/// ```
pub fn to_camel(s: &str) -> String {
    let mut parts = s.split('_');
    let mut camel = parts.next().unwrap_or_default().to_owned();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(&chars.as_str().to_lowercase());
        }
    }
    camel
}

/// Returns the function name for an operation action: the action in
/// camel case, with its first character lower-cased.
///
/// Actions that don't form a valid identifier are converted to
/// lower camel case, with a `_` prefix if they start with a digit.
pub fn function_name(action: &str) -> String {
    let name = lower_first(&to_camel(action));
    if is_identifier(&name) {
        name
    } else {
        escape_leading_digit(AsLowerCamelCase(&name).to_string())
    }
}

/// Returns the name of the ad-hoc request type for an operation action.
pub fn request_type_name(action: &str) -> String {
    format!("{}Request", upper_first(&to_camel(action)))
}

/// Returns a property key for an interface member, quoting names that
/// aren't valid identifiers.
///
/// # Examples
///
/// ```
/// # use moonbeam_codegen_typescript::property_key;
/// assert_eq!(property_key("petType"), "petType");
/// assert_eq!(property_key("content-type"), r#""content-type""#);
/// ```
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_owned()
    } else {
        serde_json::Value::from(name).to_string()
    }
}

/// Returns the namespace alias for a module in the root barrel file.
pub fn module_alias(module: &str) -> String {
    if is_identifier(module) && !KEYWORDS.contains(&module) {
        return module.to_owned();
    }
    let alias = escape_leading_digit(AsLowerCamelCase(module).to_string());
    if alias.is_empty() || KEYWORDS.contains(&alias.as_str()) {
        format!("_{alias}")
    } else {
        alias
    }
}

/// Returns `true` if `s` is a valid JavaScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '$' || c == '_' || unicode_ident::is_xid_start(c))
        && chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}

fn escape_leading_digit(s: String) -> String {
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{s}")
    } else {
        s
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
