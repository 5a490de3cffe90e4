use serde::Deserialize;

use super::naming::DEFAULT_MODULE;

/// Options for generating a TypeScript client.
///
/// Read from the `.moonbeam.toml` file next to the input document,
/// then overridden by command-line flags.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodegenConfig {
    /// The module for operations without tags.
    pub default_module: String,
    /// Whether to emit the `fetch`-based `types/request.ts` helper that
    /// the generated functions call.
    pub runtime: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            default_module: DEFAULT_MODULE.to_owned(),
            runtime: true,
        }
    }
}
