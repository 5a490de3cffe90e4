use serde::Serialize;

use super::{
    error::CodegenError,
    naming::{SHARED_MODULE, module_alias},
    templates::{INDEX_FILE, Templates},
};

/// Generates the root `index.ts`, which re-exports the shared types,
/// and each function module under a namespace alias.
#[derive(Debug)]
pub struct CodegenIndex<'a> {
    modules: Vec<ModuleContext<'a>>,
}

#[derive(Debug, Serialize)]
struct ModuleContext<'a> {
    name: &'a str,
    alias: String,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    shared_module: &'a str,
    modules: &'a [ModuleContext<'a>],
}

impl<'a> CodegenIndex<'a> {
    /// Creates the index for the given module names, which must
    /// already be sorted.
    pub fn new(modules: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|name| ModuleContext {
                    name,
                    alias: module_alias(name),
                })
                .collect(),
        }
    }

    pub fn render(&self, templates: &Templates) -> Result<String, CodegenError> {
        templates.render_file(
            INDEX_FILE,
            INDEX_FILE,
            &IndexContext {
                shared_module: SHARED_MODULE,
                modules: &self.modules,
            },
        )
    }
}
