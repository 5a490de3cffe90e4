use serde::Serialize;
use tera::{Context, Tera};

use super::error::CodegenError;

pub const INTERFACE: &str = "interface.ts";
pub const ALIAS: &str = "alias.ts";
pub const FUNCTION: &str = "function.ts";
pub const ENUM_FILE: &str = "enum.ts";
pub const MODULE_FILE: &str = "module.ts";
pub const TYPES_FILE: &str = "types.ts";
pub const INDEX_FILE: &str = "index.ts";

/// The `fetch`-based helper that generated functions call.
pub const RUNTIME: &str = include_str!("../runtime/request.ts");

/// The compiled TypeScript templates.
///
/// Template names end in `.ts`, so Tera never HTML-escapes their output.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, CodegenError> {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            (INTERFACE, include_str!("../templates/interface.ts.tera")),
            (ALIAS, include_str!("../templates/alias.ts.tera")),
            (FUNCTION, include_str!("../templates/function.ts.tera")),
            (ENUM_FILE, include_str!("../templates/enum.ts.tera")),
            (MODULE_FILE, include_str!("../templates/module.ts.tera")),
            (TYPES_FILE, include_str!("../templates/types.ts.tera")),
            (INDEX_FILE, include_str!("../templates/index.ts.tera")),
        ])
        .map_err(CodegenError::Templates)?;
        Ok(Self { tera })
    }

    /// Renders a fragment, without leading or trailing whitespace.
    ///
    /// `unit` names the declaration, function, or file being rendered,
    /// for error reporting.
    pub fn render(
        &self,
        template: &str,
        unit: &str,
        data: &impl Serialize,
    ) -> Result<String, CodegenError> {
        let render = || {
            let context = Context::from_serialize(data)?;
            self.tera.render(template, &context)
        };
        match render() {
            Ok(text) => Ok(text.trim().to_owned()),
            Err(source) => Err(CodegenError::Render {
                name: unit.to_owned(),
                source,
            }),
        }
    }

    /// Renders a whole file, ending with exactly one newline.
    pub fn render_file(
        &self,
        template: &str,
        path: &str,
        data: &impl Serialize,
    ) -> Result<String, CodegenError> {
        let text = self.render(template, path, data)?;
        Ok(format!("{text}\n"))
    }
}

/// Splits documentation text into lines for a JSDoc comment,
/// escaping sequences that would end the comment early.
pub fn doc_lines(text: Option<&str>) -> Vec<String> {
    text.map(str::trim)
        .into_iter()
        .flat_map(str::lines)
        .map(|line| line.trim_end().replace("*/", "*\\/"))
        .collect()
}
