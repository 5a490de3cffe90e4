use moonbeam_core::ir::{SchemaDef, SchemaKind};
use serde::Serialize;

use super::{
    error::CodegenError,
    naming::{SHARED_MODULE, is_identifier},
    templates::{ENUM_FILE, Templates, doc_lines},
};

/// Generates `types/enum.ts`, with a string literal union type for
/// every enum schema.
///
/// Enums keep their full schema names, because that's how
/// references to them resolve. An enum without any string values
/// becomes a `string` alias.
#[derive(Debug)]
pub struct CodegenEnumFile<'a> {
    enums: Vec<EnumContext<'a>>,
}

#[derive(Debug, Serialize)]
struct EnumContext<'a> {
    name: &'a str,
    doc: Vec<String>,
    values: &'a [&'a str],
}

#[derive(Serialize)]
struct EnumFileContext<'a> {
    enums: &'a [EnumContext<'a>],
}

impl<'a> CodegenEnumFile<'a> {
    /// Collects the enums from schemas, in name order.
    pub fn new(schemas: &'a [SchemaDef<'a>]) -> Self {
        let mut enums: Vec<_> = schemas
            .iter()
            .filter_map(|def| match &def.kind {
                SchemaKind::Enum(values) => Some(EnumContext {
                    name: def.name,
                    doc: doc_lines(def.description),
                    values,
                }),
                _ => None,
            })
            .collect();
        enums.sort_by_key(|e| e.name);
        Self { enums }
    }

    /// Returns the enum names, in emission order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.enums.iter().map(|e| e.name)
    }

    /// Returns the enum names that aren't valid TypeScript identifiers.
    /// These are emitted as-is, and won't compile.
    pub fn invalid_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names().filter(|name| !is_identifier(name))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    #[inline]
    pub fn path(&self) -> String {
        format!("{SHARED_MODULE}/{ENUM_FILE}")
    }

    pub fn render(&self, templates: &Templates) -> Result<String, CodegenError> {
        templates.render_file(
            ENUM_FILE,
            &self.path(),
            &EnumFileContext {
                enums: &self.enums,
            },
        )
    }
}
