use std::collections::BTreeSet;

use serde::Serialize;

use super::{
    error::CodegenError,
    naming::{EMPTY_REPLY, EMPTY_REQUEST, SHARED_MODULE},
    schema::{Declaration, InterfaceContext},
    templates::{INTERFACE, INDEX_FILE, TYPES_FILE, Templates},
};

/// Generates `types/index.ts`, the shared module that declares every
/// interface and alias, and re-exports the enums.
///
/// The empty request and reply markers come first; all other
/// declarations follow in name order.
#[derive(Debug)]
pub struct CodegenTypesModule<'a> {
    markers: &'a [Declaration],
    declarations: &'a [Declaration],
    enums: &'a BTreeSet<&'a str>,
}

#[derive(Serialize)]
struct TypesContext<'a> {
    enum_imports: Vec<&'a str>,
    has_enums: bool,
    declarations: Vec<&'a str>,
}

impl<'a> CodegenTypesModule<'a> {
    pub fn new(
        markers: &'a [Declaration],
        declarations: &'a [Declaration],
        enums: &'a BTreeSet<&'a str>,
    ) -> Self {
        Self {
            markers,
            declarations,
            enums,
        }
    }

    #[inline]
    pub fn path(&self) -> String {
        format!("{SHARED_MODULE}/{INDEX_FILE}")
    }

    /// Returns the enums that the declarations refer to, in sorted order.
    pub fn enum_imports(&self) -> Vec<&'a str> {
        self.declarations
            .iter()
            .flat_map(|d| &d.references)
            .filter_map(|name| self.enums.get(name.as_str()).copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn render(&self, templates: &Templates) -> Result<String, CodegenError> {
        let mut declarations: Vec<_> = self.declarations.iter().collect();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        let context = TypesContext {
            enum_imports: self.enum_imports(),
            has_enums: !self.enums.is_empty(),
            declarations: self
                .markers
                .iter()
                .chain(declarations)
                .map(|d| d.text.as_str())
                .collect(),
        };
        templates.render_file(TYPES_FILE, &self.path(), &context)
    }
}

/// Renders the marker interfaces for operations without a request
/// type or a success response type.
pub fn marker_declarations(templates: &Templates) -> Result<Vec<Declaration>, CodegenError> {
    [
        (EMPTY_REQUEST, "The parameters of an operation that doesn't take any."),
        (EMPTY_REPLY, "The response of an operation that doesn't return any content."),
    ]
    .into_iter()
    .map(|(name, doc)| {
        let context = InterfaceContext {
            name,
            doc: vec![doc.to_owned()],
            extends: None,
            properties: vec![],
        };
        Ok(Declaration {
            name: name.to_owned(),
            text: templates.render(INTERFACE, name, &context)?,
            references: BTreeSet::new(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn declaration(name: &str, text: &str, references: &[&str]) -> Declaration {
        Declaration {
            name: name.to_owned(),
            text: text.to_owned(),
            references: references.iter().map(|&r| r.to_owned()).collect(),
        }
    }

    #[test]
    fn test_markers_then_sorted_declarations() {
        let templates = Templates::new().unwrap();
        let markers = marker_declarations(&templates).unwrap();
        let declarations = [
            declaration("Team", "export interface Team {}", &[]),
            declaration("Item", "export interface Item {\n  status?: Status;\n}", &["Status"]),
        ];
        let enums = BTreeSet::from(["Kind", "Status"]);

        let module = CodegenTypesModule::new(&markers, &declarations, &enums);
        assert_eq!(module.path(), "types/index.ts");
        assert_eq!(module.enum_imports(), vec!["Status"]);
        assert_eq!(
            module.render(&templates).unwrap(),
            indoc::indoc! {r#"
                import type { Status } from "./enum";
                export * from "./enum";

                /**
                 * The parameters of an operation that doesn't take any.
                 */
                export interface EmptyRequest {}

                /**
                 * The response of an operation that doesn't return any content.
                 */
                export interface EmptyReply {}

                export interface Item {
                  status?: Status;
                }

                export interface Team {}
            "#}
        );
    }

    #[test]
    fn test_without_enums() {
        let templates = Templates::new().unwrap();
        let declarations = [declaration("Id", "export type Id = number;", &[])];
        let enums = BTreeSet::new();

        let module = CodegenTypesModule::new(&[], &declarations, &enums);
        assert_eq!(
            module.render(&templates).unwrap(),
            "export type Id = number;\n"
        );
    }
}
