use std::collections::BTreeSet;

use moonbeam_core::ir::{EnumSet, ObjectDef, PropertyType, SchemaDef, SchemaKind, resolve_ref};
use serde::Serialize;

use super::{
    error::CodegenError,
    naming::property_key,
    primitive::ts_primitive,
    ref_::{referenced_type, ts_type, ts_type_ref},
    templates::{ALIAS, INTERFACE, Templates, doc_lines},
};

/// A rendered declaration in the shared types module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    /// The declared TypeScript name.
    pub name: String,
    /// The rendered `export interface` or `export type`.
    pub text: String,
    /// The names of other types that this declaration mentions.
    pub references: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InterfaceContext<'a> {
    pub name: &'a str,
    pub doc: Vec<String>,
    pub extends: Option<&'a str>,
    pub properties: Vec<PropertyContext>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PropertyContext {
    pub key: String,
    pub ty: String,
    pub required: bool,
    pub doc: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AliasContext<'a> {
    name: &'a str,
    doc: Vec<String>,
    target: String,
}

/// Generates the TypeScript declaration for a named schema.
///
/// Objects become interfaces; arrays and primitives become type aliases.
/// Enums aren't declared here: they're collected into `types/enum.ts`
/// by [`CodegenEnumFile`](crate::CodegenEnumFile).
#[derive(Clone, Copy, Debug)]
pub struct CodegenSchemaType<'a> {
    def: &'a SchemaDef<'a>,
    enums: &'a EnumSet<'a>,
}

impl<'a> CodegenSchemaType<'a> {
    pub fn new(def: &'a SchemaDef<'a>, enums: &'a EnumSet<'a>) -> Self {
        Self { def, enums }
    }

    /// Returns the declared TypeScript name: the schema name without its
    /// namespace prefix.
    pub fn type_name(&self) -> &'a str {
        resolve_ref(self.def.name)
    }

    /// Renders the declaration, or returns `None` for enums.
    pub fn render(&self, templates: &Templates) -> Result<Option<Declaration>, CodegenError> {
        let name = self.type_name();
        let doc = doc_lines(self.def.description);
        let (text, references) = match &self.def.kind {
            SchemaKind::Enum(_) => return Ok(None),
            SchemaKind::Object(object) => {
                let (context, references) = self.interface(name, doc, object);
                (templates.render(INTERFACE, name, &context)?, references)
            }
            SchemaKind::Array(item) => {
                let ty = PropertyType::Array(Box::new(item.clone()));
                let context = AliasContext {
                    name,
                    doc,
                    target: ts_type(&ty, self.enums),
                };
                let references = referenced_type(&ty, self.enums)
                    .map(str::to_owned)
                    .into_iter()
                    .collect();
                (templates.render(ALIAS, name, &context)?, references)
            }
            &SchemaKind::Primitive(ty) => {
                let context = AliasContext {
                    name,
                    doc,
                    target: ts_primitive(ty).to_owned(),
                };
                (templates.render(ALIAS, name, &context)?, BTreeSet::new())
            }
        };
        Ok(Some(Declaration {
            name: name.to_owned(),
            text,
            references,
        }))
    }

    fn interface(
        &self,
        name: &'a str,
        doc: Vec<String>,
        object: &ObjectDef<'a>,
    ) -> (InterfaceContext<'a>, BTreeSet<String>) {
        let mut references = BTreeSet::new();

        // A schema that only refers to itself has no supertype.
        let extends = object
            .supertype
            .map(|r| ts_type_ref(r, self.enums))
            .filter(|&supertype| supertype != name);
        references.extend(extends.map(str::to_owned));

        let properties = object
            .properties
            .iter()
            .map(|property| {
                references.extend(referenced_type(&property.ty, self.enums).map(str::to_owned));
                PropertyContext {
                    key: property_key(property.name),
                    ty: ts_type(&property.ty, self.enums),
                    required: property.required,
                    doc: doc_lines(property.description),
                }
            })
            .collect();

        let context = InterfaceContext {
            name,
            doc,
            extends,
            properties,
        };
        (context, references)
    }
}
