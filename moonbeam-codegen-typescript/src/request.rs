use std::collections::BTreeSet;

use moonbeam_core::ir::{EnumSet, OperationDef};

use super::{
    error::CodegenError,
    naming::{property_key, request_type_name},
    ref_::{referenced_type, ts_type},
    schema::{Declaration, InterfaceContext, PropertyContext},
    templates::{INTERFACE, Templates, doc_lines},
};

/// A request type synthesized from the query parameters of an operation
/// without a request body.
#[derive(Debug)]
pub struct AdHocRequest<'a> {
    name: String,
    op: &'a OperationDef<'a>,
    enums: &'a EnumSet<'a>,
}

impl<'a> AdHocRequest<'a> {
    /// Returns the request type for an operation with the given action,
    /// or `None` if the operation doesn't have any query parameters.
    pub fn new(op: &'a OperationDef<'a>, action: &str, enums: &'a EnumSet<'a>) -> Option<Self> {
        op.query().next()?;
        Some(Self {
            name: request_type_name(action),
            op,
            enums,
        })
    }

    /// Returns the name of the request type: `<Action>Request`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the request type as an interface with one property
    /// per query parameter.
    pub fn render(&self, templates: &Templates) -> Result<Declaration, CodegenError> {
        let mut references = BTreeSet::new();
        let properties = self
            .op
            .query()
            .map(|param| {
                references.extend(referenced_type(&param.ty, self.enums).map(str::to_owned));
                PropertyContext {
                    key: property_key(&param.name.replace('.', "_")),
                    ty: ts_type(&param.ty, self.enums),
                    required: param.required,
                    doc: doc_lines(param.description),
                }
            })
            .collect();
        let context = InterfaceContext {
            name: &self.name,
            doc: vec![format!("Query parameters of `{}`.", self.op.id)],
            extends: None,
            properties,
        };
        Ok(Declaration {
            name: self.name.clone(),
            text: templates.render(INTERFACE, &self.name, &context)?,
            references,
        })
    }
}
