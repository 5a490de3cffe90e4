use std::collections::BTreeSet;

use itertools::Itertools;
use moonbeam_core::{
    error::IrError,
    ir::{EnumSet, OperationDef},
    parse::Method,
};
use serde::Serialize;

use super::{
    config::CodegenConfig,
    error::CodegenError,
    naming::{EMPTY_REPLY, EMPTY_REQUEST, function_name, module_name},
    ref_::ts_type_ref,
    request::AdHocRequest,
    templates::{FUNCTION, Templates, doc_lines},
};

/// A wrapper function for one operation.
///
/// The [`name`](Self::name) starts as the base name derived from the
/// operation ID; the [`ModulePartitioner`](crate::ModulePartitioner)
/// replaces it with a name that's unique within the module, and assigns
/// the discovery sequence number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionUnit<'a> {
    pub module: String,
    pub name: String,
    pub seq: usize,
    pub summary: String,
    pub param_type: String,
    pub response_type: String,
    pub method: Method,
    pub path: &'a str,
}

impl FunctionUnit<'_> {
    /// Returns the shared type names that this function refers to:
    /// its parameter and response types.
    pub fn referenced_types(&self) -> BTreeSet<&str> {
        BTreeSet::from([self.param_type.as_str(), self.response_type.as_str()])
    }

    /// Renders the function as an `export async function`.
    pub fn render(&self, templates: &Templates) -> Result<String, CodegenError> {
        let context = FunctionContext {
            name: &self.name,
            doc: doc_lines(Some(&self.summary)),
            param_type: &self.param_type,
            response_type: &self.response_type,
            method: self.method.as_str(),
            path: self.path,
        };
        templates.render(FUNCTION, &self.name, &context)
    }
}

#[derive(Debug, Serialize)]
struct FunctionContext<'a> {
    name: &'a str,
    doc: Vec<String>,
    param_type: &'a str,
    response_type: &'a str,
    method: &'a str,
    path: &'a str,
}

/// Synthesizes the wrapper function for an operation.
#[derive(Clone, Copy, Debug)]
pub struct CodegenOperation<'a> {
    op: &'a OperationDef<'a>,
    enums: &'a EnumSet<'a>,
    config: &'a CodegenConfig,
}

/// The result of synthesizing one operation.
#[derive(Debug)]
pub struct SynthesizedOperation<'a> {
    pub function: FunctionUnit<'a>,
    /// The request type to declare for this operation, if it takes
    /// query parameters instead of a body.
    pub request: Option<AdHocRequest<'a>>,
}

impl<'a> CodegenOperation<'a> {
    pub fn new(
        op: &'a OperationDef<'a>,
        enums: &'a EnumSet<'a>,
        config: &'a CodegenConfig,
    ) -> Self {
        Self { op, enums, config }
    }

    /// Computes the module, base function name, parameter and response
    /// types, and summary of the operation.
    ///
    /// Fails if the operation ID doesn't name an action, or if the
    /// action has no characters left to name a function.
    pub fn synthesize(&self) -> Result<SynthesizedOperation<'a>, IrError> {
        let op = self.op;
        let action = op.action()?;
        let name = function_name(action);
        if name.is_empty() {
            return Err(IrError::BadOperationId(op.id.to_owned()));
        }

        let (param_type, request) = match op.request {
            Some(body) => {
                let param_type = body
                    .schema
                    .map_or(EMPTY_REQUEST, |r| ts_type_ref(r, self.enums));
                (param_type.to_owned(), None)
            }
            None => match AdHocRequest::new(op, action, self.enums) {
                Some(request) => (request.name().to_owned(), Some(request)),
                None => (EMPTY_REQUEST.to_owned(), None),
            },
        };

        let response_type = op
            .response
            .map_or(EMPTY_REPLY, |r| ts_type_ref(r, self.enums))
            .to_owned();

        let summary = match op.summary.filter(|s| !s.is_empty()) {
            Some(summary) => summary.to_owned(),
            None if op.tags.is_empty() => action.to_owned(),
            None => format!("{action} {}", op.tags.iter().join(", ")),
        };

        let function = FunctionUnit {
            module: module_name(op.tag(), &self.config.default_module),
            name,
            seq: 0,
            summary,
            param_type,
            response_type,
            method: op.method,
            path: op.path,
        };
        Ok(SynthesizedOperation { function, request })
    }
}
