use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    error::IrError,
    parse::{Document, Info, MediaType, Method, Operation, Schema, Ty},
};

use super::{
    refs::EnumSet,
    types::{
        ObjectDef, OperationDef, ParameterDef, PrimitiveType, PropertyDef, PropertyType,
        RequestDef, SchemaDef, SchemaKind,
    },
};

/// The status code of the only response that Moonbeam generates types for.
const SUCCESS_STATUS: &str = "200";

/// A lowered document, with schemas and operations in a stable order.
///
/// Schemas are sorted by name, and operations by path, then by
/// [`Method`] precedence. Every later step depends on this order,
/// so it never relies on the order of the source maps.
#[derive(Debug)]
pub struct IrSpec<'a> {
    pub info: Option<&'a Info>,
    pub enums: EnumSet<'a>,
    pub schemas: Vec<SchemaDef<'a>>,
    pub operations: Vec<OperationDef<'a>>,
    pub skipped: Vec<SkippedOperation<'a>>,
}

/// An operation that was left out of the IR.
#[derive(Debug, Eq, PartialEq)]
pub struct SkippedOperation<'a> {
    pub path: &'a str,
    pub method: Method,
    pub reason: IrError,
}

impl<'a> IrSpec<'a> {
    pub fn from_doc(doc: &'a Document) -> Self {
        // The enum set must be complete before anything else is lowered.
        let enums = EnumSet::from_doc(doc);

        let schemas = doc
            .schemas()
            .sorted_by_key(|&(name, _)| name)
            .map(|(name, schema)| lower_schema(name, schema))
            .collect_vec();

        let mut skipped = vec![];
        let operations = doc
            .paths
            .iter()
            .sorted_by_key(|&(path, _)| path.as_str())
            .flat_map(|(path, item)| {
                item.operations()
                    .map(move |(method, op)| (path.as_str(), method, op))
            })
            .filter_map(|(path, method, op)| match lower_operation(path, method, op) {
                Ok(op) => Some(op),
                Err(reason) => {
                    tracing::warn!(%path, %method, "skipping operation: {reason}");
                    skipped.push(SkippedOperation {
                        path,
                        method,
                        reason,
                    });
                    None
                }
            })
            .collect_vec();

        IrSpec {
            info: doc.info.as_ref(),
            enums,
            schemas,
            operations,
            skipped,
        }
    }
}

fn lower_schema<'a>(name: &'a str, schema: &'a Schema) -> SchemaDef<'a> {
    let kind = if schema.is_enum() {
        let variants = schema
            .variants
            .iter()
            .flatten()
            .filter_map(|value| value.as_str())
            .sorted_unstable()
            .dedup()
            .collect_vec();
        SchemaKind::Enum(variants)
    } else {
        match schema.ty() {
            Some(Ty::Array) => SchemaKind::Array(match &schema.items {
                Some(items) => PropertyType::from_item(items),
                None => PropertyType::Primitive(PrimitiveType::Any),
            }),
            ty @ Some(Ty::String | Ty::Integer | Ty::Number | Ty::Boolean) => {
                SchemaKind::Primitive(ty.into())
            }
            _ => SchemaKind::Object(lower_object(schema)),
        }
    };
    SchemaDef {
        name,
        description: schema.description.as_deref(),
        kind,
    }
}

fn lower_object(schema: &Schema) -> ObjectDef<'_> {
    let supertype = schema.reference().or_else(|| {
        schema
            .all_of
            .as_deref()
            .and_then(|members| members.first())
            .and_then(Schema::reference)
    });
    let properties = schema
        .properties
        .iter()
        .flatten()
        .sorted_by_key(|&(name, _)| name.as_str())
        .map(|(name, property)| PropertyDef {
            name: name.as_str(),
            ty: PropertyType::from_schema(property),
            required: schema.required.iter().any(|r| r == name),
            description: property.description.as_deref(),
        })
        .collect_vec();
    ObjectDef {
        supertype,
        properties,
    }
}

fn lower_operation<'a>(
    path: &'a str,
    method: Method,
    op: &'a Operation,
) -> Result<OperationDef<'a>, IrError> {
    let id = op
        .operation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(IrError::NoOperationId)?;

    let params = op
        .parameters
        .iter()
        .map(|param| ParameterDef {
            name: param.name.as_str(),
            location: param.location,
            required: param.required,
            description: param.description.as_deref(),
            ty: PropertyType::from_parameter(param.schema.as_ref()),
        })
        .collect_vec();

    let request = op.request_body.as_ref().map(|body| RequestDef {
        schema: first_content_ref(&body.content),
    });

    let response = op
        .responses
        .get(SUCCESS_STATUS)
        .and_then(|response| first_content_ref(&response.content));

    Ok(OperationDef {
        path,
        method,
        id,
        tags: &op.tags,
        summary: op.summary.as_deref(),
        description: op.description.as_deref(),
        params,
        request,
        response,
    })
}

/// Returns the schema reference of the first content entry that has one,
/// visiting media types in lexicographic order.
fn first_content_ref(content: &IndexMap<String, MediaType>) -> Option<&str> {
    content
        .iter()
        .sorted_by_key(|&(media_type, _)| media_type.as_str())
        .find_map(|(_, media)| media.schema.as_ref()?.reference())
}
