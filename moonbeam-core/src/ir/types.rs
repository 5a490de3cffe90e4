//! Language-agnostic intermediate representation types.

use crate::{
    error::IrError,
    parse::{AdditionalProperties, Method, ParameterLocation, Schema, Ty},
};

/// A named component schema, lowered from the document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaDef<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub kind: SchemaKind<'a>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaKind<'a> {
    /// An object with properties, and an optional supertype.
    Object(ObjectDef<'a>),
    /// An array of items.
    Array(PropertyType<'a>),
    /// A bare primitive.
    Primitive(PrimitiveType),
    /// An enumerated set of string literals, sorted and deduplicated.
    Enum(Vec<&'a str>),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectDef<'a> {
    /// The raw reference of the composed supertype: the first `allOf`
    /// member, or the schema's own `$ref`.
    pub supertype: Option<&'a str>,
    /// Properties, sorted by name.
    pub properties: Vec<PropertyDef<'a>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyDef<'a> {
    pub name: &'a str,
    pub ty: PropertyType<'a>,
    pub required: bool,
    pub description: Option<&'a str>,
}

/// The shape of a property or parameter.
///
/// Exactly one shape is chosen when lowering a schema, in this
/// precedence order: reference, composed reference, array,
/// string-keyed map, inline enum, and primitive.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyType<'a> {
    /// A `$ref` to another schema, as written in the document.
    Ref(&'a str),
    /// The first member of an `allOf`, as written in the document.
    Composed(&'a str),
    /// An array. The item is always a [`PropertyType::Ref`] or
    /// a [`PropertyType::Primitive`].
    Array(Box<PropertyType<'a>>),
    /// An object whose `additionalProperties` are strings.
    StringMap,
    /// An inline `enum` that isn't a named schema.
    Enum,
    /// A primitive type.
    Primitive(PrimitiveType),
}

impl<'a> PropertyType<'a> {
    /// Lowers a property schema.
    pub fn from_schema(schema: &'a Schema) -> Self {
        if let Some(r) = schema.reference() {
            return Self::Ref(r);
        }
        if let Some(r) = schema
            .all_of
            .as_deref()
            .and_then(|members| members.first())
            .and_then(Schema::reference)
        {
            return Self::Composed(r);
        }
        if schema.ty() == Some(Ty::Array)
            && let Some(items) = &schema.items
        {
            return Self::Array(Box::new(Self::from_item(items)));
        }
        if schema.ty() == Some(Ty::Object)
            && let Some(AdditionalProperties::Schema(values)) = &schema.additional_properties
            && values.ty() == Some(Ty::String)
        {
            return Self::StringMap;
        }
        if schema.is_enum() {
            return Self::Enum;
        }
        Self::Primitive(schema.ty().into())
    }

    /// Lowers an array item schema. Items don't support composition,
    /// nesting, or maps; those become [`PrimitiveType::Any`].
    pub fn from_item(items: &'a Schema) -> Self {
        match items.reference() {
            Some(r) => Self::Ref(r),
            None => Self::Primitive(items.ty().into()),
        }
    }

    /// Lowers a parameter schema. Parameters only support references
    /// and primitives.
    pub fn from_parameter(schema: Option<&'a Schema>) -> Self {
        match schema {
            Some(schema) => Self::from_item(schema),
            None => Self::Primitive(PrimitiveType::Any),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    /// Anything else: a missing, `null`, `array`, or unknown type.
    Any,
}

impl From<Option<Ty>> for PrimitiveType {
    fn from(ty: Option<Ty>) -> Self {
        match ty {
            Some(Ty::String) => Self::String,
            Some(Ty::Integer) => Self::Integer,
            Some(Ty::Number) => Self::Number,
            Some(Ty::Boolean) => Self::Boolean,
            Some(Ty::Object) => Self::Object,
            Some(Ty::Array | Ty::Null | Ty::Other) | None => Self::Any,
        }
    }
}

/// An HTTP operation with an ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationDef<'a> {
    pub path: &'a str,
    pub method: Method,
    pub id: &'a str,
    pub tags: &'a [String],
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>,
    pub params: Vec<ParameterDef<'a>>,
    pub request: Option<RequestDef<'a>>,
    /// The raw reference of the success response schema.
    pub response: Option<&'a str>,
}

impl<'a> OperationDef<'a> {
    /// Returns the action part of a `<Group>_<Action>` operation ID:
    /// everything after the first underscore.
    pub fn action(&self) -> Result<&'a str, IrError> {
        match self.id.split_once('_') {
            Some((_, action)) if !action.is_empty() => Ok(action),
            _ => Err(IrError::BadOperationId(self.id.to_owned())),
        }
    }

    /// Returns the first declared tag, if any.
    pub fn tag(&self) -> Option<&'a str> {
        self.tags.first().map(String::as_str)
    }

    /// Returns an iterator over the query parameters, in declaration order.
    pub fn query(&self) -> impl Iterator<Item = &ParameterDef<'a>> {
        self.params
            .iter()
            .filter(|param| param.location == ParameterLocation::Query)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterDef<'a> {
    pub name: &'a str,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<&'a str>,
    pub ty: PropertyType<'a>,
}

/// A request body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestDef<'a> {
    /// The raw reference of the chosen content schema, or `None` if
    /// no content entry references a schema.
    pub schema: Option<&'a str>,
}
