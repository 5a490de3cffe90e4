use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::SerdeError;

/// An OpenAPI document.
///
/// Only the parts that Moonbeam generates code from are modeled;
/// everything else in the document is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub openapi: Option<String>,
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub components: Option<Components>,
}

impl Document {
    /// Parse an OpenAPI document from a YAML or JSON string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SerdeError> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml);
        let result = serde_path_to_error::deserialize(deserializer)?;
        Ok(result)
    }

    /// Returns the named component schemas, or an empty map if the
    /// document doesn't have any.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.components
            .iter()
            .flat_map(|components| &components.schemas)
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: String,
}

/// Operation definitions for a single path.
#[derive(Debug, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,
    #[serde(default)]
    pub post: Option<Operation>,
    #[serde(default)]
    pub put: Option<Operation>,
    #[serde(default)]
    pub delete: Option<Operation>,
    #[serde(default)]
    pub patch: Option<Operation>,
}

/// An HTTP method.
///
/// The declaration order is the processing precedence for operations
/// that share a path: earlier methods claim function names first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Method {
    Post,
    Get,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Returns the upper-case method name, as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PathItem {
    /// Returns an iterator over the operations for each HTTP method,
    /// in method precedence order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        [
            (Method::Post, self.post.as_ref()),
            (Method::Get, self.get.as_ref()),
            (Method::Put, self.put.as_ref()),
            (Method::Delete, self.delete.as_ref()),
            (Method::Patch, self.patch.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|o| (method, o)))
    }
}

/// An HTTP operation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A path, query, header, or cookie parameter.
#[derive(Clone, Debug, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
    #[serde(other)]
    Other,
}

/// Request body definition.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Response definition.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type content.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Ty {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}

/// An OpenAPI schema definition.
///
/// The same shape describes named component schemas, object properties,
/// array items, and parameter schemas.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_type")]
    pub ty: Vec<Ty>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    // Object properties.
    #[serde(default)]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub additional_properties: Option<AdditionalProperties>,

    // Array items.
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    // Enum variants.
    #[serde(rename = "enum", default)]
    pub variants: Option<Vec<serde_json::Value>>,

    // Composition.
    #[serde(default)]
    pub all_of: Option<Vec<Schema>>,
}

impl Schema {
    /// Returns the first non-`null` type, if any.
    ///
    /// OpenAPI 3.1 allows `type` to be an array, like `[string, "null"]`;
    /// Moonbeam only looks at the first concrete type.
    pub fn ty(&self) -> Option<Ty> {
        self.ty.iter().copied().find(|&ty| ty != Ty::Null)
    }

    /// Returns the non-empty `$ref` of this schema, if any.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref().filter(|r| !r.is_empty())
    }

    /// Returns `true` if this schema has a non-empty `enum` list.
    pub fn is_enum(&self) -> bool {
        self.variants.as_ref().is_some_and(|v| !v.is_empty())
    }
}

fn deserialize_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Ty>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TypesOr {
        /// An OpenAPI 3.1-style `type` array.
        Types(Vec<Ty>),
        /// A single `type`.
        Type(Ty),
        /// An explicit `type: null`.
        Null(()),
    }
    Ok(match TypesOr::deserialize(deserializer)? {
        TypesOr::Types(types) => types,
        TypesOr::Type(ty) => vec![ty],
        TypesOr::Null(()) => vec![],
    })
}
