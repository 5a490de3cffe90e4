//! Tests for lowering property shapes.

use pretty_assertions::assert_eq;

use crate::{
    ir::types::{PrimitiveType, PropertyType},
    parse::Schema,
};

fn schema(yaml: &str) -> Schema {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_ref_wins_over_everything() {
    let s = schema(indoc::indoc! {"
        $ref: '#/components/schemas/Pet'
        type: array
        items:
          type: string
        allOf:
          - $ref: '#/components/schemas/Animal'
    "});
    assert_eq!(
        PropertyType::from_schema(&s),
        PropertyType::Ref("#/components/schemas/Pet"),
    );
}

#[test]
fn test_empty_ref_is_ignored() {
    let s = schema(indoc::indoc! {"
        $ref: ''
        type: integer
    "});
    assert_eq!(
        PropertyType::from_schema(&s),
        PropertyType::Primitive(PrimitiveType::Integer),
    );
}

#[test]
fn test_composed_uses_first_all_of_member() {
    let s = schema(indoc::indoc! {"
        allOf:
          - $ref: '#/components/schemas/First'
          - $ref: '#/components/schemas/Second'
    "});
    assert_eq!(
        PropertyType::from_schema(&s),
        PropertyType::Composed("#/components/schemas/First"),
    );
}

#[test]
fn test_composed_without_ref_falls_through() {
    let s = schema(indoc::indoc! {"
        type: string
        allOf:
          - type: object
    "});
    assert_eq!(
        PropertyType::from_schema(&s),
        PropertyType::Primitive(PrimitiveType::String),
    );
}

#[test]
fn test_array_items() {
    let refs = schema(indoc::indoc! {"
        type: array
        items:
          $ref: '#/components/schemas/Pet'
    "});
    assert_eq!(
        PropertyType::from_schema(&refs),
        PropertyType::Array(Box::new(PropertyType::Ref("#/components/schemas/Pet"))),
    );

    let objects = schema(indoc::indoc! {"
        type: array
        items:
          type: object
    "});
    assert_eq!(
        PropertyType::from_schema(&objects),
        PropertyType::Array(Box::new(PropertyType::Primitive(PrimitiveType::Object))),
    );

    // Nested arrays flatten to `any` items.
    let nested = schema(indoc::indoc! {"
        type: array
        items:
          type: array
          items:
            type: string
    "});
    assert_eq!(
        PropertyType::from_schema(&nested),
        PropertyType::Array(Box::new(PropertyType::Primitive(PrimitiveType::Any))),
    );
}

#[test]
fn test_array_without_items_is_any() {
    let s = schema("type: array");
    assert_eq!(
        PropertyType::from_schema(&s),
        PropertyType::Primitive(PrimitiveType::Any),
    );
}

#[test]
fn test_string_map() {
    let s = schema(indoc::indoc! {"
        type: object
        additionalProperties:
          type: string
    "});
    assert_eq!(PropertyType::from_schema(&s), PropertyType::StringMap);

    let other = schema(indoc::indoc! {"
        type: object
        additionalProperties:
          type: integer
    "});
    assert_eq!(
        PropertyType::from_schema(&other),
        PropertyType::Primitive(PrimitiveType::Object),
    );

    let flag = schema(indoc::indoc! {"
        type: object
        additionalProperties: true
    "});
    assert_eq!(
        PropertyType::from_schema(&flag),
        PropertyType::Primitive(PrimitiveType::Object),
    );
}

#[test]
fn test_inline_enum() {
    let s = schema(indoc::indoc! {"
        type: integer
        enum: [1, 2, 3]
    "});
    assert_eq!(PropertyType::from_schema(&s), PropertyType::Enum);
}

#[test]
fn test_primitives() {
    let cases = [
        ("type: string", PrimitiveType::String),
        ("type: integer", PrimitiveType::Integer),
        ("type: number", PrimitiveType::Number),
        ("type: boolean", PrimitiveType::Boolean),
        ("type: object", PrimitiveType::Object),
        ("type: 'null'", PrimitiveType::Any),
        ("type: ['null', string]", PrimitiveType::String),
        ("type: uuid", PrimitiveType::Any),
        ("description: untyped", PrimitiveType::Any),
    ];
    for (yaml, expected) in cases {
        assert_eq!(
            PropertyType::from_schema(&schema(yaml)),
            PropertyType::Primitive(expected),
            "{yaml}",
        );
    }
}

#[test]
fn test_parameter_without_schema_is_any() {
    assert_eq!(
        PropertyType::from_parameter(None),
        PropertyType::Primitive(PrimitiveType::Any),
    );
}
