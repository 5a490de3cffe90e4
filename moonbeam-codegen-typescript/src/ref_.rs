use moonbeam_core::ir::{EnumSet, PropertyType, clean_ref, strip_namespace};

use super::primitive::ts_primitive;

/// The TypeScript type of a string-keyed map of strings.
const STRING_MAP: &str = "{ [key: string]: string }";

/// Resolves a schema reference to a TypeScript type name.
///
/// References to enums keep their full name, including any namespace
/// prefix, because that's the name the enum is declared with. All other
/// references drop the namespace prefix.
pub fn ts_type_ref<'a>(reference: &'a str, enums: &EnumSet<'_>) -> &'a str {
    let name = clean_ref(reference);
    if enums.contains(name) {
        name
    } else {
        strip_namespace(name)
    }
}

/// Resolves the shape of a property or parameter to a TypeScript
/// type expression.
pub fn ts_type(ty: &PropertyType<'_>, enums: &EnumSet<'_>) -> String {
    match ty {
        PropertyType::Ref(r) | PropertyType::Composed(r) => ts_type_ref(r, enums).to_owned(),
        PropertyType::Array(item) => match &**item {
            PropertyType::Ref(r) => format!("{}[]", ts_type_ref(r, enums)),
            &PropertyType::Primitive(ty) => format!("{}[]", ts_primitive(ty)),
            _ => "any[]".to_owned(),
        },
        PropertyType::StringMap => STRING_MAP.to_owned(),
        PropertyType::Enum => "string".to_owned(),
        &PropertyType::Primitive(ty) => ts_primitive(ty).to_owned(),
    }
}

/// Returns the name of the schema that a property type refers to,
/// if any.
pub fn referenced_type<'a>(ty: &PropertyType<'a>, enums: &EnumSet<'_>) -> Option<&'a str> {
    match ty {
        PropertyType::Ref(r) | PropertyType::Composed(r) => Some(ts_type_ref(*r, enums)),
        PropertyType::Array(item) => referenced_type(item, enums),
        _ => None,
    }
}
