use moonbeam_core::ir::PrimitiveType;

/// Maps a primitive IR type to a TypeScript type.
pub fn ts_primitive(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::String => "string",
        PrimitiveType::Integer | PrimitiveType::Number => "number",
        PrimitiveType::Boolean => "boolean",
        PrimitiveType::Object => "object",
        PrimitiveType::Any => "any",
    }
}
