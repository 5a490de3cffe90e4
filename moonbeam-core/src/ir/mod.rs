mod refs;
mod spec;
mod types;

#[cfg(test)]
mod tests;

pub use refs::{EnumSet, clean_ref, resolve_ref, strip_namespace};
pub use spec::{IrSpec, SkippedOperation};
pub use types::*;
