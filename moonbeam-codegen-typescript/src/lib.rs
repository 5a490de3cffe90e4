//! Generates a TypeScript client from a lowered OpenAPI document.
//!
//! The output has one shared `types` module with every interface,
//! alias, and enum, one module per operation tag with an `async`
//! function per operation, and a root `index.ts` that re-exports
//! them all.

mod config;
mod enum_;
mod error;
mod imports;
mod index;
mod modules;
mod naming;
mod operation;
mod primitive;
mod project;
mod ref_;
mod request;
mod schema;
mod templates;
mod types_module;

#[cfg(test)]
mod tests;

pub use config::*;
pub use enum_::*;
pub use error::*;
pub use imports::*;
pub use index::*;
pub use modules::*;
pub use naming::*;
pub use operation::*;
pub use project::*;
pub use request::*;
pub use schema::*;
pub use templates::Templates;
pub use types_module::*;
