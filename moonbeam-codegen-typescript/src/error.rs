/// Errors raised while generating TypeScript code.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The embedded templates failed to compile.
    #[error("failed to load templates")]
    Templates(#[source] tera::Error),
    /// A single declaration, function, or file failed to render.
    #[error("failed to render `{name}`")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}
