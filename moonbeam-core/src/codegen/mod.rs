use std::path::{Component, Path};

use miette::{Context, IntoDiagnostic};

mod unique;

pub use unique::{UniqueNames, UniqueNamesScope};

/// Writes a generated file under `output`, creating any missing
/// parent directories.
///
/// Fails without writing anything if the file's path isn't a plain
/// relative path: absolute paths and `..` would land outside `output`.
pub fn write_to_disk(output: &Path, code: impl IntoCode) -> miette::Result<()> {
    let code = code.into_code();
    let relative = Path::new(code.path());
    let contained = relative.components().next().is_some()
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if !contained {
        miette::bail!(
            "Refusing to write `{}` outside the output directory",
            relative.display()
        );
    }
    let path = output.join(relative);
    let string = code.into_string()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .into_diagnostic()
            .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
    }
    std::fs::write(&path, string)
        .into_diagnostic()
        .with_context(|| format!("Failed to write `{}`", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// A generated file, with a path relative to the output directory.
pub trait Code {
    fn path(&self) -> &str;
    fn into_string(self) -> miette::Result<String>;
}

impl<P: AsRef<str>> Code for (P, String) {
    fn path(&self) -> &str {
        self.0.as_ref()
    }

    fn into_string(self) -> miette::Result<String> {
        Ok(self.1)
    }
}

pub trait IntoCode {
    type Code: Code;

    fn into_code(self) -> Self::Code;
}

impl<T: Code> IntoCode for T {
    type Code = T;

    fn into_code(self) -> Self::Code {
        self
    }
}
