use std::fmt::Debug;

use moonbeam_core::{codegen::Code, ir::IrSpec, parse::Document};

use crate::{CodegenConfig, CodegenProject};


/// Asserts that an expression matches a pattern, with an optional
/// match guard.
macro_rules! assert_matches {
    ($left:expr, $($pattern:pat_param)|+ $(if $guard:expr)? $(,)?) => {
        match $left {
            $($pattern)|+ $(if $guard)? => {}
            ref left => crate::tests::assert_matches_failed(
                left,
                stringify!($($pattern)|+ $(if $guard)?),
            ),
        }
    };
}

pub(crate) use assert_matches;

#[track_caller]
pub(crate) fn assert_matches_failed(left: impl Debug, right: &str) {
    panic!("expected `{right}`; got `{left:?}`");
}

/// Parses a YAML document, and generates a project with the
/// default options.
pub(crate) fn generate(yaml: &str) -> CodegenProject {
    generate_with(yaml, &CodegenConfig::default())
}

pub(crate) fn generate_with(yaml: &str, config: &CodegenConfig) -> CodegenProject {
    let doc = Document::from_yaml(yaml).unwrap();
    let spec = IrSpec::from_doc(&doc);
    CodegenProject::new(&spec, config).unwrap()
}

/// Returns the contents of a generated file, panicking if it
/// wasn't generated.
#[track_caller]
pub(crate) fn content<'a>(project: &'a CodegenProject, path: &str) -> &'a str {
    match project.file(path) {
        Some(file) => file.content(),
        None => panic!(
            "expected `{path}`; got {:?}",
            project.files().iter().map(|f| f.path()).collect::<Vec<_>>()
        ),
    }
}
