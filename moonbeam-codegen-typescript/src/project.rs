use std::{
    collections::{BTreeSet, HashSet},
    error::Error,
    path::Path,
};

use moonbeam_core::{
    codegen::{Code, write_to_disk},
    ir::IrSpec,
};
use serde::Serialize;

use super::{
    config::CodegenConfig,
    enum_::CodegenEnumFile,
    error::CodegenError,
    imports::resolve_imports,
    index::CodegenIndex,
    modules::{ModulePartitioner, ModuleUnit},
    naming::{REQUEST_HELPER, SHARED_MODULE},
    operation::{CodegenOperation, SynthesizedOperation},
    schema::{CodegenSchemaType, Declaration},
    templates::{INDEX_FILE, MODULE_FILE, RUNTIME, Templates},
    types_module::{CodegenTypesModule, marker_declarations},
};

/// A generated TypeScript file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TsCode {
    path: String,
    content: String,
}

impl TsCode {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Code for TsCode {
    fn path(&self) -> &str {
        &self.path
    }

    fn into_string(self) -> miette::Result<String> {
        Ok(self.content)
    }
}

/// Counts of what a run generated, and what it left out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodegenSummary {
    /// Interfaces and aliases in the shared module, including
    /// ad-hoc request types and markers.
    pub declarations: usize,
    pub enums: usize,
    pub modules: usize,
    pub functions: usize,
    /// Operations without a usable operation ID.
    pub skipped: usize,
    /// Declarations, functions, and files that failed to render.
    pub failed: usize,
}

/// Counts of files written to disk.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WriteSummary {
    pub written: usize,
    pub failed: usize,
}

#[derive(Serialize)]
struct ModuleContext<'a> {
    shared_module: &'a str,
    request_helper: &'a str,
    imports: Vec<&'a str>,
    functions: &'a [String],
}

/// Generates every file of a TypeScript client from a lowered document.
///
/// Generation never stops at the first failure: a declaration or
/// function that fails to render is logged and left out, and the rest
/// of the project is still generated.
#[derive(Debug)]
pub struct CodegenProject {
    files: Vec<TsCode>,
    summary: CodegenSummary,
}

impl CodegenProject {
    /// Generates the project. Fails only if the templates themselves
    /// can't be loaded.
    pub fn new(spec: &IrSpec<'_>, config: &CodegenConfig) -> Result<Self, CodegenError> {
        let templates = Templates::new()?;
        let mut builder = ProjectBuilder {
            templates: &templates,
            files: vec![],
            summary: CodegenSummary {
                skipped: spec.skipped.len(),
                ..Default::default()
            },
        };

        let enums = CodegenEnumFile::new(&spec.schemas);
        for name in enums.invalid_names() {
            tracing::warn!(schema = name, "enum `{name}` isn't a valid TypeScript type name");
        }
        let enum_names: BTreeSet<_> = enums.names().collect();
        builder.summary.enums = enum_names.len();

        let markers = marker_declarations(&templates)?;
        let mut declared: BTreeSet<String> = markers
            .iter()
            .map(|marker| marker.name.clone())
            .chain(enum_names.iter().map(|&name| name.to_owned()))
            .collect();
        let mut declarations = builder.schema_declarations(spec, &mut declared);

        let mut partitioner = ModulePartitioner::new();
        for op in &spec.operations {
            let SynthesizedOperation { function, request } =
                match CodegenOperation::new(op, &spec.enums, config).synthesize() {
                    Ok(synthesized) => synthesized,
                    Err(reason) => {
                        tracing::warn!(
                            path = op.path,
                            method = %op.method,
                            "skipping operation: {reason}"
                        );
                        builder.summary.skipped += 1;
                        continue;
                    }
                };
            if let Some(request) = request {
                if declared.contains(request.name()) {
                    tracing::warn!(
                        operation = op.id,
                        "`{}` is already declared; not declaring query parameters",
                        request.name(),
                    );
                } else {
                    match request.render(&templates) {
                        Ok(declaration) => {
                            declared.insert(declaration.name.clone());
                            declarations.push(declaration);
                        }
                        Err(err) => builder.failed(op.id, &err),
                    }
                }
            }
            partitioner.add(function);
        }

        let shared: HashSet<&str> = declared.iter().map(String::as_str).collect();
        let modules = partitioner.finish();
        let emitted: Vec<_> = modules
            .iter()
            .filter(|module| builder.module(module, &shared))
            .map(|module| module.name.as_str())
            .collect();

        builder.summary.declarations = markers.len() + declarations.len();
        let types = CodegenTypesModule::new(&markers, &declarations, &enum_names);
        builder.file(types.path(), types.render(&templates));
        if !enums.is_empty() {
            builder.file(enums.path(), enums.render(&templates));
        }
        if config.runtime {
            builder
                .files
                .push(TsCode::new(format!("{SHARED_MODULE}/request.ts"), RUNTIME));
        }
        let index = CodegenIndex::new(emitted);
        builder.file(INDEX_FILE.to_owned(), index.render(&templates));

        let ProjectBuilder { files, summary, .. } = builder;
        Ok(Self { files, summary })
    }

    /// Returns the generated files, in generation order.
    #[inline]
    pub fn files(&self) -> &[TsCode] {
        &self.files
    }

    /// Returns the generated file at `path`, if any.
    pub fn file(&self, path: &str) -> Option<&TsCode> {
        self.files.iter().find(|file| file.path == path)
    }

    #[inline]
    pub fn summary(&self) -> CodegenSummary {
        self.summary
    }

    /// Writes every file under `output`. A file that fails to write is
    /// logged, and doesn't stop the others from being written.
    pub fn write_to_disk(&self, output: &Path) -> WriteSummary {
        let mut summary = WriteSummary::default();
        for file in &self.files {
            match write_to_disk(output, file.clone()) {
                Ok(()) => summary.written += 1,
                Err(err) => {
                    tracing::error!(path = %file.path, "{err:?}");
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

struct ProjectBuilder<'t> {
    templates: &'t Templates,
    files: Vec<TsCode>,
    summary: CodegenSummary,
}

impl ProjectBuilder<'_> {
    /// Renders the declarations for all non-enum schemas. The first
    /// schema to claim a name wins.
    fn schema_declarations(
        &mut self,
        spec: &IrSpec<'_>,
        declared: &mut BTreeSet<String>,
    ) -> Vec<Declaration> {
        let mut declarations = vec![];
        for def in &spec.schemas {
            match CodegenSchemaType::new(def, &spec.enums).render(self.templates) {
                Ok(Some(declaration)) => {
                    if declared.insert(declaration.name.clone()) {
                        declarations.push(declaration);
                    } else {
                        tracing::warn!(
                            schema = def.name,
                            "skipping `{}`: `{}` is already declared",
                            def.name,
                            declaration.name,
                        );
                    }
                }
                Ok(None) => {}
                Err(err) => self.failed(def.name, &err),
            }
        }
        declarations
    }

    /// Renders a function module, and its imports from the
    /// shared module. Returns `false` if none of its functions rendered.
    fn module(&mut self, module: &ModuleUnit<'_>, shared: &HashSet<&str>) -> bool {
        let mut functions = Vec::with_capacity(module.functions.len());
        let mut expected = BTreeSet::new();
        for function in &module.functions {
            match function.render(self.templates) {
                Ok(text) => {
                    functions.push(text);
                    expected.extend(
                        function
                            .referenced_types()
                            .into_iter()
                            .filter(|name| shared.contains(name)),
                    );
                }
                Err(err) => self.failed(&function.name, &err),
            }
        }
        if functions.is_empty() {
            return false;
        }
        self.summary.functions += functions.len();
        self.summary.modules += 1;

        let imports = resolve_imports(functions.iter().map(String::as_str), shared);
        if !imports.iter().copied().eq(expected.iter().copied()) {
            tracing::warn!(
                module = %module.name,
                discovered = ?imports,
                expected = ?expected,
                "imports don't match the function signatures",
            );
        }

        let context = ModuleContext {
            shared_module: SHARED_MODULE,
            request_helper: REQUEST_HELPER,
            imports,
            functions: &functions,
        };
        let path = format!("{}/{INDEX_FILE}", module.name);
        let text = self.templates.render_file(MODULE_FILE, &path, &context);
        self.file(path, text)
    }

    /// Adds a rendered file, or logs its render failure. Returns `true`
    /// if the file was added.
    fn file(&mut self, path: String, text: Result<String, CodegenError>) -> bool {
        match text {
            Ok(content) => {
                self.files.push(TsCode::new(path, content));
                true
            }
            Err(err) => {
                self.failed(&path, &err);
                false
            }
        }
    }

    fn failed(&mut self, unit: &str, err: &CodegenError) {
        tracing::error!(error = err as &(dyn Error + 'static), "skipping `{unit}`");
        self.summary.failed += 1;
    }
}
