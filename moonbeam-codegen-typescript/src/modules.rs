use std::collections::BTreeMap;

use moonbeam_core::codegen::{UniqueNames, UniqueNamesScope};

use super::{naming::reserved_function_names, operation::FunctionUnit};

/// The functions of one module, in emission order.
#[derive(Debug)]
pub struct ModuleUnit<'a> {
    pub name: String,
    pub functions: Vec<FunctionUnit<'a>>,
}

/// Groups functions into modules, and makes their names unique
/// within each module.
///
/// Functions must be added in a deterministic order: the first function
/// to claim a name keeps it, and later ones get numeric suffixes.
#[derive(Debug, Default)]
pub struct ModulePartitioner<'a> {
    unique: UniqueNames,
    modules: BTreeMap<String, (UniqueNamesScope, Vec<FunctionUnit<'a>>)>,
    seq: usize,
}

impl<'a> ModulePartitioner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a function to its module, renaming it if its base name
    /// is already taken in that module, and assigning its
    /// discovery sequence number.
    pub fn add(&mut self, mut function: FunctionUnit<'a>) -> &FunctionUnit<'a> {
        let (scope, functions) = self
            .modules
            .entry(function.module.clone())
            .or_insert_with(|| {
                (
                    self.unique.scope_with_reserved(reserved_function_names()),
                    vec![],
                )
            });

        let name = scope.uniquify(&function.name).into_owned();
        if name != function.name {
            tracing::debug!(
                module = %function.module,
                path = function.path,
                method = %function.method,
                "renamed `{}` to `{name}`",
                function.name,
            );
            function.name = name;
        }
        function.seq = self.seq;
        self.seq += 1;

        functions.push(function);
        &functions[functions.len() - 1]
    }

    /// Returns the modules sorted by name, with their functions sorted
    /// by name, then by discovery order.
    pub fn finish(self) -> Vec<ModuleUnit<'a>> {
        self.modules
            .into_iter()
            .map(|(name, (_, mut functions))| {
                functions.sort_by(|a, b| a.name.cmp(&b.name).then(a.seq.cmp(&b.seq)));
                ModuleUnit { name, functions }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use moonbeam_core::parse::Method;
    use pretty_assertions::assert_eq;

    fn function<'a>(module: &str, name: &str, path: &'a str) -> FunctionUnit<'a> {
        FunctionUnit {
            module: module.to_owned(),
            name: name.to_owned(),
            seq: 0,
            summary: String::new(),
            param_type: "EmptyRequest".to_owned(),
            response_type: "EmptyReply".to_owned(),
            method: Method::Get,
            path,
        }
    }

    fn names<'m>(module: &'m ModuleUnit<'_>) -> Vec<(&'m str, usize)> {
        module
            .functions
            .iter()
            .map(|f| (f.name.as_str(), f.seq))
            .collect()
    }

    #[test]
    fn test_collisions_get_suffixes_in_order() {
        let mut partitioner = ModulePartitioner::new();
        assert_eq!(partitioner.add(function("team", "list", "/a")).name, "list");
        assert_eq!(partitioner.add(function("team", "list", "/b")).name, "list2");
        assert_eq!(partitioner.add(function("team", "list", "/c")).name, "list3");

        let modules = partitioner.finish();
        let [team] = &*modules else {
            panic!("expected single module; got `{modules:?}`");
        };
        assert_eq!(names(team), vec![("list", 0), ("list2", 1), ("list3", 2)]);
        let paths: Vec<_> = team.functions.iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_modules_are_independent() {
        let mut partitioner = ModulePartitioner::new();
        partitioner.add(function("team", "get", "/teams"));
        partitioner.add(function("user", "get", "/users"));

        let modules = partitioner.finish();
        let summary: Vec<_> = modules
            .iter()
            .map(|m| (m.name.as_str(), names(m)))
            .collect();
        assert_eq!(
            summary,
            vec![("team", vec![("get", 0)]), ("user", vec![("get", 1)])]
        );
    }

    #[test]
    fn test_functions_sorted_by_name_then_sequence() {
        let mut partitioner = ModulePartitioner::new();
        partitioner.add(function("team", "update", "/a"));
        partitioner.add(function("team", "create", "/b"));
        partitioner.add(function("team", "create", "/c"));

        let modules = partitioner.finish();
        assert_eq!(
            names(&modules[0]),
            vec![("create", 1), ("create2", 2), ("update", 0)]
        );
    }

    #[test]
    fn test_reserved_names() {
        let mut partitioner = ModulePartitioner::new();
        assert_eq!(
            partitioner.add(function("team", "delete", "/a")).name,
            "delete2"
        );
        assert_eq!(
            partitioner.add(function("team", "request", "/b")).name,
            "request2"
        );
        assert_eq!(
            partitioner.add(function("team", "delete", "/c")).name,
            "delete3"
        );
    }
}
