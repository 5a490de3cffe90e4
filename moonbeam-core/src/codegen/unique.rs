use std::borrow::Cow;

use rustc_hash::FxHashSet;

/// Deduplicates names within independent scopes.
#[derive(Debug, Default)]
pub struct UniqueNames;

impl UniqueNames {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Creates a new, empty scope.
    ///
    /// A scope produces names that never collide with other names
    /// in the same scope. Names are compared exactly: `list` and `List`
    /// are distinct.
    #[inline]
    pub fn scope(&self) -> UniqueNamesScope {
        UniqueNamesScope::default()
    }

    /// Creates a new scope that reserves the given names.
    ///
    /// # Examples
    ///
    /// ```
    /// # use moonbeam_core::codegen::UniqueNames;
    /// let unique = UniqueNames::new();
    /// let mut scope = unique.scope_with_reserved(["delete"]);
    /// assert_eq!(scope.uniquify("delete"), "delete2");
    /// assert_eq!(scope.uniquify("delete"), "delete3");
    /// ```
    #[inline]
    pub fn scope_with_reserved<S: AsRef<str>>(
        &self,
        reserved: impl IntoIterator<Item = S>,
    ) -> UniqueNamesScope {
        UniqueNamesScope {
            space: reserved
                .into_iter()
                .map(|name| name.as_ref().to_owned())
                .collect(),
        }
    }
}

/// A scope for unique names.
#[derive(Debug, Default)]
pub struct UniqueNamesScope {
    space: FxHashSet<String>,
}

impl UniqueNamesScope {
    /// Adds a name to this scope. If the name doesn't exist within this
    /// scope yet, returns the name as-is; otherwise, returns the name with
    /// the smallest numeric suffix, starting at 2, that isn't taken.
    ///
    /// # Examples
    ///
    /// ```
    /// # use moonbeam_core::codegen::UniqueNames;
    /// let unique = UniqueNames::new();
    /// let mut scope = unique.scope();
    /// assert_eq!(scope.uniquify("list"), "list");
    /// assert_eq!(scope.uniquify("list"), "list2");
    /// assert_eq!(scope.uniquify("list"), "list3");
    /// ```
    pub fn uniquify<'b>(&mut self, name: &'b str) -> Cow<'b, str> {
        if self.space.insert(name.to_owned()) {
            return name.into();
        }
        let mut counter = 2usize;
        loop {
            let candidate = format!("{name}{counter}");
            if !self.space.contains(&candidate) {
                self.space.insert(candidate.clone());
                return candidate.into();
            }
            counter += 1;
        }
    }

    /// Returns `true` if this scope has accepted or reserved `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.space.contains(name)
    }
}
