use std::collections::BTreeSet;

use crate::parse::Document;

/// Returns the terminal segment of a reference, after the last `/`.
///
/// # Examples
///
/// ```
/// # use moonbeam_core::ir::clean_ref;
/// assert_eq!(clean_ref("#/components/schemas/api.Pet"), "api.Pet");
/// assert_eq!(clean_ref("Pet"), "Pet");
/// ```
pub fn clean_ref(reference: &str) -> &str {
    reference
        .rsplit_once('/')
        .map_or(reference, |(_, name)| name)
}

/// Strips a namespace prefix from a name, returning the part after
/// the last `.`.
///
/// # Examples
///
/// ```
/// # use moonbeam_core::ir::strip_namespace;
/// assert_eq!(strip_namespace("api.v1.Pet"), "Pet");
/// assert_eq!(strip_namespace("Pet"), "Pet");
/// ```
pub fn strip_namespace(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, name)| name)
}

/// Resolves a reference to a bare type name, stripping both the
/// path and any namespace prefix.
pub fn resolve_ref(reference: &str) -> &str {
    strip_namespace(clean_ref(reference))
}

/// The names of all schemas with a non-empty `enum` list.
///
/// An [`EnumSet`] must be complete before any property type is
/// resolved, because a reference to an enum keeps its full name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EnumSet<'a>(BTreeSet<&'a str>);

impl<'a> EnumSet<'a> {
    /// Scans all component schemas in the document.
    pub fn from_doc(doc: &'a Document) -> Self {
        Self(
            doc.schemas()
                .filter(|(_, schema)| schema.is_enum())
                .map(|(name, _)| name)
                .collect(),
        )
    }

    /// Returns `true` if `name` is the name of an enum schema.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns an iterator over the enum names, in sorted order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for EnumSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
