//! Path relationship checking.
//!
//! This module determines how two paths relate in the hierarchy: whether one
//! is an ancestor or descendant of the other. The comparison is purely
//! lexical. Both paths are normalized first, so `/a/b/..` and `/a` are the
//! same place, but no symlink is ever followed.

use std::fmt;

use super::marker::{Directory, PathKind};
use super::node::Component;
use super::typed::TypedPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathy::{dir, file, root, PathRelationship};
///
/// let home = root() / dir("home") / dir("user");
/// let notes = root() / dir("home") / dir("user") / file("notes.md");
///
/// assert_eq!(
///     PathRelationship::between(&home, &notes),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// The second path lies somewhere beneath the first.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// After normalization, the paths are identical.
    Same,

    /// Neither path lies beneath the other, or they hang from different
    /// anchors.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths of the same kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{dir, parent, root, PathRelationship};
    ///
    /// let a = root() / dir("a");
    /// let ab = root() / dir("a") / dir("b");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(
    ///     PathRelationship::between(&(ab.clone() / parent()), &a),
    ///     PathRelationship::Same
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(&a, &(root() / dir("b"))),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between<K: PathKind, T1, T2>(
        path1: &TypedPath<K, T1>,
        path2: &TypedPath<K, T2>,
    ) -> Self {
        let p1 = path1.clone().normalize();
        let p2 = path2.clone().normalize();
        let c1 = p1.components();
        let c2 = p2.components();

        if c1 == c2 {
            return Self::Same;
        }

        if is_prefix(&c1, &c2) {
            return Self::Ancestor;
        }

        if is_prefix(&c2, &c1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{dir, file, root, PathRelationship};
    ///
    /// let home = root() / dir("home");
    /// let rc = root() / dir("home") / file(".bashrc");
    ///
    /// assert!(PathRelationship::is_within(&rc, &home));
    /// assert!(PathRelationship::is_within(&home, &home));
    /// ```
    #[must_use]
    pub fn is_within<K: PathKind, T>(
        path: &TypedPath<K, T>,
        directory: &TypedPath<K, Directory>,
    ) -> bool {
        let rel = Self::between(path, directory);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a directory contains another path (ancestor or same).
    #[must_use]
    pub fn contains<K: PathKind, T>(
        directory: &TypedPath<K, Directory>,
        other: &TypedPath<K, T>,
    ) -> bool {
        let rel = Self::between(directory, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{dir, root, PathRelationship};
    ///
    /// let a = root() / dir("a");
    /// let ab = root() / dir("a") / dir("b");
    ///
    /// let desc = PathRelationship::Ancestor.description(&a, &ab);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &impl fmt::Display, path2: &impl fmt::Display) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// `path` extends `prefix` downwards. After normalization `..` can only
/// lead a relative path, and a path that adds `..` climbs rather than
/// descends.
fn is_prefix(prefix: &[Component<'_>], path: &[Component<'_>]) -> bool {
    prefix.len() < path.len()
        && path.starts_with(prefix)
        && !path[prefix.len()..].contains(&Component::Parent)
}
