//! The tagged path wrapper and the primitive constructors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::marker::{self, Absolute, Directory, File, FileType, PathKind, Relative, Unknown};
use super::name::{DirName, FileName};
use super::node::{Anchor, Component, PathNode};

/// A path whose kind and file/directory type are tracked by the compiler.
///
/// `K` is one of [`Absolute`], [`Relative`] or [`Unknown`]; `T` is one of
/// [`File`], [`Directory`] or [`Unknown`]. The tags are never stored or
/// inspected at runtime. Values are immutable: every operation consumes or
/// borrows and returns a new path.
///
/// There is no public constructor taking a raw tree. Paths come from the
/// primitives ([`root`], [`current`], [`file`], [`dir`], [`parent`]), the
/// parsers, [`join`](TypedPath::join), or narrowing.
///
/// # Examples
///
/// ```
/// use pathy::{dir, file, root};
///
/// let hello = root() / dir("Users") / dir("bkase") / file("Hello.txt");
/// assert_eq!(hello.to_string(), "/Users/bkase/Hello.txt");
/// ```
pub struct TypedPath<K, T> {
    node: PathNode,
    _tags: PhantomData<fn() -> (K, T)>,
}

/// An absolute path to a file.
pub type AbsoluteFilePath = TypedPath<Absolute, File>;
/// An absolute path to a directory.
pub type AbsoluteDirPath = TypedPath<Absolute, Directory>;
/// A relative path to a file.
pub type RelativeFilePath = TypedPath<Relative, File>;
/// A relative path to a directory.
pub type RelativeDirPath = TypedPath<Relative, Directory>;
/// A file path as produced by [`parse_file_path`](crate::parse_file_path).
pub type UnknownKindFilePath = TypedPath<Unknown, File>;
/// A directory path as produced by [`parse_dir_path`](crate::parse_dir_path).
pub type UnknownKindDirPath = TypedPath<Unknown, Directory>;
/// A path with neither axis known, as produced by [`parse_path`](crate::parse_path).
pub type UnknownPath = TypedPath<Unknown, Unknown>;

impl<K, T> TypedPath<K, T> {
    pub(crate) fn from_node(node: PathNode) -> Self {
        Self {
            node,
            _tags: PhantomData,
        }
    }

    pub(crate) fn node(&self) -> &PathNode {
        &self.node
    }

    pub(crate) fn into_node(self) -> PathNode {
        self.node
    }

    /// Moves the tree under different tags. Callers establish the new tags.
    pub(crate) fn retag<K2, T2>(self) -> TypedPath<K2, T2> {
        TypedPath::from_node(self.node)
    }

    /// Renders the canonical textual form.
    ///
    /// The root renders as `/` when it is the whole path and vanishes
    /// otherwise, so `/a` rather than `//a`. The current directory always
    /// renders as `.`.
    ///
    /// This is the tag-free form. `Display` adds a trailing `/` when the
    /// type tag is [`Unknown`] and the path ends in a named directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{current, dir, parent, root};
    ///
    /// assert_eq!(root().serialize(), "/");
    /// assert_eq!(current().serialize(), ".");
    /// assert_eq!((dir("a") / parent()).serialize(), "./a/..");
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        self.node.serialize()
    }

    /// Where the path is anchored.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.node.anchor()
    }

    /// Whether the path hangs from `/`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.anchor() == Anchor::Root
    }

    /// Whether the path hangs from `.`.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.anchor() == Anchor::Current
    }

    /// Number of components after the anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{dir, file, root};
    ///
    /// assert_eq!(root().depth(), 0);
    /// assert_eq!((root() / dir("a") / file("b")).depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node.depth()
    }

    /// The components of the path, anchor first.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{dir, parent, Component, DirName};
    ///
    /// let path = dir("a") / parent();
    /// assert_eq!(
    ///     path.components(),
    ///     vec![Component::Current, Component::Dir(&DirName::from("a")), Component::Parent]
    /// );
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<Component<'_>> {
        self.node.components()
    }

    /// Cancels `name/..` pairs without touching the filesystem.
    ///
    /// `..` directly beneath `/` is dropped, since `/..` is `/`. A relative
    /// path keeps the `..` segments it cannot cancel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::parse_dir_path;
    ///
    /// let path = parse_dir_path("/a/b/../c").unwrap();
    /// assert_eq!(path.normalize().to_string(), "/a/c");
    ///
    /// let path = parse_dir_path("../a/..").unwrap();
    /// assert_eq!(path.normalize().to_string(), "./..");
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        let normalized = self.node.normalize();
        log::trace!("normalized to {normalized}");
        Self::from_node(normalized)
    }
}

impl<K> TypedPath<K, File> {
    /// The name of the file this path points at.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::parse_file_path;
    ///
    /// let path = parse_file_path("/etc/hosts").unwrap();
    /// assert_eq!(path.file_name().as_str(), "hosts");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &FileName {
        match &self.node {
            PathNode::FileIn(_, name) => name,
            other => unreachable!("file path without a file leaf: {other}"),
        }
    }
}

/// The absolute root, `/`.
#[must_use]
pub fn root() -> TypedPath<Absolute, Directory> {
    TypedPath::from_node(PathNode::Root)
}

/// The current directory, `.`.
#[must_use]
pub fn current() -> TypedPath<Relative, Directory> {
    TypedPath::from_node(PathNode::Current)
}

/// A single file relative to the current directory, `./name`.
///
/// # Examples
///
/// ```
/// use pathy::file;
///
/// assert_eq!(file("notes.md").to_string(), "./notes.md");
/// ```
#[must_use]
pub fn file(name: impl Into<FileName>) -> TypedPath<Relative, File> {
    TypedPath::from_node(PathNode::file_in(PathNode::Current, name.into()))
}

/// A single directory relative to the current directory, `./name`.
#[must_use]
pub fn dir(name: impl Into<DirName>) -> TypedPath<Relative, Directory> {
    TypedPath::from_node(PathNode::dir_in(PathNode::Current, name.into()))
}

/// One step up from the current directory, `./..`.
#[must_use]
pub fn parent() -> TypedPath<Relative, Directory> {
    TypedPath::from_node(PathNode::parent_in(PathNode::Current))
}

impl<K, T> Clone for TypedPath<K, T> {
    fn clone(&self) -> Self {
        Self::from_node(self.node.clone())
    }
}

impl<K, T> PartialEq for TypedPath<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<K, T> Eq for TypedPath<K, T> {}

impl<K, T> Hash for TypedPath<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

/// The canonical form, plus a trailing `/` on a named directory whose type
/// tag is [`Unknown`], so that the text parses back to the same path.
impl<K, T: FileType> fmt::Display for TypedPath<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)?;
        if marker::marks_directory::<T>(&self.node) {
            f.write_str("/")?;
        }
        Ok(())
    }
}

impl<K: PathKind, T: FileType> fmt::Debug for TypedPath<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedPath<{}, {}>({:?})", K::NAME, T::NAME, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_primitives_serialize() {
        assert_eq!(root().to_string(), "/");
        assert_eq!(current().to_string(), ".");
        assert_eq!(parent().to_string(), "./..");
        assert_eq!(file("f").to_string(), "./f");
        assert_eq!(dir("d").to_string(), "./d");
    }

    #[test]
    fn test_primitive_anchors() {
        assert!(root().is_absolute());
        assert!(current().is_relative());
        assert!(file("f").is_relative());
        assert_eq!(parent().anchor(), Anchor::Current);
    }

    #[test]
    fn test_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(dir("a"));
        set.insert(dir("a"));
        set.insert(dir("b"));
        assert_eq!(set.len(), 2);
        assert_ne!(dir("a"), parent());
        assert_eq!(current(), current());
    }

    #[test]
    fn test_debug_shows_tags() {
        assert_eq!(
            format!("{:?}", root()),
            "TypedPath<absolute, directory>(\"/\")"
        );
        assert_eq!(
            format!("{:?}", file("f")),
            "TypedPath<relative, file>(\"./f\")"
        );
    }

    #[test]
    fn test_untyped_directory_keeps_trailing_separator() {
        let srv = (root() / dir("srv")).erase_type();
        assert_eq!(srv.to_string(), "/srv/");
        assert_eq!(srv.serialize(), "/srv");

        assert_eq!(root().erase_type().to_string(), "/");
        assert_eq!(parent().erase_type().to_string(), "./..");
        assert_eq!(file("f").erase_type().to_string(), "./f");
    }

    #[test]
    fn test_debug_tells_untyped_files_from_directories() {
        let as_dir = dir("srv").erase_type();
        let as_file = file("srv").erase_type();
        assert_eq!(format!("{as_dir:?}"), "TypedPath<relative, unknown>(\"./srv/\")");
        assert_eq!(format!("{as_file:?}"), "TypedPath<relative, unknown>(\"./srv\")");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file("Hello.txt").file_name().as_str(), "Hello.txt");
    }

    #[test]
    fn test_depth_counts_parent_steps() {
        assert_eq!(parent().depth(), 1);
        assert_eq!(current().depth(), 0);
    }

    #[test]
    fn test_normalize_preserves_tags() {
        let path: TypedPath<Relative, File> = TypedPath::from_node(PathNode::file_in(
            PathNode::parent_in(PathNode::dir_in(PathNode::Current, DirName::from("a"))),
            FileName::from("f"),
        ));
        assert_eq!(path.normalize(), file("f"));
    }
}
