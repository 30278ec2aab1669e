//! The untyped path tree.
//!
//! A path is a chain of nodes ending in an anchor. The outermost node is the
//! last textual segment; the innermost is `Root` or `Current`. Each node owns
//! its parent, so trees are never shared and never cyclic.
//!
//! Nothing outside `crate::path` can name or build a `PathNode`; the typed
//! wrapper and the parsers are the only way in.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::mem;

use super::name::{DirName, FileName};

/// The base a path hangs from.
///
/// # Examples
///
/// ```
/// use pathy::{parse_dir_path, Anchor};
///
/// let path = parse_dir_path("/usr/lib").unwrap();
/// assert_eq!(path.anchor(), Anchor::Root);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The filesystem root, `/`.
    Root,
    /// The current directory, `.`.
    Current,
}

/// A borrowed view of one path component, anchor first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component<'a> {
    /// `/`
    Root,
    /// `.`
    Current,
    /// A named directory.
    Dir(&'a DirName),
    /// A named file. Only ever the last component.
    File(&'a FileName),
    /// `..`
    Parent,
}

/// One node of a path tree.
///
/// Every traversal is a loop over the parent chain, so depth is bounded
/// only by memory.
pub enum PathNode {
    /// `/`; renders as `/` only when outermost.
    Root,
    /// `.`
    Current,
    /// A named file beneath `parent`.
    FileIn(Box<PathNode>, FileName),
    /// A named directory beneath `parent`.
    DirIn(Box<PathNode>, DirName),
    /// A `..` step beneath `parent`.
    ParentIn(Box<PathNode>),
}

/// An owned non-anchor segment, used when a tree is flattened.
enum Segment {
    Dir(DirName),
    File(FileName),
    Parent,
}

impl PathNode {
    /// Builds `FileIn`.
    pub fn file_in(parent: PathNode, name: FileName) -> Self {
        Self::FileIn(Box::new(parent), name)
    }

    /// Builds `DirIn`.
    pub fn dir_in(parent: PathNode, name: DirName) -> Self {
        Self::DirIn(Box::new(parent), name)
    }

    /// Builds `ParentIn`.
    pub fn parent_in(parent: PathNode) -> Self {
        Self::ParentIn(Box::new(parent))
    }

    /// Parent slot of a non-anchor node.
    fn parent(&self) -> Option<&PathNode> {
        match self {
            Self::Root | Self::Current => None,
            Self::FileIn(p, _) | Self::DirIn(p, _) | Self::ParentIn(p) => Some(p),
        }
    }

    /// Moves the parent out, leaving `.` in its slot.
    fn detach_parent(&mut self) -> Option<PathNode> {
        match self {
            Self::Root | Self::Current => None,
            Self::FileIn(p, _) | Self::DirIn(p, _) | Self::ParentIn(p) => {
                Some(mem::replace(&mut **p, Self::Current))
            }
        }
    }

    /// This node alone, ignoring its parent.
    fn component(&self) -> Component<'_> {
        match self {
            Self::Root => Component::Root,
            Self::Current => Component::Current,
            Self::FileIn(_, name) => Component::File(name),
            Self::DirIn(_, name) => Component::Dir(name),
            Self::ParentIn(_) => Component::Parent,
        }
    }

    /// Outermost node first, down to the anchor.
    fn chain(&self) -> impl Iterator<Item = &PathNode> {
        std::iter::successors(Some(self), |node| node.parent())
    }

    /// Walks to the innermost node.
    pub fn anchor(&self) -> Anchor {
        match self.chain().last() {
            Some(Self::Root) => Anchor::Root,
            _ => Anchor::Current,
        }
    }

    /// Whether the outermost node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::FileIn(..))
    }

    /// Whether the outermost node is a named directory.
    pub fn is_named_dir(&self) -> bool {
        matches!(self, Self::DirIn(..))
    }

    /// Whether any node strictly beneath the outermost one is a file.
    pub fn has_nested_file(&self) -> bool {
        self.chain().skip(1).any(Self::is_file)
    }

    /// Number of nodes above the anchor.
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Anchor-first component list.
    pub fn components(&self) -> Vec<Component<'_>> {
        let mut out: Vec<Component<'_>> = self.chain().map(Self::component).collect();
        out.reverse();
        out
    }

    /// Canonical textual form.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Appends a relative `suffix` beneath `self`.
    ///
    /// The suffix is flattened and its segments are stacked on top of the
    /// base in order, so the suffix's `.` anchor is where the base is
    /// spliced in.
    ///
    /// # Panics
    ///
    /// If `self` is a file or `suffix` is rooted at `/`. The typed wrapper
    /// rules out both.
    pub fn join(self, suffix: PathNode) -> PathNode {
        if self.is_file() {
            unreachable!("join onto a file: {self}");
        }
        let (anchor, segments) = suffix.to_parts();
        if anchor == Anchor::Root {
            unreachable!("join with an absolute suffix: {suffix}");
        }
        Self::extend(self, segments)
    }

    fn to_parts(&self) -> (Anchor, Vec<Segment>) {
        let segments = self
            .components()
            .into_iter()
            .filter_map(|component| match component {
                Component::Root | Component::Current => None,
                Component::Dir(name) => Some(Segment::Dir(name.clone())),
                Component::File(name) => Some(Segment::File(name.clone())),
                Component::Parent => Some(Segment::Parent),
            })
            .collect();
        (self.anchor(), segments)
    }

    fn extend(base: PathNode, segments: Vec<Segment>) -> Self {
        segments
            .into_iter()
            .fold(base, |acc, segment| match segment {
                Segment::Dir(name) => Self::dir_in(acc, name),
                Segment::File(name) => Self::file_in(acc, name),
                Segment::Parent => Self::parent_in(acc),
            })
    }

    fn from_parts(anchor: Anchor, segments: Vec<Segment>) -> Self {
        let base = match anchor {
            Anchor::Root => Self::Root,
            Anchor::Current => Self::Current,
        };
        Self::extend(base, segments)
    }

    /// Lexically cancels `name/..` pairs.
    ///
    /// `..` directly above `/` is dropped. Leading `..` segments of a relative
    /// path have nothing to cancel and are kept.
    pub fn normalize(self) -> Self {
        let (anchor, segments) = self.to_parts();
        let mut kept: Vec<Segment> = Vec::with_capacity(segments.len());

        for segment in segments {
            match segment {
                Segment::Parent => match kept.last() {
                    Some(Segment::Dir(_)) => {
                        kept.pop();
                    }
                    None if anchor == Anchor::Root => {}
                    _ => kept.push(Segment::Parent),
                },
                other => kept.push(other),
            }
        }

        Self::from_parts(anchor, kept)
    }
}

impl Drop for PathNode {
    fn drop(&mut self) {
        // Unlink one node at a time; each detached node is dropped with `.`
        // as its parent.
        let mut next = self.detach_parent();
        while let Some(mut node) = next {
            next = node.detach_parent();
        }
    }
}

impl Clone for PathNode {
    fn clone(&self) -> Self {
        let (anchor, segments) = self.to_parts();
        Self::from_parts(anchor, segments)
    }
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.chain();
        let mut right = other.chain();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.component() == b.component() => {}
                _ => return false,
            }
        }
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.depth());
        for node in self.chain() {
            node.component().hash(state);
        }
    }
}

impl fmt::Debug for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.components()).finish()
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components();
        if let [Component::Root] = components.as_slice() {
            return f.write_char('/');
        }

        for component in components {
            match component {
                Component::Root => {}
                Component::Current => f.write_char('.')?,
                Component::Dir(name) => write!(f, "/{name}")?,
                Component::File(name) => write!(f, "/{name}")?,
                Component::Parent => f.write_str("/..")?,
            }
        }
        Ok(())
    }
}
