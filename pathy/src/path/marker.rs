//! Type-level tags for the two axes of a path.
//!
//! A [`TypedPath`](super::TypedPath) carries two phantom parameters: a
//! [`PathKind`] (absolute, relative or not yet known) and a [`FileType`]
//! (file, directory or not yet known). The tags are uninhabited enums; they
//! exist only so that the compiler rejects ill-formed compositions such as
//! joining onto a file or joining an absolute suffix.
//!
//! Both traits are sealed. The set of tags is closed.

use super::node::{Anchor, PathNode};
use super::parse;
use crate::error::RejectReason;

mod private {
    use super::{Anchor, PathNode, RejectReason};

    pub trait Sealed {}

    pub trait KindCheck {
        fn admits(anchor: Anchor) -> bool;
    }

    pub trait TypeParse {
        fn parse_node(raw: &str) -> Result<PathNode, RejectReason>;

        /// Whether the text form needs a trailing `/` to parse back as the
        /// same node.
        fn marks_directory(_node: &PathNode) -> bool {
            false
        }
    }
}

/// The absolute/relative axis of a path.
pub trait PathKind: private::Sealed + private::KindCheck {
    /// Human-readable tag name, used in messages.
    const NAME: &'static str;
}

/// The file/directory axis of a path.
pub trait FileType: private::Sealed + private::TypeParse {
    /// Human-readable tag name, used in messages.
    const NAME: &'static str;
}

/// Rooted at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Absolute {}

/// Rooted at `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relative {}

/// A leaf; nothing can be joined beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum File {}

/// Joinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directory {}

/// Not yet proven. Serves both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unknown {}

impl private::Sealed for Absolute {}
impl private::Sealed for Relative {}
impl private::Sealed for File {}
impl private::Sealed for Directory {}
impl private::Sealed for Unknown {}

impl private::KindCheck for Absolute {
    fn admits(anchor: Anchor) -> bool {
        anchor == Anchor::Root
    }
}

impl private::KindCheck for Relative {
    fn admits(anchor: Anchor) -> bool {
        anchor == Anchor::Current
    }
}

impl private::KindCheck for Unknown {
    fn admits(_: Anchor) -> bool {
        true
    }
}

impl private::TypeParse for File {
    fn parse_node(raw: &str) -> Result<PathNode, RejectReason> {
        parse::file_node(raw)
    }
}

impl private::TypeParse for Directory {
    fn parse_node(raw: &str) -> Result<PathNode, RejectReason> {
        parse::dir_node(raw)
    }
}

impl private::TypeParse for Unknown {
    fn parse_node(raw: &str) -> Result<PathNode, RejectReason> {
        parse::untyped_node(raw)
    }

    // `a/b` reads back as a file; `/`, `.` and `..` already read as
    // directories.
    fn marks_directory(node: &PathNode) -> bool {
        node.is_named_dir()
    }
}

impl PathKind for Absolute {
    const NAME: &'static str = "absolute";
}

impl PathKind for Relative {
    const NAME: &'static str = "relative";
}

impl PathKind for Unknown {
    const NAME: &'static str = "unknown";
}

impl FileType for File {
    const NAME: &'static str = "file";
}

impl FileType for Directory {
    const NAME: &'static str = "directory";
}

impl FileType for Unknown {
    const NAME: &'static str = "unknown";
}

/// Kind check for a tag, usable from sibling modules without naming the
/// sealed trait.
pub(crate) fn admits<K: PathKind>(anchor: Anchor) -> bool {
    <K as private::KindCheck>::admits(anchor)
}

/// Parser selected by a type tag.
pub(crate) fn parse_node<T: FileType>(raw: &str) -> Result<PathNode, RejectReason> {
    <T as private::TypeParse>::parse_node(raw)
}

/// Whether a path tagged `T` renders with a trailing `/`.
pub(crate) fn marks_directory<T: FileType>(node: &PathNode) -> bool {
    <T as private::TypeParse>::marks_directory(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_admission() {
        assert!(admits::<Absolute>(Anchor::Root));
        assert!(!admits::<Absolute>(Anchor::Current));
        assert!(admits::<Relative>(Anchor::Current));
        assert!(!admits::<Relative>(Anchor::Root));
        assert!(admits::<Unknown>(Anchor::Root));
        assert!(admits::<Unknown>(Anchor::Current));
    }

    #[test]
    fn test_type_selects_parser() {
        assert!(parse_node::<File>("/").is_err());
        assert_eq!(parse_node::<Directory>("/"), Ok(PathNode::Root));
        assert_eq!(parse_node::<Unknown>("/"), Ok(PathNode::Root));
    }

    #[test]
    fn test_only_untyped_directories_are_marked() {
        let named = PathNode::dir_in(PathNode::Root, "srv".into());
        assert!(marks_directory::<Unknown>(&named));
        assert!(!marks_directory::<Directory>(&named));
        assert!(!marks_directory::<Unknown>(&PathNode::Root));
        assert!(!marks_directory::<Unknown>(&PathNode::parent_in(PathNode::Current)));
        assert!(!marks_directory::<Unknown>(&PathNode::file_in(
            PathNode::Current,
            "f".into()
        )));
    }

    #[test]
    fn test_names() {
        assert_eq!(Absolute::NAME, "absolute");
        assert_eq!(<Unknown as PathKind>::NAME, "unknown");
        assert_eq!(<Unknown as FileType>::NAME, "unknown");
        assert_eq!(Directory::NAME, "directory");
    }
}
