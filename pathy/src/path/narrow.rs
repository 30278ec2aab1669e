//! Recovering static tags at runtime.
//!
//! A path with an [`Unknown`] tag can be inspected and moved into one of two
//! definite branches. The kind proof walks to the anchor; the type proof only
//! needs the outermost node, but still checks the rest of the tree because
//! the tag it hands out covers every node.

use super::marker::{Absolute, Directory, File, FileType, PathKind, Relative, Unknown};
use super::node::Anchor;
use super::typed::TypedPath;
use crate::error::{Error, Result};

/// The outcome of [`TypedPath::prove_kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindProof<T: FileType> {
    /// Rooted at `/`.
    Absolute(TypedPath<Absolute, T>),
    /// Rooted at `.`.
    Relative(TypedPath<Relative, T>),
}

/// The outcome of [`TypedPath::prove_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeProof<K: PathKind> {
    /// The path ends in a file.
    File(TypedPath<K, File>),
    /// The path ends in a directory, `.`, `..` or `/`.
    Directory(TypedPath<K, Directory>),
}

impl<T: FileType> KindProof<T> {
    /// The absolute branch, if that is what was proven.
    #[must_use]
    pub fn absolute(self) -> Option<TypedPath<Absolute, T>> {
        match self {
            Self::Absolute(path) => Some(path),
            Self::Relative(_) => None,
        }
    }

    /// The relative branch, if that is what was proven.
    #[must_use]
    pub fn relative(self) -> Option<TypedPath<Relative, T>> {
        match self {
            Self::Absolute(_) => None,
            Self::Relative(path) => Some(path),
        }
    }

    /// The absolute branch, or [`Error::KindMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path was proven relative.
    pub fn into_absolute(self) -> Result<TypedPath<Absolute, T>> {
        match self {
            Self::Absolute(path) => Ok(path),
            Self::Relative(path) => Err(Error::KindMismatch {
                path: path.serialize(),
                expected: Absolute::NAME,
            }),
        }
    }

    /// The relative branch, or [`Error::KindMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path was proven absolute.
    pub fn into_relative(self) -> Result<TypedPath<Relative, T>> {
        match self {
            Self::Relative(path) => Ok(path),
            Self::Absolute(path) => Err(Error::KindMismatch {
                path: path.serialize(),
                expected: Relative::NAME,
            }),
        }
    }
}

impl<K: PathKind> TypeProof<K> {
    /// The file branch, if that is what was proven.
    #[must_use]
    pub fn file(self) -> Option<TypedPath<K, File>> {
        match self {
            Self::File(path) => Some(path),
            Self::Directory(_) => None,
        }
    }

    /// The directory branch, if that is what was proven.
    #[must_use]
    pub fn directory(self) -> Option<TypedPath<K, Directory>> {
        match self {
            Self::File(_) => None,
            Self::Directory(path) => Some(path),
        }
    }

    /// The file branch, or [`Error::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path was proven to be a directory.
    pub fn into_file(self) -> Result<TypedPath<K, File>> {
        match self {
            Self::File(path) => Ok(path),
            Self::Directory(path) => Err(Error::TypeMismatch {
                path: path.serialize(),
                expected: File::NAME,
            }),
        }
    }

    /// The directory branch, or [`Error::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path was proven to be a file.
    pub fn into_directory(self) -> Result<TypedPath<K, Directory>> {
        match self {
            Self::Directory(path) => Ok(path),
            Self::File(path) => Err(Error::TypeMismatch {
                path: path.serialize(),
                expected: Directory::NAME,
            }),
        }
    }
}

impl<T: FileType> TypedPath<Unknown, T> {
    /// Proves whether the path is absolute or relative.
    ///
    /// Never fails: every path ends in exactly one anchor. The tree is moved,
    /// not rebuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{parse_file_path, KindProof};
    ///
    /// match parse_file_path("/etc/hosts").unwrap().prove_kind() {
    ///     KindProof::Absolute(path) => assert_eq!(path.to_string(), "/etc/hosts"),
    ///     KindProof::Relative(_) => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn prove_kind(self) -> KindProof<T> {
        let anchor = self.anchor();
        log::trace!("proved {self} {}", anchor_name(anchor));
        match anchor {
            Anchor::Root => KindProof::Absolute(self.retag()),
            Anchor::Current => KindProof::Relative(self.retag()),
        }
    }

    /// The absolute form of this path, if it is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::parse_dir_path;
    ///
    /// assert!(parse_dir_path("/usr").unwrap().absolute().is_some());
    /// assert!(parse_dir_path("usr").unwrap().absolute().is_none());
    /// ```
    #[must_use]
    pub fn absolute(self) -> Option<TypedPath<Absolute, T>> {
        self.prove_kind().absolute()
    }

    /// The relative form of this path, if it is relative.
    #[must_use]
    pub fn relative(self) -> Option<TypedPath<Relative, T>> {
        self.prove_kind().relative()
    }
}

impl<K: PathKind> TypedPath<K, Unknown> {
    /// Proves whether the path names a file or a directory.
    ///
    /// Classification comes from the outermost node alone. The rest of the
    /// tree must then be free of files, since the proven tag applies to every
    /// node beneath it.
    ///
    /// # Panics
    ///
    /// If a file component sits beneath the outermost node. No public
    /// constructor can produce such a tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{parse_path, TypeProof};
    ///
    /// let proof = parse_path("src/lib.rs").unwrap().prove_type();
    /// assert!(matches!(proof, TypeProof::File(_)));
    /// ```
    #[must_use]
    pub fn prove_type(self) -> TypeProof<K> {
        let node = self.node();
        assert!(
            !node.has_nested_file(),
            "file component beneath the leaf of {node}"
        );

        if node.is_file() {
            log::trace!("proved {node} is a file");
            TypeProof::File(self.retag())
        } else {
            log::trace!("proved {node} is a directory");
            TypeProof::Directory(self.retag())
        }
    }

    /// The file form of this path, if it names a file.
    #[must_use]
    pub fn file(self) -> Option<TypedPath<K, File>> {
        self.prove_type().file()
    }

    /// The directory form of this path, if it names a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::parse_path;
    ///
    /// assert!(parse_path("..").unwrap().directory().is_some());
    /// assert!(parse_path("a.txt").unwrap().directory().is_none());
    /// ```
    #[must_use]
    pub fn directory(self) -> Option<TypedPath<K, Directory>> {
        self.prove_type().directory()
    }
}

impl<K: PathKind, T: FileType> TypedPath<K, T> {
    /// Forgets the kind tag. Always safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{root, KindProof};
    ///
    /// let erased = root().erase_kind();
    /// assert!(matches!(erased.prove_kind(), KindProof::Absolute(_)));
    /// ```
    #[must_use]
    pub fn erase_kind(self) -> TypedPath<Unknown, T> {
        self.retag()
    }

    /// Forgets the file/directory tag. Always safe.
    #[must_use]
    pub fn erase_type(self) -> TypedPath<K, Unknown> {
        self.retag()
    }
}

fn anchor_name(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Root => Absolute::NAME,
        Anchor::Current => Relative::NAME,
    }
}
