//! Typed paths.
//!
//! A path is an immutable tree: an anchor (`/` or `.`) with directory, file
//! and `..` nodes stacked on top. [`TypedPath`] wraps that tree with two
//! compile-time tags so that the type checker rejects nonsense like joining
//! two absolute paths or descending into a file.
//!
//! # Key Concepts
//!
//! ## Kind and type
//!
//! - **Kind**: [`Absolute`] (anchored at `/`), [`Relative`] (anchored at
//!   `.`), or [`Unknown`].
//! - **Type**: [`File`], [`Directory`], or [`Unknown`].
//!
//! ## Parsing
//!
//! [`parse_file_path`] and [`parse_dir_path`] turn raw strings into paths.
//! The caller states file or directory by picking the parser; the kind is
//! left [`Unknown`]. Parsing never fails loudly: bad input yields `None`.
//!
//! ## Narrowing
//!
//! [`TypedPath::prove_kind`] and [`TypedPath::prove_type`] inspect a path
//! whose tag is [`Unknown`] and hand it back under a definite tag:
//!
//! ```
//! use pathy::{parse_file_path, KindProof};
//!
//! let path = parse_file_path("/Users/bkase/Hello.txt").unwrap();
//! match path.prove_kind() {
//!     KindProof::Absolute(abs) => assert_eq!(abs.depth(), 3),
//!     KindProof::Relative(_) => unreachable!(),
//! }
//! ```
//!
//! ## Joining
//!
//! A directory joined with a relative path gives a path with the directory's
//! kind and the suffix's type:
//!
//! ```
//! use pathy::{dir, file, root, AbsoluteFilePath};
//!
//! let hello: AbsoluteFilePath = root() / dir("Users") / dir("bkase") / file("Hello.txt");
//! assert_eq!(hello.to_string(), "/Users/bkase/Hello.txt");
//! ```

mod join;
mod marker;
mod name;
mod narrow;
mod node;
mod parse;
pub mod relationship;
mod serialization;
mod typed;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use marker::{Absolute, Directory, File, FileType, PathKind, Relative, Unknown};
pub use name::{DirName, FileName};
pub use narrow::{KindProof, TypeProof};
pub use node::{Anchor, Component};
pub use parse::{parse_dir_path, parse_file_path, parse_path};
pub use relationship::PathRelationship;
pub use typed::{
    current, dir, file, parent, root, AbsoluteDirPath, AbsoluteFilePath, RelativeDirPath,
    RelativeFilePath, TypedPath, UnknownKindDirPath, UnknownKindFilePath, UnknownPath,
};
