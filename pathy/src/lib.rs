#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathy
//!
//! Filesystem paths as an immutable, type-tagged algebraic structure.
//!
//! Every path statically records whether it is absolute or relative and
//! whether it names a file or a directory. Operations that would build a
//! structurally invalid path, such as joining two absolute paths or treating a
//! file as a directory, are rejected by the compiler.
//!
//! This crate never touches the filesystem.
//!
//! ## Core Types
//!
//! - [`TypedPath`]: the tagged path, with aliases such as [`AbsoluteFilePath`]
//! - [`FileName`] and [`DirName`]: segment names
//! - [`KindProof`] and [`TypeProof`]: results of runtime narrowing
//! - [`PathRelationship`]: ancestor/descendant classification
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathy::{dir, file, parse_dir_path, root};
//!
//! // Build paths from primitives
//! let hello = root() / dir("Users") / dir("bkase") / file("Hello.txt");
//! assert_eq!(hello.to_string(), "/Users/bkase/Hello.txt");
//!
//! // Parse, then prove the kind before joining onto it
//! let home = parse_dir_path("/home/user").unwrap().absolute().unwrap();
//! let rc = home / file(".bashrc");
//! assert_eq!(rc.to_string(), "/home/user/.bashrc");
//! ```

pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, RejectReason, Result};
pub use path::{
    current, dir, file, parent, parse_dir_path, parse_file_path, parse_path, root, Absolute,
    AbsoluteDirPath, AbsoluteFilePath, Anchor, Component, DirName, Directory, File, FileName,
    FileType, KindProof, PathKind, PathRelationship, Relative, RelativeDirPath, RelativeFilePath,
    TypeProof, TypedPath, Unknown, UnknownKindDirPath, UnknownKindFilePath, UnknownPath,
};
