//! Raw string parsers.
//!
//! Segments are separated by `/`. Runs of separators collapse, `.` segments
//! vanish, and `..` becomes a parent step. A leading `/` anchors the path at
//! the root; anything else anchors it at the current directory. No other
//! normalization happens here: `a/..` stays two nodes.
//!
//! The parsers cannot tell from the text whether a path is absolute in any
//! deeper sense than its first byte, so they return paths whose kind is
//! [`Unknown`]; use [`TypedPath::prove_kind`] to recover it.

use std::str::FromStr;

use super::marker::{self, Directory, File, FileType, PathKind, Unknown};
use super::name::{DirName, FileName};
use super::node::PathNode;
use super::typed::TypedPath;
use crate::error::{Error, RejectReason, Result};

const SEPARATOR: char = '/';
const CURRENT: &str = ".";
const PARENT: &str = "..";

fn anchor_for(raw: &str) -> PathNode {
    if raw.starts_with(SEPARATOR) {
        PathNode::Root
    } else {
        PathNode::Current
    }
}

fn segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATOR).filter(|chunk| !chunk.is_empty())
}

/// Folds directory segments onto `base`, left to right.
fn fold_dirs<'a>(base: PathNode, chunks: impl Iterator<Item = &'a str>) -> PathNode {
    chunks.fold(base, |path, chunk| match chunk {
        CURRENT => path,
        PARENT => PathNode::parent_in(path),
        name => PathNode::dir_in(path, DirName::from(name)),
    })
}

pub(crate) fn file_node(raw: &str) -> std::result::Result<PathNode, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::Empty);
    }

    let chunks: Vec<&str> = segments(raw).collect();
    let Some((last, head)) = chunks.split_last() else {
        return Err(RejectReason::NoFileName);
    };
    if *last == CURRENT || *last == PARENT {
        return Err(RejectReason::DotFileName);
    }

    let parent = fold_dirs(anchor_for(raw), head.iter().copied());
    Ok(PathNode::file_in(parent, FileName::from(*last)))
}

pub(crate) fn dir_node(raw: &str) -> std::result::Result<PathNode, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::Empty);
    }
    if raw == "/" {
        return Ok(PathNode::Root);
    }

    Ok(fold_dirs(anchor_for(raw), segments(raw)))
}

/// Picks a parser from the shape of the text.
///
/// A trailing separator, a trailing `.` or `..`, or the absence of any named
/// segment means directory. Everything else is read as a file.
pub(crate) fn untyped_node(raw: &str) -> std::result::Result<PathNode, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::Empty);
    }

    let names_a_directory = raw.ends_with(SEPARATOR)
        || matches!(segments(raw).last(), None | Some(CURRENT | PARENT));

    if names_a_directory {
        dir_node(raw)
    } else {
        file_node(raw)
    }
}

fn logged<T: FileType>(
    raw: &str,
    result: std::result::Result<PathNode, RejectReason>,
) -> Option<TypedPath<Unknown, T>> {
    match result {
        Ok(node) => Some(TypedPath::from_node(node)),
        Err(reason) => {
            log::debug!("rejected {} path {raw:?}: {reason}", T::NAME);
            None
        }
    }
}

/// Parses a path to a file.
///
/// Fails if:
/// 1. The string is empty
/// 2. It contains nothing but separators (e.g. `/`)
/// 3. The last segment is `.` or `..`
///
/// # Examples
///
/// ```
/// use pathy::parse_file_path;
///
/// let path = parse_file_path("/Users/bkase/Hello.txt").unwrap();
/// assert_eq!(path.to_string(), "/Users/bkase/Hello.txt");
///
/// assert!(parse_file_path("").is_none());
/// assert!(parse_file_path("/").is_none());
/// assert!(parse_file_path("..").is_none());
/// ```
#[must_use]
pub fn parse_file_path(raw: &str) -> Option<TypedPath<Unknown, File>> {
    logged(raw, file_node(raw))
}

/// Parses a path to a directory.
///
/// Fails only on the empty string.
///
/// # Examples
///
/// ```
/// use pathy::parse_dir_path;
///
/// assert_eq!(parse_dir_path("/").unwrap().to_string(), "/");
/// assert_eq!(parse_dir_path("..").unwrap().to_string(), "./..");
/// assert!(parse_dir_path("").is_none());
/// ```
#[must_use]
pub fn parse_dir_path(raw: &str) -> Option<TypedPath<Unknown, Directory>> {
    logged(raw, dir_node(raw))
}

/// Parses a path without committing to file or directory up front.
///
/// `a/b/`, `a/..` and `/` are directories; `a/b` is a file. Use
/// [`TypedPath::prove_type`] to find out which one you got.
///
/// # Examples
///
/// ```
/// use pathy::{parse_path, TypeProof};
///
/// let path = parse_path("/etc/hosts").unwrap();
/// assert!(matches!(path.prove_type(), TypeProof::File(_)));
///
/// let path = parse_path("/etc/").unwrap();
/// assert!(matches!(path.prove_type(), TypeProof::Directory(_)));
/// ```
#[must_use]
pub fn parse_path(raw: &str) -> Option<TypedPath<Unknown, Unknown>> {
    logged(raw, untyped_node(raw))
}

/// Parses with the parser selected by `T`, then checks the anchor against `K`.
impl<K: PathKind, T: FileType> FromStr for TypedPath<K, T> {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let node = marker::parse_node::<T>(raw).map_err(|reason| {
            log::debug!("rejected {} path {raw:?}: {reason}", T::NAME);
            Error::invalid(raw, reason)
        })?;

        if !marker::admits::<K>(node.anchor()) {
            log::debug!("path {raw:?} is not {}", K::NAME);
            return Err(Error::KindMismatch {
                path: node.serialize(),
                expected: K::NAME,
            });
        }

        Ok(Self::from_node(node))
    }
}

impl<K: PathKind, T: FileType> TryFrom<&str> for TypedPath<K, T> {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        raw.parse()
    }
}
