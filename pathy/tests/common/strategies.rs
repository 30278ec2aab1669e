//! Proptest strategies for generating paths.

#![allow(dead_code)]

use proptest::prelude::*;

use pathy::{
    current, dir, file, parent, root, AbsoluteDirPath, AbsoluteFilePath, RelativeDirPath,
    RelativeFilePath,
};

/// A segment name that is never `.` or `..`.
pub fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,9}"
}

/// A relative directory of up to five steps, mixing names and `..`.
pub fn relative_dir() -> impl Strategy<Value = RelativeDirPath> {
    prop::collection::vec(prop::option::weighted(0.8, name()), 0..5).prop_map(|steps| {
        steps.into_iter().fold(current(), |path, step| match step {
            Some(name) => path / dir(name),
            None => path / parent(),
        })
    })
}

/// An absolute directory.
pub fn absolute_dir() -> impl Strategy<Value = AbsoluteDirPath> {
    relative_dir().prop_map(|rel| root() / rel)
}

/// A relative file.
pub fn relative_file() -> impl Strategy<Value = RelativeFilePath> {
    (relative_dir(), name()).prop_map(|(dir, name)| dir / file(name))
}

/// An absolute file.
pub fn absolute_file() -> impl Strategy<Value = AbsoluteFilePath> {
    (absolute_dir(), name()).prop_map(|(dir, name)| dir / file(name))
}
