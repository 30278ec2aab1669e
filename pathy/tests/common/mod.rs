//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for paths and the proptest
//! strategies shared by the property suites.

pub mod strategies;

use pathy::{current, dir, parent, root, AbsoluteDirPath, RelativeDirPath};

/// Builder for directory paths from a list of steps.
///
/// # Examples
///
/// ```no_run
/// # use common::PathFixture;
/// let path = PathFixture::new()
///     .with_dir("Users")
///     .with_dir("bkase")
///     .build_absolute();
/// assert_eq!(path.to_string(), "/Users/bkase");
/// ```
#[allow(dead_code)]
pub struct PathFixture {
    steps: Vec<Option<String>>,
}

#[allow(dead_code)]
impl PathFixture {
    /// Creates a fixture with no steps: `.` or `/` depending on the build.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a named directory.
    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Some(name.into()));
        self
    }

    /// Appends a `..` step.
    pub fn with_parent(mut self) -> Self {
        self.steps.push(None);
        self
    }

    /// Builds the steps beneath `.`.
    pub fn build_relative(self) -> RelativeDirPath {
        self.steps.into_iter().fold(current(), |path, step| match step {
            Some(name) => path / dir(name),
            None => path / parent(),
        })
    }

    /// Builds the steps beneath `/`.
    pub fn build_absolute(self) -> AbsoluteDirPath {
        root() / self.build_relative()
    }
}

impl Default for PathFixture {
    fn default() -> Self {
        Self::new()
    }
}
