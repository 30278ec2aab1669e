//! Composition: a directory followed by a relative path.
//!
//! `join` is the only way to combine paths. It is total: the two unsound
//! combinations, a file base and an absolute suffix, do not type-check.
//!
//! ```compile_fail
//! use pathy::{file, root};
//!
//! // A file has no children.
//! let _ = file("a.txt") / file("b.txt");
//! ```
//!
//! ```compile_fail
//! use pathy::root;
//!
//! // Only relative paths can be appended.
//! let _ = root() / root();
//! ```

use std::ops::Div;

use super::marker::{Directory, Relative};
use super::typed::TypedPath;

impl<K> TypedPath<K, Directory> {
    /// Appends `suffix` to this directory.
    ///
    /// The result keeps this path's kind and takes the suffix's type. Joining
    /// `.` is the identity, and joining is associative.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{current, dir, file, root};
    ///
    /// let users = root().join(dir("Users"));
    /// let hello = users.clone().join(dir("bkase").join(file("Hello.txt")));
    /// assert_eq!(hello.to_string(), "/Users/bkase/Hello.txt");
    ///
    /// assert_eq!(users.clone().join(current()), users);
    /// ```
    #[must_use]
    pub fn join<T2>(self, suffix: TypedPath<Relative, T2>) -> TypedPath<K, T2> {
        TypedPath::from_node(self.into_node().join(suffix.into_node()))
    }
}

/// `base / suffix` is [`join`](TypedPath::join).
impl<K, T2> Div<TypedPath<Relative, T2>> for TypedPath<K, Directory> {
    type Output = TypedPath<K, T2>;

    fn div(self, suffix: TypedPath<Relative, T2>) -> Self::Output {
        self.join(suffix)
    }
}
