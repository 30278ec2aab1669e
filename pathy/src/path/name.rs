//! Segment names.
//!
//! Names are opaque string wrappers. Construction does not reject empty
//! names or names containing `/`; the parsers never produce either.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a file, the last segment of a file path.
///
/// # Examples
///
/// ```
/// use pathy::FileName;
///
/// let name = FileName::from("Hello.txt");
/// assert_eq!(name.as_str(), "Hello.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

/// The name of a directory segment.
///
/// # Examples
///
/// ```
/// use pathy::DirName;
///
/// let name = DirName::new("Users");
/// assert_eq!(name.to_string(), "Users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirName(String);

macro_rules! impl_name {
    ($name:ident) => {
        impl $name {
            /// Wraps a segment name.
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwraps the owned string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_name!(FileName);
impl_name!(DirName);
