//! Domain names.
//!
//! A domain name is a sequence of labels. In its presentation format, the
//! labels are separated by dots. This module provides [`Name`], a domain
//! name kept in its presentation format, which is how records arrive at the
//! encoder, together with the conversion into the uncompressed wire format
//! of [RFC 1035], section 3.1.
//!
//! The wire format is the sequence of labels, each preceded by an octet
//! giving its length, followed by a single zero octet marking the end of
//! the name (which really is the empty label of the root).
//!
//! No validation happens here. Labels longer than 63 octets and names
//! longer than 255 octets are encoded as given.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::wire::Compose;
use alloc::string::String;
use core::{fmt, str};
use octseq::builder::OctetsBuilder;

//------------ Name ----------------------------------------------------------

/// A domain name in presentation format.
///
/// Both the empty string and a single dot denote the root name.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Name(String);

/// # Creation and Conversion
///
impl Name {
    /// The presentation format of the root name.
    pub const ROOT: &'static str = ".";

    /// Creates a new name from its presentation format.
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    /// Creates the root name.
    pub fn root() -> Self {
        Name(String::from(Self::ROOT))
    }

    /// Returns the presentation format of the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Converts the name into its underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// # Properties
///
impl Name {
    /// Returns whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.0.is_empty() || self.0 == Self::ROOT
    }

    /// Returns an iterator over the labels that end up in the wire format.
    ///
    /// The iterator stops at the first empty label. Everything after it,
    /// including a trailing dot, is not part of the encoded name.
    pub fn labels(&self) -> Labels {
        Labels { inner: self.0.split('.'), done: false }
    }
}

/// # Composing
///
impl Name {
    /// Appends the uncompressed wire format of the name to `target`.
    ///
    /// The length octet of each label is the low eight bits of the label’s
    /// length in octets.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        if self.is_root() {
            return 0u8.compose(target);
        }
        for label in self.labels() {
            (label.len() as u8).compose(target)?;
            target.append_slice(label.as_bytes())?;
        }
        0u8.compose(target)
    }

    /// Returns the length of the wire format of the name.
    pub fn compose_len(&self) -> usize {
        self.labels().map(|label| label.len() + 1).sum::<usize>() + 1
    }
}

//--- From and FromStr

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name)
    }
}

impl<'a> From<&'a str> for Name {
    fn from(name: &'a str) -> Self {
        Name(name.into())
    }
}

impl str::FromStr for Name {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Name(s.into()))
    }
}

//--- AsRef

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a [`Name`].
///
/// Created via [`Name::labels`].
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    inner: str::Split<'a, char>,
    done: bool,
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some("") | None => {
                self.done = true;
                None
            }
            Some(label) => Some(label),
        }
    }
}

//============ Testing =======================================================
