use std::borrow::Cow;

pub use crate::{collections::*, error::*, impl_to_key_via_display};

/// A value that can be used as a key inside a [`Tree`].
///
/// Keys are ordered and compared by their canonical textual form, so two keys
/// of different types with the same text address the same entry.
pub trait ToKey {
    /// Returns the canonical textual form of the key, or `None` when the key
    /// is unset.
    fn to_key(&self) -> Option<Cow<'_, str>>;

    /// Returns the text used to order this key inside the tree.
    ///
    /// Fails with [`Error::InvalidArgument`] if the key is unset, empty or
    /// made only of whitespace.
    fn comparison_key(&self) -> Result<Cow<'_, str>> {
        match self.to_key() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(Error::InvalidArgument("key")),
        }
    }
}
