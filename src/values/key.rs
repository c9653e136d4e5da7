use std::borrow::Cow;

use crate::prelude::*;

impl ToKey for str {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ToKey for String {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl ToKey for Cow<'_, str> {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: ToKey + ?Sized> ToKey for &T {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        (**self).to_key()
    }
}

impl<T: ToKey + ?Sized> ToKey for Box<T> {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        (**self).to_key()
    }
}

/// `None` is an unset key, and is always rejected by the tree.
impl<T: ToKey> ToKey for Option<T> {
    fn to_key(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(ToKey::to_key)
    }
}

impl_to_key_via_display!(
    char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);
