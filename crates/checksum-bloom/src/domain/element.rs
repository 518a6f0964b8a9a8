//! Byte rendering for filter elements
//!
//! The filter hashes bytes, never values. Anything that can be rendered to
//! a deterministic byte sequence can be inserted.

use std::borrow::Cow;

/// A value that can be inserted into or queried against a filter
///
/// Two values that must be treated as the same element have to render to
/// identical bytes, and the rendering must not change between calls.
pub trait Element {
    /// Bytes fed to the hash family
    fn element_bytes(&self) -> Cow<'_, [u8]>;
}

impl Element for str {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for String {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for [u8] {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> Element for [u8; N] {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Element for Vec<u8> {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Element for char {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        let mut buf = [0u8; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        (**self).element_bytes()
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        (**self).element_bytes()
    }
}

// Integers hash as big-endian two's-complement bytes.
macro_rules! impl_element_for_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn element_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_be_bytes().to_vec())
                }
            }
        )*
    };
}

impl_element_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// Pointer-width integers are widened so the bytes match on 32- and 64-bit targets.
impl Element for usize {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as u64).to_be_bytes().to_vec())
    }
}

impl Element for isize {
    fn element_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as i64).to_be_bytes().to_vec())
    }
}
