#![forbid(unsafe_code)]

//! Conversion of insertable values into text.
//!
//! Every insert/append overload of a string builder reduces to "turn the
//! value into text, then splice it in". [`TextValue`] is that first step.
//! Numbers, booleans and characters use their `Display` form; an absent
//! value (`None`) becomes the four characters `"null"`.

use std::borrow::Cow;

/// Text written for an absent value.
pub const NULL_TEXT: &str = "null";

/// A value that can be inserted into an editor.
pub trait TextValue {
    /// The text this value inserts.
    fn to_text(&self) -> Cow<'_, str>;
}

impl TextValue for str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextValue for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TextValue for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl TextValue for [char] {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.iter().collect())
    }
}

impl<const N: usize> TextValue for [char; N] {
    fn to_text(&self) -> Cow<'_, str> {
        self.as_slice().to_text()
    }
}

impl TextValue for Vec<char> {
    fn to_text(&self) -> Cow<'_, str> {
        self.as_slice().to_text()
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }
}

impl<T: TextValue> TextValue for Option<T> {
    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.to_text(),
            None => Cow::Borrowed(NULL_TEXT),
        }
    }
}

macro_rules! display_text_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_text_value!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
