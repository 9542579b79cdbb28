//! Target sink abstraction: anything that can receive appended text.

/// Writable text sink the animation reveals characters into.
pub trait Writable {
    /// Append `text` after whatever is already displayed.
    fn append(&mut self, text: &str);
}

impl Writable for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

impl<W: Writable + ?Sized> Writable for &mut W {
    fn append(&mut self, text: &str) {
        (**self).append(text);
    }
}
