use crate::repr::{push_repr, DebugRepr};

/// A single line of debug output, as printed by [`debug!`](crate::debug).
///
/// The line starts with the bracketed source text of the printed expressions,
/// followed by a colon and one space separated representation per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    buf: String,
}

impl Line {
    pub fn new(source: &str) -> Self {
        let mut buf = String::with_capacity(source.len() + 16);
        buf.push('[');
        buf.push_str(source);
        buf.push_str("] :");
        Self { buf }
    }

    pub fn push<T: DebugRepr + ?Sized>(&mut self, value: &T) {
        self.buf.push(' ');
        push_repr(&mut self.buf, value);
    }

    pub fn finish(mut self) -> String {
        self.buf.push('\n');
        self.buf
    }
}
