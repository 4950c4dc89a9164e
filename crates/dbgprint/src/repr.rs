//! Textual representations of values, chosen by the shape of their type.
//!
//! Every supported type implements [`DebugRepr`]. The category a type falls into
//! decides how it is written:
//!
//! - `bool` is written as `True` or `False`.
//! - `char` is single quoted, strings are double quoted, and both escape the
//!   characters listed by [`escape_char`].
//! - Tuples are written as `<a,b,c>`.
//! - Index-addressable sequences and lists are written as `[a,b,c]`.
//! - Sets are written as `{a,b,c}` and maps as `{k:v,k:v}`.
//! - Container adapters are drained from a clone and written as a sequence.
//! - Numbers use their `Display` output, and other `Display` types can opt into
//!   that with [`native_repr!`](crate::native_repr).

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::{self, Write};
use std::iter;
use std::rc::Rc;
use std::sync::Arc;

/// A value which can be written in its debug representation.
pub trait DebugRepr {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result;
}

/// The delimiters wrapping a list of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiters {
    /// `[` and `]`, used for sequences.
    Brackets,
    /// `{` and `}`, used for sets and maps.
    Braces,
    /// `<` and `>`, used for pairs and tuples.
    Angles,
}

impl Delimiters {
    pub fn open(self) -> char {
        match self {
            Delimiters::Brackets => '[',
            Delimiters::Braces => '{',
            Delimiters::Angles => '<',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiters::Brackets => ']',
            Delimiters::Braces => '}',
            Delimiters::Angles => '>',
        }
    }
}

/// Write `items` separated by commas and wrapped in `delimiters`.
pub fn write_list<I>(out: &mut dyn Write, delimiters: Delimiters, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: DebugRepr,
{
    out.write_char(delimiters.open())?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx != 0 {
            out.write_char(',')?;
        }
        item.write_repr(out)?;
    }
    out.write_char(delimiters.close())
}

/// The escape sequence used for `c` inside character and string literals,
/// or `None` if `c` is written as is.
pub fn escape_char(c: char) -> Option<&'static str> {
    Some(match c {
        '\0' => "\\0",
        '\t' => "\\t",
        '\n' => "\\n",
        '\r' => "\\r",
        '\'' => "\\'",
        '"' => "\\\"",
        '\\' => "\\\\",
        _ => return None,
    })
}

/// Write `s` double quoted, with every special character escaped.
pub fn write_escaped_str(out: &mut dyn Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut start = 0;
    for (idx, c) in s.char_indices() {
        if let Some(escape) = escape_char(c) {
            out.write_str(&s[start..idx])?;
            out.write_str(escape)?;
            start = idx + c.len_utf8();
        }
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

/// A `Display` adapter for anything implementing [`DebugRepr`].
#[derive(Debug, Clone, Copy)]
pub struct Repr<'a, T: ?Sized>(pub &'a T);

impl<T: DebugRepr + ?Sized> fmt::Display for Repr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_repr(f)
    }
}

pub fn repr<T: DebugRepr + ?Sized>(value: &T) -> Repr<'_, T> {
    Repr(value)
}

/// Written after the partial output of a value whose `Display` impl failed.
pub const FAILED_MARKER: &str = "<?>";

/// Append the representation of `value` to `out`.
///
/// Only a `Display` impl registered through `native_repr!` can fail. Whatever it
/// wrote before failing is kept and followed by [`FAILED_MARKER`].
pub fn push_repr<T: DebugRepr + ?Sized>(out: &mut String, value: &T) {
    if value.write_repr(out).is_err() {
        out.push_str(FAILED_MARKER);
    }
}

/// Render the debug representation of `value` into a new string.
pub fn to_repr<T: DebugRepr + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    push_repr(&mut out, value);
    out
}

impl DebugRepr for bool {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(if *self { "True" } else { "False" })
    }
}

impl DebugRepr for char {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_char('\'')?;
        match escape_char(*self) {
            Some(escape) => out.write_str(escape)?,
            None => out.write_char(*self)?,
        }
        out.write_char('\'')
    }
}

impl DebugRepr for str {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_escaped_str(out, self)
    }
}

impl DebugRepr for String {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_escaped_str(out, self)
    }
}

impl DebugRepr for Cow<'_, str> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_escaped_str(out, self)
    }
}

crate::native_repr!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// Pointers and wrappers are transparent.

impl<T: DebugRepr + ?Sized> DebugRepr for &T {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_repr(out)
    }
}

impl<T: DebugRepr + ?Sized> DebugRepr for &mut T {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_repr(out)
    }
}

impl<T: DebugRepr + ?Sized> DebugRepr for Box<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_repr(out)
    }
}

impl<T: DebugRepr + ?Sized> DebugRepr for Rc<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_repr(out)
    }
}

impl<T: DebugRepr + ?Sized> DebugRepr for Arc<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).write_repr(out)
    }
}

impl<T: DebugRepr> DebugRepr for Reverse<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        self.0.write_repr(out)
    }
}

impl DebugRepr for () {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Angles, iter::empty::<()>())
    }
}

macro_rules! tuple_repr {
    (@impl $($name:ident)+) => {
        impl<$($name: DebugRepr),+> DebugRepr for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
                let ($($name,)+) = self;
                write_list(out, Delimiters::Angles, [$($name as &dyn DebugRepr),+].iter())
            }
        }
    };
    ($head:ident $($tail:ident)*) => {
        tuple_repr!(@impl $head $($tail)*);
        tuple_repr!($($tail)*);
    };
    () => {};
}

tuple_repr!(A B C D E F G H I J K L);

impl<T: DebugRepr> DebugRepr for [T] {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Brackets, self)
    }
}

impl<T: DebugRepr, const N: usize> DebugRepr for [T; N] {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Brackets, self)
    }
}

impl<T: DebugRepr> DebugRepr for Vec<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Brackets, self)
    }
}

impl<T: DebugRepr> DebugRepr for VecDeque<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Brackets, self)
    }
}

// Not index-addressable, but still a line of values rather than a set.
impl<T: DebugRepr> DebugRepr for LinkedList<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Brackets, self)
    }
}

impl<T: DebugRepr, S> DebugRepr for HashSet<T, S> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Braces, self)
    }
}

impl<T: DebugRepr> DebugRepr for BTreeSet<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Braces, self)
    }
}

/// A single `key:value` map entry.
struct Entry<'a, K, V>(&'a K, &'a V);

impl<K: DebugRepr, V: DebugRepr> DebugRepr for Entry<'_, K, V> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        self.0.write_repr(out)?;
        out.write_char(':')?;
        self.1.write_repr(out)
    }
}

impl<K: DebugRepr, V: DebugRepr, S> DebugRepr for HashMap<K, V, S> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Braces, self.iter().map(|(k, v)| Entry(k, v)))
    }
}

impl<K: DebugRepr, V: DebugRepr> DebugRepr for BTreeMap<K, V> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        write_list(out, Delimiters::Braces, self.iter().map(|(k, v)| Entry(k, v)))
    }
}

/// A restricted-access container which only exposes its next element
/// through a destructive pop.
///
/// Such containers are printed by popping every element off a clone.
pub trait ContainerAdapter: Clone {
    type Item;

    fn pop_next(&mut self) -> Option<Self::Item>;
}

impl<T: Ord + Clone> ContainerAdapter for BinaryHeap<T> {
    type Item = T;

    fn pop_next(&mut self) -> Option<T> {
        self.pop()
    }
}

/// Prints a [`ContainerAdapter`] as the sequence of values it pops, leaving
/// the adapter itself untouched.
#[derive(Debug, Clone, Copy)]
pub struct Drained<'a, C>(pub &'a C);

impl<C> DebugRepr for Drained<'_, C>
where
    C: ContainerAdapter,
    C::Item: DebugRepr,
{
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        let mut copy = self.0.clone();
        write_list(
            out,
            Delimiters::Brackets,
            iter::from_fn(move || copy.pop_next()),
        )
    }
}

impl<T: DebugRepr + Ord + Clone> DebugRepr for BinaryHeap<T> {
    fn write_repr(&self, out: &mut dyn Write) -> fmt::Result {
        Drained(self).write_repr(out)
    }
}
