//! The printing macros.

/// Print the source text of the given expressions followed by their debug
/// representations to the current debug stream.
///
/// ```
/// # use dbgprint::debug;
/// let x = 1;
/// let name = "mao";
/// debug!(x, name); // [x, name] : 1 "mao"
/// ```
///
/// Nothing is evaluated or written while debug output is disabled.
#[macro_export]
macro_rules! debug {
    ($($expr:expr),* $(,)?) => {{
        if $crate::sink::is_enabled() {
            $crate::sink::emit(&$crate::debug_line!($($expr),*));
        }
    }};
}

/// Like [`debug!`], but writes to the given `io::Write` and returns the
/// `io::Result` of the write. This ignores whether debug output is enabled.
#[macro_export]
macro_rules! debug_to {
    ($out:expr; $($expr:expr),* $(,)?) => {
        ::std::io::Write::write_all(&mut $out, $crate::debug_line!($($expr),*).as_bytes())
    };
}

/// Build the line [`debug!`] would print, including the trailing newline.
#[macro_export]
macro_rules! debug_line {
    ($($expr:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut line = $crate::Line::new(stringify!($($expr),*));
        $(line.push(&$expr);)*
        line.finish()
    }};
}

/// Make types print through their `Display` implementation.
///
/// ```
/// use std::fmt;
///
/// struct Meters(f64);
///
/// impl fmt::Display for Meters {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
///
/// dbgprint::native_repr!(Meters);
/// assert_eq!(dbgprint::to_repr(&vec![Meters(1.5)]), "[1.5m]");
/// ```
#[macro_export]
macro_rules! native_repr {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DebugRepr for $ty {
                fn write_repr(&self, out: &mut dyn ::std::fmt::Write) -> ::std::fmt::Result {
                    ::std::write!(out, "{}", self)
                }
            }
        )+
    };
}
