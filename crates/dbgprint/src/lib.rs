//! Shape-aware debug printing.
//!
//! [`debug!`] prints the source text of its arguments followed by their debug
//! representations:
//!
//! ```
//! use dbgprint::debug;
//! use std::collections::BTreeMap;
//!
//! let pair = (3, 4);
//! let mut ages = BTreeMap::new();
//! ages.insert("ada", 36);
//!
//! debug!(pair, ages); // [pair, ages] : <3,4> {"ada":36}
//! ```
//!
//! Output goes to stderr unless another stream is chosen with
//! [`set_debug_stream`] or a config is [`install`]ed.

mod line;
mod macros;
pub mod repr;
pub mod sink;

#[cfg(test)]
mod tests;

pub use self::{
    line::Line,
    repr::{
        escape_char, push_repr, repr, to_repr, write_escaped_str, write_list, ContainerAdapter,
        DebugRepr, Delimiters, Drained, Repr, FAILED_MARKER,
    },
    sink::{emit, install, is_enabled, set_debug_stream, set_enabled, SharedBuffer, Stream},
};
pub use dbgprint_config::{Config, StreamKind};
