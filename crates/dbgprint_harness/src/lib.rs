//! A minimal runner for labeled, ad-hoc tests which print through `dbgprint`.
//!
//! ```
//! use dbgprint::debug;
//! use dbgprint_harness::{declare_test, LabeledTest};
//!
//! declare_test!(TestSquares {
//!     let squares: Vec<_> = (1..4).map(|x| x * x).collect();
//!     debug!(squares);
//! });
//!
//! // --------------------TestSquares--------------------
//! // [squares] : [1,4,9]
//! //
//! TestSquares.run();
//! ```

mod suite;


pub use suite::TestSuite;

/// The number of dashes on each side of a test's name in its header.
pub const HEADER_DASHES: usize = 20;

/// The header line printed before running the test called `name`.
pub fn header_for(name: &str) -> String {
    let dashes = "-".repeat(HEADER_DASHES);
    format!("{}{}{}", dashes, name, dashes)
}

/// A named unit of output.
///
/// Running it prints its header, runs the body and then prints a blank line, all
/// to the current debug stream. While debug output is disabled the body still
/// runs but nothing is printed. A panic in the body is not caught.
pub trait LabeledTest {
    fn name(&self) -> &str;

    fn body(&self);

    fn header(&self) -> String {
        header_for(self.name())
    }

    fn run(&self) {
        log::debug!("running {}", self.name());
        if dbgprint::is_enabled() {
            dbgprint::emit(&format!("{}\n", self.header()));
        }
        self.body();
        if dbgprint::is_enabled() {
            dbgprint::emit("\n");
        }
    }
}

/// Declare a unit struct implementing [`LabeledTest`], named after the struct and
/// running the given block as its body.
#[macro_export]
macro_rules! declare_test {
    ($(#[$meta:meta])* $vis:vis $name:ident $body:block) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::LabeledTest for $name {
            fn name(&self) -> &str {
                stringify!($name)
            }

            fn body(&self) $body
        }
    };
}
