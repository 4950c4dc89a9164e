mod demos;
mod panic_hook;


pub use self::{demos::*, panic_hook::*};

use colored::*;
use dbgprint_config::{Config, StreamKind};
use dbgprint_harness::TestSuite;
use std::env;

/// Every demo test, in the order they are run.
pub fn demo_suite() -> TestSuite {
    TestSuite::new()
        .with(TestBasicType)
        .with(TestStrings)
        .with(TestSequences)
        .with(TestAssociative)
        .with(TestTuples)
        .with(TestAdapters)
}

/// Work out the config for a demo run.
///
/// The stream given on the command line wins, in which case `DBGPRINT_STREAM` is
/// not read at all. Otherwise `DBGPRINT_STREAM` wins over a `dbgprint.toml`,
/// which is only searched for unless `no_config` is set. Without any of them the
/// demo prints to stdout.
pub fn resolve_config(
    stream: Option<StreamKind>,
    no_config: bool,
) -> Result<Config, dbgprint_config::Error> {
    let cwd = if no_config {
        None
    } else {
        env::current_dir().ok()
    };
    let fallback = Config {
        stream: StreamKind::Stdout,
        ..Config::default()
    };

    match stream {
        Some(stream) => {
            let config = Config::discover(cwd.as_deref(), no_config, fallback)?;
            Ok(Config { stream, ..config })
        }
        None => Config::load_from(cwd.as_deref(), no_config, fallback),
    }
}

pub fn show_tests(suite: &TestSuite) {
    println!("{}:", "tests".bright_green());
    for name in suite.names() {
        println!(" {}", name.white());
    }
    println!();
    println!(
        "{}: pass part of a name to run only the matching tests",
        "help".bright_green()
    );
}
