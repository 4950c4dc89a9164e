//! The process-wide stream debug output is written to.
//!
//! The stream is meant to be chosen once at startup, either directly through
//! [`set_debug_stream`] or from a loaded [`Config`] through [`install`], and is
//! then read by every print. Until then output goes to stderr.

use dbgprint_config::{Config, StreamKind};
use log::{trace, warn};
use once_cell::sync::Lazy;
use std::{
    fmt,
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

/// A destination for debug output.
pub enum Stream {
    Stdout,
    Stderr,
    /// Discards everything written to it.
    Null,
    Writer(Box<dyn Write + Send>),
}

impl Stream {
    /// Wrap an arbitrary writer.
    pub fn writer(out: impl Write + Send + 'static) -> Self {
        Stream::Writer(Box::new(out))
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("Stdout"),
            Stream::Stderr => f.write_str("Stderr"),
            Stream::Null => f.write_str("Null"),
            Stream::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl From<StreamKind> for Stream {
    fn from(kind: StreamKind) -> Self {
        match kind {
            StreamKind::Stdout => Stream::Stdout,
            StreamKind::Stderr => Stream::Stderr,
            StreamKind::Null => Stream::Null,
        }
    }
}

impl From<SharedBuffer> for Stream {
    fn from(buffer: SharedBuffer) -> Self {
        Stream::writer(buffer)
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Stream::Stdout => io::stdout().write(buf),
            Stream::Stderr => io::stderr().write(buf),
            Stream::Null => Ok(buf.len()),
            Stream::Writer(out) => out.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().lock().write_all(buf),
            Stream::Stderr => io::stderr().lock().write_all(buf),
            Stream::Null => Ok(()),
            Stream::Writer(out) => out.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
            Stream::Null => Ok(()),
            Stream::Writer(out) => out.flush(),
        }
    }
}

static SINK: Lazy<Mutex<Stream>> = Lazy::new(|| Mutex::new(Stream::Stderr));
static ENABLED: AtomicBool = AtomicBool::new(true);

fn lock() -> MutexGuard<'static, Stream> {
    // a panic while writing leaves the stream itself usable
    SINK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the debug stream, returning the previous one.
pub fn set_debug_stream(stream: impl Into<Stream>) -> Stream {
    let stream = stream.into();
    trace!("setting debug stream to {:?}", stream);
    std::mem::replace(&mut *lock(), stream)
}

/// Enable or disable [`debug!`](crate::debug) output.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Apply the stream and the enabled switch of a loaded config.
pub fn install(config: &Config) {
    set_debug_stream(config.stream);
    set_enabled(config.enabled);
}

/// Run `f` with exclusive access to the debug stream.
pub fn with_sink<R>(f: impl FnOnce(&mut dyn Write) -> R) -> R {
    f(&mut *lock())
}

/// Write `text` to the debug stream in one piece and flush it.
///
/// Write errors are logged and otherwise ignored.
pub fn emit(text: &str) {
    let res = with_sink(|out| {
        out.write_all(text.as_bytes())?;
        out.flush()
    });

    if let Err(err) = res {
        warn!("failed to write debug output: {}", err);
    }
}

/// An in-memory writer whose clones all share the same buffer.
///
/// Installing a clone as the debug stream lets the output be read back later.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn bytes(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Everything written so far, clearing the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
