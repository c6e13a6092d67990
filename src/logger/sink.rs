//! Output stream handles

use crate::utils::terminal;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Destination of log lines.
///
/// Cloning a sink shares the underlying stream.
#[derive(Clone)]
pub enum Sink {
    /// Process standard error (default)
    Stderr,
    /// Process standard output
    Stdout,
    /// Any writer supplied by the host
    Writer(SharedWriter),
}

impl Sink {
    /// Standard error
    pub fn stderr() -> Self {
        Sink::Stderr
    }

    /// Standard output
    pub fn stdout() -> Self {
        Sink::Stdout
    }

    /// Wrap an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// In-memory sink and a handle for reading back what was written
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        (Self::from_writer(buffer.clone()), buffer)
    }

    /// Whether ANSI colors make sense on this sink
    pub fn is_terminal(&self) -> bool {
        match self {
            Sink::Stderr => terminal::stderr_is_terminal(),
            Sink::Stdout => terminal::stdout_is_terminal(),
            Sink::Writer(_) => false,
        }
    }

    /// Write one complete line in a single call. Failures are traced and dropped.
    pub fn write_line(&self, line: &str) {
        if let Err(err) = self.try_write(line.as_bytes()) {
            tracing::trace!(error = %err, "devlog write failed");
        }
    }

    fn try_write(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(bytes)?;
                stderr.flush()
            }
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()
            }
            Sink::Writer(writer) => {
                let mut writer = lock(writer.as_ref());
                writer.write_all(bytes)?;
                writer.flush()
            }
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::Stderr
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Sink::Stderr"),
            Sink::Stdout => f.write_str("Sink::Stdout"),
            Sink::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

// A panic while holding the lock leaves the bytes intact; keep writing.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Shared in-memory buffer returned by [`Sink::capture`]
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
}

impl CaptureBuffer {
    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.bytes)).into_owned()
    }

    /// Number of `write` calls received
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }

    /// Discard captured output
    pub fn clear(&self) {
        lock(&self.bytes).clear();
        *lock(&self.writes) = 0;
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.bytes).extend_from_slice(buf);
        *lock(&self.writes) += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_capture() {
        let (sink, buffer) = Sink::capture();
        sink.write_line("one\n");
        sink.clone().write_line("two\n");

        assert_eq!(buffer.contents(), "one\ntwo\n");
        assert_eq!(buffer.write_count(), 2);
        assert!(!sink.is_terminal());

        buffer.clear();
        assert_eq!(buffer.contents(), "");
        assert_eq!(buffer.write_count(), 0);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let sink = Sink::from_writer(BrokenPipe);
        sink.write_line("lost\n");
    }
}
