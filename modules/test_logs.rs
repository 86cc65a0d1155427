//! Capturing log output in tests

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Log writer that appends every formatted line to a shared buffer
#[derive(Default, Debug, Clone)]
pub struct TestWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestWriter {
    /// Return a writer and a handle to the output it will capture
    pub fn new() -> (Self, Captured) {
        let writer = Self::default();
        let captured = Captured(Arc::clone(&writer.buffer));
        (writer, captured)
    }
}

impl io::Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for TestWriter {
    type Writer = TestWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Debug)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl std::fmt::Display for Captured {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.0.lock().unwrap();
        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

/// Run `f` under an `info`-level subscriber without timestamps, targets or
/// ANSI escapes, and return everything it logged
pub fn capture_logs<F, T>(f: F) -> (T, String)
where
    F: FnOnce() -> T,
{
    let (writer, captured) = TestWriter::new();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    (result, captured.to_string())
}
