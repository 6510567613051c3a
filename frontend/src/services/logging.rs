use std::io;

use tracing::Level;

/// Buffers one formatted event and hands it to the browser console when dropped
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim();
        if line.starts_with("ERROR") {
            gloo::console::error!(line);
        } else if line.starts_with("WARN") {
            gloo::console::warn!(line);
        } else {
            gloo::console::log!(line);
        }
    }
}

/// Route `tracing` events from this crate and `shared` to the console.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleWriter::default)
        .try_init();

    if installed.is_err() {
        gloo::console::warn!("console logger already installed");
    }
}

/// Component-tagged logging helpers
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        tracing::debug!(component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        tracing::warn!(component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        tracing::error!(component, "{}", message);
    }
}
