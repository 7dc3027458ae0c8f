//! Console writer
//!
//! The fmt layer asks for one writer per event. The writer collects the
//! formatted bytes and, when dropped, emits the finished line to the console
//! and the shared buffer.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::buffer::LogBuffer;

#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    buffer: Arc<Mutex<LogBuffer>>,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: Arc<Mutex<LogBuffer>>) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(Level::INFO, self.buffer.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(*meta.level(), self.buffer.clone())
    }
}

pub struct LineWriter {
    level: Level,
    bytes: Vec<u8>,
    buffer: Arc<Mutex<LogBuffer>>,
}

impl LineWriter {
    pub fn new(level: Level, buffer: Arc<Mutex<LogBuffer>>) -> Self {
        Self {
            level,
            bytes: Vec::new(),
            buffer,
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        emit(self.level, &line);
        if let Ok(mut guard) = self.buffer.lock() {
            guard.push(line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
