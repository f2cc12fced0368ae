//! Output sinks
//!
//!     A backend owns exactly one sink for the duration of one document pass. The sink starts
//!     as a target description and is opened by `document_start`; a file target that cannot
//!     be created is the single recoverable fault in the engine: a warning goes to stderr
//!     and standard output is substituted so the pass still completes. Backends can also run
//!     against an in-memory buffer, which is how the test suite captures output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a backend's output should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Open a writer for this target, falling back to standard output with a
    /// warning when a file cannot be created.
    pub fn open(&self) -> Box<dyn Write> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::File(path) => match File::create(path) {
                Ok(file) => Box::new(BufWriter::new(file)),
                Err(err) => {
                    eprintln!(
                        "bnfdoc: can't open output file {}: {}. Using standard output.",
                        path.display(),
                        err
                    );
                    Box::new(io::stdout())
                }
            },
        }
    }
}

enum SinkState {
    /// Not yet opened
    Target(OutputTarget),
    Writer(Box<dyn Write>),
    Buffer(String),
}

/// The output sink owned by one backend for one document pass
pub struct Sink {
    state: SinkState,
    write_failed: bool,
}

impl Sink {
    pub fn for_target(target: OutputTarget) -> Self {
        Self {
            state: SinkState::Target(target),
            write_failed: false,
        }
    }

    /// An in-memory sink; retrieve the output with [`Sink::take_string`]
    pub fn buffer() -> Self {
        Self {
            state: SinkState::Buffer(String::new()),
            write_failed: false,
        }
    }

    /// Resolve a pending target into an open writer. Buffers stay as they are.
    pub fn open(&mut self) {
        if let SinkState::Target(target) = &self.state {
            self.state = SinkState::Writer(target.open());
        }
    }

    pub fn write_str(&mut self, s: &str) {
        match &mut self.state {
            SinkState::Buffer(buffer) => buffer.push_str(s),
            SinkState::Writer(writer) => {
                if let Err(err) = writer.write_all(s.as_bytes()) {
                    if !self.write_failed {
                        eprintln!("bnfdoc: error writing output: {}", err);
                        self.write_failed = true;
                    }
                }
            }
            // Writing before document_start opens the sink is a driver bug;
            // drop the text rather than panic mid-pass
            SinkState::Target(_) => {}
        }
    }

    /// Flush a writer at the end of the pass.
    pub fn finish(&mut self) {
        if let SinkState::Writer(writer) = &mut self.state {
            if let Err(err) = writer.flush() {
                if !self.write_failed {
                    eprintln!("bnfdoc: error writing output: {}", err);
                    self.write_failed = true;
                }
            }
        }
    }

    /// Take the accumulated text out of a buffer sink.
    pub fn take_string(&mut self) -> Option<String> {
        match &mut self.state {
            SinkState::Buffer(buffer) => Some(std::mem::take(buffer)),
            _ => None,
        }
    }
}

/// Derive an output path from the input path and a backend's file extension.
///
/// An input that already carries the target extension gets it appended again
/// rather than silently overwritten; any other extension is replaced; a bare
/// name gets the extension added.
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(current) if current == extension => append_extension(input, extension),
        Some(_) => input.with_extension(extension),
        None => append_extension(input, extension),
    }
}

fn append_extension(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
