use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use slt::cli::Cli;
use slt::error::SltError;
use slt::extractor::LineExtractor;
use slt::projector::{Projector, RECORD_MARKER};
use slt::InputEvent;

/// Read size per chunk; chunk boundaries need not align with lines.
const CHUNK_SIZE: usize = 64 * 1024;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when slt exits early.
    reset_sigpipe();

    let Cli {} = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();

    let mut extractor = LineExtractor::new();
    let mut sink = Sink {
        writer: BufWriter::new(stdout.lock()),
        projector: Projector::new(),
        status: Ok(()),
    };

    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => extractor.push_chunk(&chunk[..n], &mut |event| sink.emit(event)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                eprintln!("slt: read error: {e}");
                return ExitCode::from(2);
            }
        }
        if sink.status.is_err() {
            break;
        }
    }

    if sink.status.is_ok() {
        extractor.finish(&mut |event| sink.emit(event));
    }

    if let Err(e) = sink.status {
        if e.is_broken_pipe() {
            return ExitCode::SUCCESS;
        }
        eprintln!("slt: write error: {e}");
        return ExitCode::from(2);
    }

    if let Err(e) = sink.writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("slt: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

/// Projection sink: projects each delivered event and prints the marker
/// line plus the serialized record.
struct Sink<W: Write> {
    writer: W,
    projector: Projector,
    status: Result<(), SltError>,
}

impl<W: Write> Sink<W> {
    /// The first failure sticks; later events are dropped so the read loop
    /// can notice and stop.
    fn emit(&mut self, event: InputEvent) {
        if self.status.is_err() {
            return;
        }
        self.status = self.write_record(event);
    }

    fn write_record(&mut self, event: InputEvent) -> Result<(), SltError> {
        let record = self.projector.project(event);
        let json = serde_json::to_string(&record)?;
        writeln!(self.writer, "{RECORD_MARKER}\n{json}")?;
        Ok(())
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `slt`, this causes the *upstream* writer (e.g. a
/// Python process) to receive a `BrokenPipeError` when `slt` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
