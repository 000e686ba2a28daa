use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::{io, io::Write};

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stderr = io::stderr();
        let mut lock = stderr.lock();

        // Nowhere left to report a failing stderr
        let _ = DecoratedLog::write_record(
            &mut lock,
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

pub static LOGGER: Logger = Logger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Maps `-q` and the number of `-v` flags to a level. Warnings by default.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }

    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writer wrapper which prints a log level in front of every line of text
///
/// A single record may be handed over in several pieces by the formatting
/// machinery, so we have to remember whether the next piece starts a line.
struct DecoratedLog<'writer, W: Write> {
    writer: &'writer mut W,
    log_level: log::Level,
    at_line_start: bool,
}

impl<'writer, W: Write> DecoratedLog<'writer, W> {
    fn write_record(
        writer: &'writer mut W,
        log_level: log::Level,
        args: &std::fmt::Arguments,
    ) -> io::Result<()> {
        let mut decorated_writer = Self {
            writer,
            log_level,
            at_line_start: true,
        };
        writeln!(decorated_writer, "{}", *args)
    }
}

impl<'writer, W: Write> Write for DecoratedLog<'writer, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut lines = buf.split(|&b| b == b'\n').peekable();

        while let Some(line) = lines.next() {
            let is_last = lines.peek().is_none();

            // A trailing newline leaves an empty last piece, nothing to print
            if is_last && line.is_empty() {
                break;
            }

            if self.at_line_start {
                write!(self.writer, "{}: ", self.log_level)?;
                self.at_line_start = false;
            }
            self.writer.write_all(line)?;

            if !is_last {
                self.writer.write_all(b"\n")?;
                self.at_line_start = true;
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
