use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

pub struct OtpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
    fn flush(&mut self);

    // Lets `write!(writer, ...)` target stdout
    fn write_fmt(&mut self, args: fmt::Arguments) {
        self.write(&args.to_string());
    }
}

impl OutErr for OtpWriter {
    fn write_err(&mut self, s: &str) {
        match self.err.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => log::error!("failed to write to stderr: {}", e),
        }
    }

    fn write(&mut self, s: &str) {
        match self.out.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => log::error!("failed to write to stdout: {}", e),
        }
    }

    fn flush(&mut self) {
        match self.out.flush() {
            Ok(_) => (),
            Err(e) => log::error!("failed to flush stdout: {}", e),
        }
    }

    fn write_fmt(&mut self, args: fmt::Arguments) {
        match self.out.write_fmt(args) {
            Ok(_) => (),
            Err(e) => log::error!("failed to write to stdout: {}", e),
        }
    }
}
