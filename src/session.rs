use std::fmt;
use std::io::{BufRead, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::base32;
use crate::config::Settings;
use crate::error::SessionError;
use crate::totp::{get_totp, GetTime};
use crate::writer::OutErr;

const PROMPT: &str = "Enter secret key: ";
const BANNER: &str = "TOTP Generator - Press Ctrl+C to exit\n\n";

pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Never print key material
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes)", self.0.len())
    }
}

pub struct Passcode {
    pub code: u32,
    pub digits: u32,
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.code, width = self.digits as usize)
    }
}

// `wait` returns false once the display loop should stop
pub trait Ticker {
    fn wait(&mut self) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        StopHandle::default()
    }

    // The binary relies on Ctrl+C; embedding callers stop the loop through here
    #[allow(dead_code)]
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct SleepTicker {
    interval: Duration,
    stop: StopHandle,
}

impl SleepTicker {
    pub fn new(interval: Duration, stop: StopHandle) -> Self {
        SleepTicker { interval, stop }
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        thread::sleep(self.interval);
        !self.stop.is_stopped()
    }
}

// Raw bytes in, so stray non-UTF-8 bytes reach the decoder as U+FFFD and get
// rejected there like any other bad character
fn normalize(mut line: Vec<u8>, max_chars: usize) -> String {
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
    line.truncate(max_chars);
    line.make_ascii_uppercase();
    String::from_utf8_lossy(&line)
        .trim_end_matches('=')
        .to_string()
}

pub fn read_secret<R, W>(
    reader: &mut R,
    writer: &mut W,
    settings: &Settings,
) -> Result<SecretKey, SessionError>
where
    R: BufRead,
    W: OutErr,
{
    writer.write(PROMPT);
    writer.flush();

    // Room for the line ending; anything past it stays unread
    let limit = settings.max_input_chars as u64 + 2;
    let mut line = Vec::new();
    let read = reader
        .by_ref()
        .take(limit)
        .read_until(b'\n', &mut line)
        .map_err(SessionError::ReadFailed)?;
    if read == 0 {
        return Err(SessionError::EndOfInput);
    }

    let input = normalize(line, settings.max_input_chars);
    let key = base32::decode(&input, settings.max_key_bytes).map_err(|err| {
        log::warn!("rejected secret key: {}", err);
        err
    })?;

    log::info!("decoded secret key ({} bytes)", key.len());
    Ok(SecretKey(key))
}

pub fn run_display<C, T, W>(
    key: &SecretKey,
    clock: &C,
    ticker: &mut T,
    writer: &mut W,
    settings: &Settings,
) where
    C: GetTime,
    T: Ticker,
    W: OutErr,
{
    writer.write(BANNER);

    loop {
        let passcode = Passcode {
            code: get_totp(key.as_bytes(), clock, settings.time_step, settings.digits),
            digits: settings.digits,
        };
        write!(writer, "\rYour passcode: {}", passcode);
        writer.flush();

        if !ticker.wait() {
            break;
        }
    }

    writer.write("\n");
    writer.flush();
}
