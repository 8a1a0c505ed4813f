use clap::{command, Command};
use std::io;
use std::process;

mod base32;
mod config;
mod error;
mod hotp;
mod logger;
mod session;
mod totp;
mod writer;


use config::Settings;
use session::{read_secret, run_display, SleepTicker, StopHandle};
use totp::Clock;
use writer::{OtpWriter, OutErr};

// TOTP https://datatracker.ietf.org/doc/html/rfc6238
// SHA-1, 6 digits, 30 second windows

fn cli() -> Command<'static> {
    command!().about("Show the current TOTP passcode for a Base32 secret key")
}

fn main() {
    let _matches = cli().get_matches();
    logger::init_logger();

    let settings = Settings::default();
    let mut writer = OtpWriter::new();

    let key = match read_secret(&mut io::stdin().lock(), &mut writer, &settings) {
        Ok(key) => key,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            process::exit(1);
        }
    };

    let mut ticker = SleepTicker::new(settings.refresh_interval, StopHandle::new());
    run_display(&key, &Clock::new(), &mut ticker, &mut writer, &settings);
}
