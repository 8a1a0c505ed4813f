use std::io::Write;

use log::LevelFilter;

// Fixed filter, RUST_LOG is not consulted. Output goes to stderr so the
// passcode line on stdout stays intact.
pub fn init_logger() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}: {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}
