use std::time::Duration;

const TIME_STEP: u64 = 30;
const DIGITS: u32 = 6;
const MAX_KEY_BYTES: usize = 160;
const MAX_INPUT_CHARS: usize = 255;
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Settings {
    // seconds per TOTP window
    pub time_step: u64,
    pub digits: u32,
    pub max_key_bytes: usize,
    // longer input lines are cut to this many characters before decoding
    pub max_input_chars: usize,
    pub refresh_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_step: TIME_STEP,
            digits: DIGITS,
            max_key_bytes: MAX_KEY_BYTES,
            max_input_chars: MAX_INPUT_CHARS,
            refresh_interval: REFRESH_INTERVAL,
        }
    }
}
