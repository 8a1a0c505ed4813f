use std::time::SystemTime;

use crate::hotp::get_hotp;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

// A clock set before 1970 reads as 0
pub fn unix_seconds(clock: &impl GetTime) -> u64 {
    match clock.get_now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs(),
        Err(err) => {
            log::warn!("system clock is before the Unix epoch: {}", err);
            0
        }
    }
}

pub fn counter_for(unix_seconds: u64, time_step: u64) -> u64 {
    unix_seconds / time_step
}

pub fn get_totp_moving_factor(clock: &impl GetTime, time_step: u64) -> u64 {
    counter_for(unix_seconds(clock), time_step)
}

pub fn get_totp(secret: &[u8], clock: &impl GetTime, time_step: u64, digits: u32) -> u32 {
    let moving_factor = get_totp_moving_factor(clock, time_step);
    log::trace!("computing passcode for counter {}", moving_factor);
    get_hotp(secret, moving_factor, digits)
}
