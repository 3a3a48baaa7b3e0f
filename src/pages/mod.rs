pub mod home;
pub mod login;
pub mod pets;

use std::time::{Duration, Instant};

use crate::browser::driver::PageDriver;
use crate::browser::error::DriverError;

const URL_POLL_INTERVAL_MS: u64 = 100;

/// Block until the browser's current URL satisfies `pred`, bounded by
/// `timeout_ms`. Used by navigation actions so callers never race the UI.
pub(crate) fn wait_for_url(
    driver: &mut PageDriver,
    timeout_ms: u64,
    what: &str,
    mut pred: impl FnMut(&str) -> bool,
) -> Result<String, DriverError> {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        let url = driver.current_url()?;
        if pred(&url) {
            return Ok(url);
        }
        if Instant::now() >= deadline {
            return Err(DriverError::WaitTimeout {
                what: what.to_string(),
                timeout_ms,
            });
        }
        std::thread::sleep(Duration::from_millis(URL_POLL_INTERVAL_MS));
    }
}
