use log::debug;

use crate::base32::decode_secret;
use crate::compare::timing_safe_eq;
use crate::config::CODE_DIGITS;
use crate::totp::{code_at, current_time_step};

/// Checks `code` against every time step in
/// `[current_time_step - discrepancy, current_time_step + discrepancy]`.
///
/// A step of 0, whether passed in or reached inside the window, means "now",
/// as in [`get_code`](crate::totp::get_code). Steps that cannot be computed
/// are treated as non-matching.
pub fn verify_code(secret: &str, code: &str, discrepancy: u32, current_time_step: u64) -> bool {
    if code.len() != CODE_DIGITS as usize {
        return false;
    }

    let now = |step: u64| if step == 0 { self::current_time_step() } else { step };
    let current = now(current_time_step);

    // The key does not depend on the step: when it cannot be decoded every
    // step of the window fails the same way.
    let key = match decode_secret(secret) {
        Ok(key) => key,
        Err(e) => {
            debug!("skipping verification window: {}", e);
            return false;
        }
    };

    let discrepancy = i64::from(discrepancy);
    for offset in -discrepancy..=discrepancy {
        let step = match current.checked_add_signed(offset) {
            Some(step) => step,
            None => {
                debug!("time step offset {} out of range, skipped", offset);
                continue;
            }
        };
        if timing_safe_eq(&code_at(&key, now(step)), code) {
            return true;
        }
    }

    false
}
