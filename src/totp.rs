use crypto::hmac::Hmac;
use crypto::mac::Mac;
use crypto::sha1::Sha1;
use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::base32::decode_secret;
use crate::config::{CODE_DIGITS, TIME_STEP_SECONDS};
use crate::error::Result;

const DIGEST_BYTES: usize = 20;

pub fn time_step_at(unix_seconds: u64) -> u64 {
    unix_seconds / TIME_STEP_SECONDS
}

pub fn current_time_step() -> u64 {
    let epoch_sec = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(e) => {
            warn!("system clock is {:?} before the unix epoch", e.duration());
            0
        }
    };
    time_step_at(epoch_sec)
}

/// Computes the code for base32 `secret` at `time_step`.
///
/// A `time_step` of 0 means "now".
pub fn get_code(secret: &str, time_step: u64) -> Result<String> {
    let time_step = if time_step == 0 {
        current_time_step()
    } else {
        time_step
    };

    let key = decode_secret(secret)?;
    Ok(code_at(&key, time_step))
}

/// HOTP (RFC 4226) over raw key bytes. The counter is used as given.
pub fn code_at(key: &[u8], counter: u64) -> String {
    let hmac_hash = lib_hmac(key, &counter.to_be_bytes());
    let trc_hash = dynamic_truncate(&hmac_hash);
    format!(
        "{:0width$}",
        trc_hash % 10u32.pow(CODE_DIGITS),
        width = CODE_DIGITS as usize
    )
}

// RFC 4226 section 5.3
fn dynamic_truncate(hash: &[u8; DIGEST_BYTES]) -> u32 {
    let offset = (hash[DIGEST_BYTES - 1] & 0xF) as usize;
    let slice = [
        hash[offset],
        hash[offset + 1],
        hash[offset + 2],
        hash[offset + 3],
    ];

    // take 32 bit from this number with a leading zero
    u32::from_be_bytes(slice) & 0x7FFF_FFFF
}

// returns 160bit HMAC-SHA1 hash
fn lib_hmac(key: &[u8], message: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut mac = Hmac::new(Sha1::new(), key);
    mac.input(message);
    let mut out = [0u8; DIGEST_BYTES];
    mac.raw_result(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ"; // "12345678901234567890"

    #[test]
    fn test_dynamic_truncate() {
        // see https://jacob.jkrall.net/totp
        let hash = [
            0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
            0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
        ];
        let truncated = dynamic_truncate(&hash);
        assert_eq!(truncated, 0x50ef7f19);
        assert_eq!(format!("{:06}", truncated % 1_000_000), "872921");
    }

    #[test]
    fn truncation_masks_sign_bit() {
        let mut hash = [0xFFu8; DIGEST_BYTES];
        hash[DIGEST_BYTES - 1] = 0xF0;
        assert_eq!(dynamic_truncate(&hash), 0x7FFF_FFFF);
    }

    #[test]
    fn rfc4226_vectors() {
        let key = b"12345678901234567890";
        let expected = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];
        for (counter, code) in expected.iter().enumerate() {
            assert_eq!(code_at(key, counter as u64), *code);
        }
    }

    #[test]
    fn rfc6238_sha1_vectors() {
        let cases = [
            (59u64, "287082"),
            (1111111109, "081804"),
            (1111111111, "050471"),
            (1234567890, "005924"),
            (2000000000, "279037"),
            (20000000000, "353130"),
        ];
        for (seconds, code) in cases.iter() {
            assert_eq!(get_code(RFC_SECRET, time_step_at(*seconds)).unwrap(), *code);
        }
    }

    #[test]
    fn known_answer_for_jbswy3dpehpk3pxp() {
        assert_eq!(get_code("JBSWY3DPEHPK3PXP", 1).unwrap(), "996554");
        assert_eq!(get_code("JBSWY3DPEHPK3PXP", 2).unwrap(), "602287");
        assert_eq!(get_code("jbswy3dpehpk3pxp====", 1).unwrap(), "996554");
    }

    #[test]
    fn codes_are_zero_padded() {
        assert_eq!(get_code("base32secret3232", 1).unwrap(), "055283");
        assert_eq!(get_code("base32secret3232", 1401).unwrap(), "316439");
    }

    #[test]
    fn get_code_is_deterministic() {
        let first = get_code("JBSWY3DPEHPK3PXP", 56112640).unwrap();
        assert_eq!(first, "502980");
        assert_eq!(get_code("JBSWY3DPEHPK3PXP", 56112640).unwrap(), first);
    }

    #[test]
    fn zero_time_step_uses_clock() {
        let before = current_time_step();
        let code = get_code(RFC_SECRET, 0).unwrap();
        let after = current_time_step();
        assert!(code == get_code(RFC_SECRET, before).unwrap() || code == get_code(RFC_SECRET, after).unwrap());
    }

    #[test]
    fn time_step_is_thirty_seconds() {
        assert_eq!(time_step_at(0), 0);
        assert_eq!(time_step_at(29), 0);
        assert_eq!(time_step_at(30), 1);
        assert_eq!(time_step_at(59), 1);
        assert_eq!(time_step_at(1680413281), 56013776);
        assert!(current_time_step() > time_step_at(1680413281));
    }

    #[test]
    fn bad_secret_propagates() {
        assert!(matches!(get_code("not base32!", 1), Err(AuthError::InvalidEncoding(_))));
    }
}
