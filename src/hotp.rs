use hmac::{Hmac, Mac};
use sha1::Sha1;

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;

pub fn get_hotp(secret: &[u8], counter: u64, digits: u32) -> u32 {
    let hmac = make_hmac(secret, counter);
    truncate(&hmac, digits)
}

// HMAC_SHA-1 -> 20 byte string
// Message is always the 8 byte big-endian counter
fn make_hmac(secret: &[u8], counter: u64) -> [u8; 20] {
    let mut mac =
        HmacSha1::new_from_slice(secret).expect("Problem with secret, failed to initialize HMAC");
    mac.update(&counter.to_be_bytes());

    let mut digest = [0u8; 20];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    digest
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: &[u8; 20], digits: u32) -> u32 {
    let base_code = dynamic_truncation(hmac);

    base_code % u32::pow(10, digits)
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(hmac: &[u8; 20]) -> u32 {
    let offset = (hmac[19] & 0xf) as usize;
    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32) << 16
        | (hmac[offset + 2] as u32) << 8
        | (hmac[offset + 3] as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::*;

    // RFC 4226 Appendix D
    const RFC_4226_CODES: [u32; 10] = [
        755224, 287082, 359152, 969429, 338314, 254676, 287922, 162583, 399871, 520489,
    ];

    #[test]
    fn matches_rfc_4226_vectors() {
        for (counter, expected) in RFC_4226_CODES.iter().enumerate() {
            assert_eq!(
                get_hotp(RFC_SECRET, counter as u64, 6),
                *expected,
                "counter {}",
                counter
            );
        }
    }

    #[test]
    fn truncates_rfc_4226_example_digest() {
        // RFC 4226 section 5.4
        let hmac: [u8; 20] = [
            0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
            0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
        ];

        assert_eq!(dynamic_truncation(&hmac), 0x50ef7f19);
        assert_eq!(truncate(&hmac, 6), 872921);
    }

    #[test]
    fn masks_top_bit_of_truncated_value() {
        let mut hmac = [0xffu8; 20];
        hmac[19] = 0xf0;

        assert_eq!(dynamic_truncation(&hmac), 0x7fffffff);
    }

    #[test]
    fn offset_can_reach_last_four_bytes() {
        let mut hmac = [0u8; 20];
        hmac[15] = 0x80;
        hmac[16] = 0xaa;
        hmac[17] = 0x01;
        hmac[18] = 0x02;
        hmac[19] = 0x0f;

        assert_eq!(dynamic_truncation(&hmac), 0x00aa0102);
    }

    #[test]
    fn digit_count_sets_modulus() {
        let hmac = make_hmac(RFC_SECRET, 0);

        assert_eq!(truncate(&hmac, 6), 755224);
        assert_eq!(truncate(&hmac, 8), 84755224);
    }

    #[test]
    fn empty_key_still_produces_a_code() {
        let first = get_hotp(&[], 1, 6);

        assert!(first < 1_000_000);
        assert_eq!(get_hotp(&[], 1, 6), first);
    }

    #[test]
    fn is_deterministic_and_in_range() {
        for counter in [0, 1, 29, 1 << 32, u64::MAX] {
            let code = get_hotp(RFC_SECRET, counter, 6);

            assert!(code < 1_000_000);
            assert_eq!(get_hotp(RFC_SECRET, counter, 6), code);
        }
    }
}
