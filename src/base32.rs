use crate::error::DecodeError;

// RFC 4648 https://datatracker.ietf.org/doc/html/rfc4648#section-6

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const INVALID: u8 = 0xff;

// ASCII byte -> 5-bit value, INVALID for anything outside the alphabet
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn lookup(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value as u32),
    }
}

// Input must already be uppercased with `=` padding stripped.
// 5 bits per char, oldest first; trailing bits short of a byte are dropped.
pub fn decode(input: &str, max_output_bytes: usize) -> Result<Vec<u8>, DecodeError> {
    let mut output = Vec::with_capacity((input.len() * 5 / 8).min(max_output_bytes));
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for (position, character) in input.chars().enumerate() {
        let value =
            lookup(character).ok_or(DecodeError::InvalidCharacter { character, position })?;

        buffer = (buffer << 5) | value;
        bits += 5;

        if bits >= 8 {
            if output.len() >= max_output_bytes {
                return Err(DecodeError::BufferOverflow {
                    max: max_output_bytes,
                });
            }
            bits -= 8;
            output.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(output)
}
