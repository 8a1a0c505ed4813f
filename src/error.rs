use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("decoded key would exceed {max} bytes")]
    BufferOverflow { max: usize },
}

// Display strings are the exact messages shown to the user
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error reading input")]
    EndOfInput,
    #[error("Error reading input")]
    ReadFailed(#[source] io::Error),
    #[error("Invalid base32 key")]
    InvalidKey(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn both_decode_causes_share_one_user_message() {
        let invalid = SessionError::from(DecodeError::InvalidCharacter {
            character: '1',
            position: 0,
        });
        let overflow = SessionError::from(DecodeError::BufferOverflow { max: 160 });

        assert_eq!(invalid.to_string(), "Invalid base32 key");
        assert_eq!(overflow.to_string(), "Invalid base32 key");
    }

    #[test]
    fn keeps_decode_cause_as_source() {
        let err = SessionError::from(DecodeError::BufferOverflow { max: 4 });

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "decoded key would exceed 4 bytes");
    }

    #[test]
    fn read_failures_share_one_user_message() {
        let failed = SessionError::ReadFailed(io::Error::new(io::ErrorKind::Other, "closed"));

        assert_eq!(SessionError::EndOfInput.to_string(), "Error reading input");
        assert_eq!(failed.to_string(), "Error reading input");
    }
}
