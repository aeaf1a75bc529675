//! Opaque API token generation.

use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789";

/// Length of every issued token key.
pub const TOKEN_LENGTH: usize = 40;

/// Generates a random alphanumeric token key.
///
/// # Returns
/// - `String` - A `TOKEN_LENGTH` character random alphanumeric string
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_token_of_fixed_length() {
        let token = generate_token();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generates_distinct_tokens() {
        assert_ne!(generate_token(), generate_token());
    }
}
