use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Python's `string.punctuation`, which is what the server's own generator
/// draws symbols from. Identical to the ASCII punctuation set.
const SYMBOL_CHARS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Password generator request options.
///
/// If all character classes are disabled, generation falls back to letters
/// and digits instead of failing.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordGeneratorRequest {
    /// The length of the generated password.
    pub length: u8,
    /// Include uppercase characters (A-Z).
    pub uppercase: bool,
    /// Include lowercase characters (a-z).
    pub lowercase: bool,
    /// Include numbers (0-9).
    pub numbers: bool,
    /// Include symbols (ASCII punctuation).
    pub symbols: bool,
}

impl Default for PasswordGeneratorRequest {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

pub(super) fn password(input: &PasswordGeneratorRequest) -> String {
    password_with_rng(rand::thread_rng(), input)
}

fn password_with_rng(mut rng: impl rand::RngCore, input: &PasswordGeneratorRequest) -> String {
    let charset = build_charset(input);

    (0..input.length)
        .map(|_| *charset.choose(&mut rng).expect("charset is never empty"))
        .collect()
}

fn build_charset(input: &PasswordGeneratorRequest) -> Vec<char> {
    let mut charset = Vec::new();
    if input.uppercase {
        charset.extend('A'..='Z');
    }
    if input.lowercase {
        charset.extend('a'..='z');
    }
    if input.numbers {
        charset.extend('0'..='9');
    }
    if input.symbols {
        charset.extend(SYMBOL_CHARS.chars());
    }

    if charset.is_empty() {
        charset.extend('A'..='Z');
        charset.extend('a'..='z');
        charset.extend('0'..='9');
    }

    charset
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_password_length() {
        let pass = password(&PasswordGeneratorRequest::default());
        assert_eq!(pass.chars().count(), 12);

        let pass = password(&PasswordGeneratorRequest {
            length: 30,
            ..Default::default()
        });
        assert_eq!(pass.chars().count(), 30);
    }

    #[test]
    fn test_password_respects_charset() {
        let pass = password(&PasswordGeneratorRequest {
            length: 100,
            uppercase: false,
            lowercase: true,
            numbers: false,
            symbols: false,
        });
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_empty_charset_falls_back_to_alphanumerics() {
        let pass = password(&PasswordGeneratorRequest {
            length: 100,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        });
        assert!(pass.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_password_is_deterministic_for_a_fixed_rng() {
        let rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let first = password_with_rng(rng, &PasswordGeneratorRequest::default());

        let rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let second = password_with_rng(rng, &PasswordGeneratorRequest::default());

        assert_eq!(first, second);
    }
}
