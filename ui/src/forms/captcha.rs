//! Text captcha. A UX deterrent against casual bots, not a security control:
//! the displayed code is the only thing the answer is compared against.

use rand::Rng;

/// No `I`, `O`, `0` or `1`, which read ambiguously.
pub const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const DEFAULT_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captcha {
    code: String,
}

impl Captcha {
    pub fn generate(length: usize) -> Self {
        Self::generate_with(&mut rand::thread_rng(), length)
    }

    /// Independent draws from [`ALPHABET`]; repeating the previous code is
    /// possible, just unlikely.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        let length = if length == 0 { DEFAULT_LENGTH } else { length };
        let code = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self { code }
    }

    pub fn from_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn matches(&self, input: &str) -> bool {
        normalize_input(input) == self.code
    }
}

/// Strip all whitespace and upper-case.
fn normalize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
