use once_cell::sync::Lazy;
use regex::Regex;

use super::captcha::Captcha;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.!#$%&'*+/=?^`{|}~-]+@[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+$")
        .expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[-0-9()\s.]{6,}$").expect("phone pattern compiles")
});

/// Why a field failed. The `Display` text is the last-resort English message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please fill out this field.")]
    Required,
    #[error("The value entered is not valid.")]
    Invalid,
    #[error("Add more detail to this field.")]
    TooShort,
}

impl FieldError {
    /// Per-field dictionary key suffix (`contact.form.<field>.<key>`).
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::Required => "errorRequired",
            FieldError::Invalid => "errorInvalid",
            FieldError::TooShort => "errorMin",
        }
    }

    /// Key under `contact.form.fallback` used when the field has no override.
    pub fn fallback_key(self) -> &'static str {
        match self {
            FieldError::Required => "errorRequired",
            FieldError::Invalid => "errorInvalid",
            FieldError::TooShort => "errorMinlength",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    RequiredText,
    Email,
    PhoneOptional,
    MinLength(usize),
    CaptchaMatch,
    ConsentCheckbox,
}

impl FieldRule {
    /// Rule from a markup-style kind tag such as `min-length`.
    pub fn parse(kind: &str, min_length: Option<usize>) -> Option<Self> {
        match kind.trim() {
            "required-text" => Some(FieldRule::RequiredText),
            "email" => Some(FieldRule::Email),
            "phone-optional" => Some(FieldRule::PhoneOptional),
            "min-length" => min_length.map(FieldRule::MinLength),
            "captcha-match" => Some(FieldRule::CaptchaMatch),
            "consent-checkbox" => Some(FieldRule::ConsentCheckbox),
            _ => None,
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            FieldRule::RequiredText => "required-text",
            FieldRule::Email => "email",
            FieldRule::PhoneOptional => "phone-optional",
            FieldRule::MinLength(_) => "min-length",
            FieldRule::CaptchaMatch => "captcha-match",
            FieldRule::ConsentCheckbox => "consent-checkbox",
        }
    }

    /// Run the rule. `captcha` is only consulted by [`FieldRule::CaptchaMatch`].
    /// An empty value is always `Required` (never a format error) except for
    /// the optional phone field.
    pub fn check(self, value: &str, checked: bool, captcha: &Captcha) -> Result<(), FieldError> {
        let value = value.trim();
        match self {
            FieldRule::ConsentCheckbox => {
                if checked {
                    Ok(())
                } else {
                    Err(FieldError::Required)
                }
            }
            FieldRule::PhoneOptional => {
                if value.is_empty() || PHONE_RE.is_match(value) {
                    Ok(())
                } else {
                    Err(FieldError::Invalid)
                }
            }
            _ if value.is_empty() => Err(FieldError::Required),
            FieldRule::RequiredText => Ok(()),
            FieldRule::Email => {
                if EMAIL_RE.is_match(value) {
                    Ok(())
                } else {
                    Err(FieldError::Invalid)
                }
            }
            FieldRule::MinLength(min) => {
                if value.chars().count() < min {
                    Err(FieldError::TooShort)
                } else {
                    Ok(())
                }
            }
            FieldRule::CaptchaMatch => {
                if captcha.matches(value) {
                    Ok(())
                } else {
                    Err(FieldError::Invalid)
                }
            }
        }
    }
}
