// src/domain/user/profile.rs
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DISPLAY_NAME_MAX_CHARS: usize = 100;
pub const BIO_MAX_CHARS: usize = 500;

// E.164: optional leading '+', 2-15 digits, no leading zero.
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone number pattern is a valid regex")
});

/// Optional display attributes of a user.
///
/// Every field is checked when the value is built, so a `Profile` in hand is
/// always valid. Changing a profile means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    display_name: Option<String>,
    photo_url: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    bio: Option<String>,
}

impl Profile {
    pub fn new(
        display_name: Option<String>,
        photo_url: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        bio: Option<String>,
    ) -> DomainResult<Self> {
        if let Some(name) = display_name.as_deref() {
            validate_display_name(name)?;
        }
        if let Some(bio) = bio.as_deref() {
            validate_bio(bio)?;
        }
        if let Some(phone) = phone_number.as_deref() {
            validate_phone_number(phone)?;
        }

        Ok(Self {
            display_name,
            photo_url,
            phone_number,
            address,
            bio,
        })
    }

    /// Profile with every field absent, used for freshly created identities.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }
}

fn validate_display_name(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(
            "displayName",
            "must not be blank if provided",
        ));
    }
    if value.chars().count() > DISPLAY_NAME_MAX_CHARS {
        return Err(DomainError::validation(
            "displayName",
            format!("must not exceed {DISPLAY_NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

fn validate_bio(value: &str) -> DomainResult<()> {
    if value.chars().count() > BIO_MAX_CHARS {
        return Err(DomainError::validation(
            "bio",
            format!("must not exceed {BIO_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

fn validate_phone_number(value: &str) -> DomainResult<()> {
    if !PHONE_NUMBER_REGEX.is_match(value) {
        return Err(DomainError::validation(
            "phoneNumber",
            "must be a valid E.164 phone number",
        ));
    }
    Ok(())
}
