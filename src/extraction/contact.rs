//! Email, phone and location extraction

use crate::error::Result;
use regex::Regex;

pub const EMAIL_CONFIDENCE: u8 = 95;
pub const PHONE_CONFIDENCE: u8 = 85;
pub const LOCATION_CONFIDENCE: u8 = 75;

/// Contact fields found in a document; `None` when no pattern matched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regexes: Vec<Regex>,
    location_regexes: Vec<Regex>,
}

impl ContactExtractor {
    pub fn new() -> Result<Self> {
        let email_regex = Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})")?;

        // Tried in order; the first pattern to match wins
        let phone_regexes = vec![
            Regex::new(r"(\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4})")?,
            Regex::new(r"(\+1[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4})")?,
            Regex::new(r"(?i)Phone:?\s*(\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4})")?,
        ];

        // Only these four states are recognised when spelled out
        let location_regexes = vec![
            Regex::new(r"(?m)Location:\s*([A-Za-z \t,]+?)[ \t]*\r?$")?,
            Regex::new(r"(?m)([A-Za-z \t]+,[ \t]*[A-Z]{2})[ \t]*\r?$")?,
            Regex::new(
                r"(?im)((?:[A-Za-z \t]+,[ \t]*)?(?:California|New York|Texas|Florida))[ \t]*\r?$",
            )?,
        ];

        Ok(Self {
            email_regex,
            phone_regexes,
            location_regexes,
        })
    }

    pub fn extract(&self, text: &str) -> ContactInfo {
        ContactInfo {
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            location: self.extract_location(text),
        }
    }

    /// First address found, lower-cased
    pub fn extract_email(&self, text: &str) -> Option<String> {
        first_capture(&self.email_regex, text).map(|email| email.to_lowercase())
    }

    /// First phone number found, exactly as written
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regexes
            .iter()
            .find_map(|regex| first_capture(regex, text))
    }

    pub fn extract_location(&self, text: &str) -> Option<String> {
        self.location_regexes
            .iter()
            .find_map(|regex| first_capture(regex, text))
    }
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    let value = regex.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
