use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const CLOUD_NAME_KEY: &str = "CHECKOUT_CLOUDINARY_CLOUD_NAME";
pub const UPLOAD_PRESET_KEY: &str = "CHECKOUT_CLOUDINARY_UPLOAD_PRESET";
pub const BUSINESS_PHONE_KEY: &str = "CHECKOUT_BUSINESS_PHONE";
pub const TRANSITION_DELAY_KEY: &str = "CHECKOUT_TRANSITION_DELAY_MS";
pub const BANK_NAME_KEY: &str = "CHECKOUT_BANK_NAME";
pub const ACCOUNT_NUMBER_KEY: &str = "CHECKOUT_ACCOUNT_NUMBER";
pub const BENEFICIARY_KEY: &str = "CHECKOUT_BENEFICIARY";

/// Wait between a successful upload and showing the confirmation step
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} is not set")]
    Missing { key: &'static str },
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Every problem found while loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigErrors(pub Vec<ConfigError>);

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ConfigErrors {}

/// Bank account the customer transfers payment to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAccount {
    pub bank_name: String,
    pub account_number: String,
    pub beneficiary: String,
}

impl Default for PaymentAccount {
    fn default() -> Self {
        Self {
            bank_name: "OPAY".to_string(),
            account_number: "8138918620".to_string(),
            beneficiary: "ANNETTE STEPHEN".to_string(),
        }
    }
}

/// Checkout configuration, validated once at startup and handed to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Cloudinary account the receipts are uploaded to
    pub cloud_name: String,
    /// Unsigned upload preset sent with every upload
    pub upload_preset: String,
    /// WhatsApp number in international format, digits only
    pub business_phone: String,
    pub transition_delay: Duration,
    pub payment_account: PaymentAccount,
}

impl CheckoutConfig {
    /// Load and validate configuration from a key lookup.
    ///
    /// Blank values count as missing. All problems are reported together.
    pub fn load<F>(lookup: F) -> Result<Self, ConfigErrors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut required = |key: &'static str| {
            let found = value(key);
            if found.is_none() {
                errors.push(ConfigError::Missing { key });
            }
            found.unwrap_or_default()
        };

        let cloud_name = required(CLOUD_NAME_KEY);
        let upload_preset = required(UPLOAD_PRESET_KEY);
        let raw_phone = required(BUSINESS_PHONE_KEY);

        let business_phone = if raw_phone.is_empty() {
            raw_phone
        } else {
            match normalize_phone(&raw_phone) {
                Ok(phone) => phone,
                Err(reason) => {
                    errors.push(ConfigError::Invalid {
                        key: BUSINESS_PHONE_KEY,
                        reason,
                    });
                    String::new()
                }
            }
        };

        if cloud_name.contains('/') || cloud_name.contains(char::is_whitespace) {
            errors.push(ConfigError::Invalid {
                key: CLOUD_NAME_KEY,
                reason: "must be a bare account identifier".to_string(),
            });
        }

        let transition_delay = match value(TRANSITION_DELAY_KEY) {
            None => Duration::from_millis(DEFAULT_TRANSITION_DELAY_MS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    errors.push(ConfigError::Invalid {
                        key: TRANSITION_DELAY_KEY,
                        reason: e.to_string(),
                    });
                    Duration::from_millis(DEFAULT_TRANSITION_DELAY_MS)
                }
            },
        };

        let defaults = PaymentAccount::default();
        let payment_account = PaymentAccount {
            bank_name: value(BANK_NAME_KEY).unwrap_or(defaults.bank_name),
            account_number: value(ACCOUNT_NUMBER_KEY).unwrap_or(defaults.account_number),
            beneficiary: value(BENEFICIARY_KEY).unwrap_or(defaults.beneficiary),
        };

        if !errors.is_empty() {
            return Err(ConfigErrors(errors));
        }

        Ok(Self {
            cloud_name,
            upload_preset,
            business_phone,
            transition_delay,
            payment_account,
        })
    }

    /// Cloudinary unsigned image upload endpoint for this account
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    pub fn transition_delay_ms(&self) -> u32 {
        u32::try_from(self.transition_delay.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Strip formatting from a phone number, leaving the digits wa.me expects
fn normalize_phone(raw: &str) -> Result<String, String> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-' | '(' | ')'))
        .collect();

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("'{}' is not a phone number", raw));
    }
    Ok(stripped)
}
