use shared::config::{
    ACCOUNT_NUMBER_KEY, BANK_NAME_KEY, BENEFICIARY_KEY, BUSINESS_PHONE_KEY, CLOUD_NAME_KEY,
    TRANSITION_DELAY_KEY, UPLOAD_PRESET_KEY,
};

/// Configuration baked into the bundle when it was built.
///
/// `option_env!` needs literal names, hence the match.
pub fn lookup(key: &str) -> Option<String> {
    let value = match key {
        CLOUD_NAME_KEY => option_env!("CHECKOUT_CLOUDINARY_CLOUD_NAME"),
        UPLOAD_PRESET_KEY => option_env!("CHECKOUT_CLOUDINARY_UPLOAD_PRESET"),
        BUSINESS_PHONE_KEY => option_env!("CHECKOUT_BUSINESS_PHONE"),
        TRANSITION_DELAY_KEY => option_env!("CHECKOUT_TRANSITION_DELAY_MS"),
        BANK_NAME_KEY => option_env!("CHECKOUT_BANK_NAME"),
        ACCOUNT_NUMBER_KEY => option_env!("CHECKOUT_ACCOUNT_NUMBER"),
        BENEFICIARY_KEY => option_env!("CHECKOUT_BENEFICIARY"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(lookup("CHECKOUT_SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_keys_match_build_variables() {
        // The literals above must stay in sync with the shared key names
        assert_eq!(CLOUD_NAME_KEY, "CHECKOUT_CLOUDINARY_CLOUD_NAME");
        assert_eq!(UPLOAD_PRESET_KEY, "CHECKOUT_CLOUDINARY_UPLOAD_PRESET");
        assert_eq!(BUSINESS_PHONE_KEY, "CHECKOUT_BUSINESS_PHONE");
        assert_eq!(TRANSITION_DELAY_KEY, "CHECKOUT_TRANSITION_DELAY_MS");
        assert_eq!(BANK_NAME_KEY, "CHECKOUT_BANK_NAME");
        assert_eq!(ACCOUNT_NUMBER_KEY, "CHECKOUT_ACCOUNT_NUMBER");
        assert_eq!(BENEFICIARY_KEY, "CHECKOUT_BENEFICIARY");
    }
}
