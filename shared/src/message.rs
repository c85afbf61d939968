use crate::order::OrderDraft;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same character set `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Link that opens WhatsApp with the order confirmation pre-filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub message: String,
    pub url: String,
}

/// Order confirmation text sent to the business.
///
/// The price is per pack and is not multiplied by the quantity.
pub fn order_message(draft: &OrderDraft, proof_url: &str) -> String {
    format!(
        "Hello Chianny! 🥨\n\nI am {} ({}).\nI've just placed an order for {} pack(s) of Chianny Chin Chin (N{} each).\n\n📄 View Payment Receipt: {}\n\nPlease confirm my order! 🥂",
        draft.name, draft.phone, draft.quantity, draft.unit_price.amount(), proof_url
    )
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

pub fn whatsapp_link(business_phone: &str, message: String) -> DeepLink {
    let url = format!(
        "https://wa.me/{}?text={}",
        business_phone,
        encode_component(&message)
    );
    DeepLink { message, url }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{DraftField, OrderDraft};
    use percent_encoding::percent_decode_str;

    fn ada() -> OrderDraft {
        OrderDraft::default()
            .with_field(DraftField::Name, "Ada")
            .with_field(DraftField::Phone, "+2348000000000")
            .with_field(DraftField::UnitPrice, "2500")
            .with_field(DraftField::Quantity, "3")
    }

    #[test]
    fn test_order_message_template() {
        let message = order_message(&ada(), "https://host/img.jpg");
        assert_eq!(
            message,
            "Hello Chianny! 🥨\n\nI am Ada (+2348000000000).\nI've just placed an order for 3 pack(s) of Chianny Chin Chin (N2500 each).\n\n📄 View Payment Receipt: https://host/img.jpg\n\nPlease confirm my order! 🥂"
        );
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("a b+c&d=e"), "a%20b%2Bc%26d%3De");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("🥨"), "%F0%9F%A5%A8");
        assert_eq!(encode_component("https://h/x?y"), "https%3A%2F%2Fh%2Fx%3Fy");
    }

    #[test]
    fn test_whatsapp_link_round_trips_message() {
        let message = order_message(&ada(), "https://host/img.jpg");
        let link = whatsapp_link("2348138918620", message.clone());

        let prefix = "https://wa.me/2348138918620?text=";
        assert!(link.url.starts_with(prefix));

        let encoded = &link.url[prefix.len()..];
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, message);
        assert_eq!(link.message, message);
    }
}
