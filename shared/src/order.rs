use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed per-pack price points offered by the storefront (in naira)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PriceTier {
    N1000,
    N2500,
    N3500,
    N7500,
    N15000,
}

impl PriceTier {
    /// All tiers in the order they appear in the pack selection
    pub const ALL: [PriceTier; 5] = [
        PriceTier::N1000,
        PriceTier::N2500,
        PriceTier::N3500,
        PriceTier::N7500,
        PriceTier::N15000,
    ];

    pub fn amount(self) -> u32 {
        match self {
            PriceTier::N1000 => 1000,
            PriceTier::N2500 => 2500,
            PriceTier::N3500 => 3500,
            PriceTier::N7500 => 7500,
            PriceTier::N15000 => 15000,
        }
    }

    pub fn from_amount(amount: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.amount() == amount)
    }

    /// Display label with thousands separators, e.g. "N15,000"
    pub fn label(self) -> String {
        let digits = self.amount().to_string();
        let mut grouped = String::with_capacity(digits.len() + 2);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("N{}", grouped)
    }
}

impl Default for PriceTier {
    fn default() -> Self {
        PriceTier::N1000
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid price '{}': {}", s, e))?;
        Self::from_amount(amount).ok_or_else(|| format!("No price tier for amount {}", amount))
    }
}

impl TryFrom<u32> for PriceTier {
    type Error = String;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        Self::from_amount(amount).ok_or_else(|| format!("No price tier for amount {}", amount))
    }
}

impl From<PriceTier> for u32 {
    fn from(tier: PriceTier) -> Self {
        tier.amount()
    }
}

/// Fields of the draft that the details step edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Phone,
    UnitPrice,
    Quantity,
}

/// The proof-of-payment file the customer selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofFile {
    pub name: String,
}

/// In-memory record of the customer's order, discarded when the page reloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    pub unit_price: PriceTier,
    /// Raw quantity input, kept exactly as typed
    pub quantity: String,
    pub proof_file: Option<ProofFile>,
    pub proof_url: Option<String>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            unit_price: PriceTier::default(),
            quantity: "1".to_string(),
            proof_file: None,
            proof_url: None,
        }
    }
}

impl OrderDraft {
    /// Both identity fields are present
    pub fn has_contact_details(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }

    /// Returns a new draft with `field` replaced by `raw`.
    ///
    /// No validation happens here. A price that matches no tier keeps the
    /// current tier, since the pack selection can only offer real tiers.
    pub fn with_field(&self, field: DraftField, raw: &str) -> OrderDraft {
        let mut next = self.clone();
        match field {
            DraftField::Name => next.name = raw.to_string(),
            DraftField::Phone => next.phone = raw.to_string(),
            DraftField::UnitPrice => {
                if let Ok(tier) = raw.parse::<PriceTier>() {
                    next.unit_price = tier;
                }
            }
            DraftField::Quantity => next.quantity = raw.to_string(),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_tier_amounts_and_parsing() {
        let amounts: Vec<u32> = PriceTier::ALL.iter().map(|t| t.amount()).collect();
        assert_eq!(amounts, vec![1000, 2500, 3500, 7500, 15000]);

        assert_eq!("2500".parse::<PriceTier>().unwrap(), PriceTier::N2500);
        assert_eq!(" 15000 ".parse::<PriceTier>().unwrap(), PriceTier::N15000);
        assert!("2000".parse::<PriceTier>().is_err());
        assert!("abc".parse::<PriceTier>().is_err());
    }

    #[test]
    fn test_price_tier_labels() {
        assert_eq!(PriceTier::N1000.label(), "N1,000");
        assert_eq!(PriceTier::N7500.label(), "N7,500");
        assert_eq!(PriceTier::N15000.label(), "N15,000");
    }

    #[test]
    fn test_price_tier_serializes_as_amount() {
        assert_eq!(serde_json::to_string(&PriceTier::N3500).unwrap(), "3500");
        let tier: PriceTier = serde_json::from_str("7500").unwrap();
        assert_eq!(tier, PriceTier::N7500);
        assert!(serde_json::from_str::<PriceTier>("42").is_err());
    }

    #[test]
    fn test_default_draft() {
        let draft = OrderDraft::default();
        assert_eq!(draft.unit_price, PriceTier::N1000);
        assert_eq!(draft.quantity, "1");
        assert!(draft.proof_file.is_none());
        assert!(draft.proof_url.is_none());
        assert!(!draft.has_contact_details());
    }

    #[test]
    fn test_with_field_replaces_record() {
        let draft = OrderDraft::default();
        let updated = draft.with_field(DraftField::Name, "Ada");

        // Original record is untouched
        assert_eq!(draft.name, "");
        assert_eq!(updated.name, "Ada");
    }

    #[test]
    fn test_price_and_quantity_are_independent() {
        let draft = OrderDraft::default().with_field(DraftField::Quantity, "4");

        let repriced = draft.with_field(DraftField::UnitPrice, "7500");
        assert_eq!(repriced.unit_price, PriceTier::N7500);
        assert_eq!(repriced.quantity, "4");

        let requantified = repriced.with_field(DraftField::Quantity, "9");
        assert_eq!(requantified.quantity, "9");
        assert_eq!(requantified.unit_price, PriceTier::N7500);
    }

    #[test]
    fn test_quantity_is_not_coerced() {
        let draft = OrderDraft::default().with_field(DraftField::Quantity, "");
        assert_eq!(draft.quantity, "");

        let draft = draft.with_field(DraftField::Quantity, "007");
        assert_eq!(draft.quantity, "007");
    }

    #[test]
    fn test_unknown_price_keeps_current_tier() {
        let draft = OrderDraft::default().with_field(DraftField::UnitPrice, "2500");
        let unchanged = draft.with_field(DraftField::UnitPrice, "999");
        assert_eq!(unchanged.unit_price, PriceTier::N2500);
    }
}
