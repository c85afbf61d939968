//! Platform-independent checkout domain shared by the storefront frontend.

pub mod config;
pub mod message;
pub mod order;
pub mod upload;
pub mod wizard;

pub use config::{CheckoutConfig, ConfigError, ConfigErrors, PaymentAccount};
pub use message::DeepLink;
pub use order::{DraftField, OrderDraft, PriceTier, ProofFile};
pub use upload::{parse_upload_response, UploadError};
pub use wizard::{CheckoutWizard, UploadResolution, UploadTicket, WizardError, WizardStep};
