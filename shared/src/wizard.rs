//! Checkout wizard state machine.
//!
//! The wizard owns the order draft and the current step. The upload itself is
//! asynchronous and lives outside this module: `begin_upload` hands out an
//! [`UploadTicket`] that holds the upload lock, and `finish_upload` consumes it
//! with the outcome. A successful upload schedules the move to the
//! confirmation step, which the caller completes after the configured delay.

use crate::config::CheckoutConfig;
use crate::message::{order_message, whatsapp_link, DeepLink};
use crate::order::{DraftField, OrderDraft, ProofFile};
use crate::upload::UploadError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Payment,
    Confirmation,
}

impl WizardStep {
    /// 1-based position shown to the customer
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Payment => 2,
            WizardStep::Confirmation => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("an upload is already in progress")]
    UploadInProgress,
    #[error("uploads are only accepted on the payment step")]
    NotOnPaymentStep,
    #[error("the order is not confirmed yet")]
    NotReady,
}

/// Proof that the holder owns the upload lock.
///
/// Not `Clone`: `finish_upload` takes it by value, so the lock is released
/// exactly once per upload.
#[derive(Debug, PartialEq, Eq)]
pub struct UploadTicket {
    id: u64,
    file_name: String,
}

impl UploadTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResolution {
    /// The receipt is stored; the confirmation step is pending
    Uploaded { proof_url: String },
    Failed { alert: String, error: UploadError },
}

#[derive(Debug, Clone)]
pub struct CheckoutWizard {
    config: CheckoutConfig,
    draft: OrderDraft,
    step: WizardStep,
    upload_in_progress: bool,
    pending_advance: bool,
    next_ticket: u64,
}

impl CheckoutWizard {
    pub fn new(config: CheckoutConfig) -> Self {
        Self {
            config,
            draft: OrderDraft::default(),
            step: WizardStep::Details,
            upload_in_progress: false,
            pending_advance: false,
            next_ticket: 0,
        }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn upload_in_progress(&self) -> bool {
        self.upload_in_progress
    }

    pub fn transition_pending(&self) -> bool {
        self.pending_advance
    }

    /// Whether the forward action on the current step is enabled
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Details => self.draft.has_contact_details(),
            WizardStep::Payment => self.draft.proof_url.is_some() && !self.upload_in_progress,
            WizardStep::Confirmation => false,
        }
    }

    /// Move one step forward if the current step's gate allows it.
    ///
    /// Returns whether the step changed. A blocked advance is a no-op.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            WizardStep::Details => WizardStep::Payment,
            WizardStep::Payment => WizardStep::Confirmation,
            WizardStep::Confirmation => return false,
        };
        self.pending_advance = false;
        true
    }

    /// Step back from payment to details. No-op anywhere else.
    pub fn retreat(&mut self) -> bool {
        if self.step != WizardStep::Payment {
            return false;
        }
        self.step = WizardStep::Details;
        self.pending_advance = false;
        true
    }

    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        self.draft = self.draft.with_field(field, raw);
    }

    /// Take the upload lock and record the selected file.
    pub fn begin_upload(&mut self, file_name: impl Into<String>) -> Result<UploadTicket, WizardError> {
        if self.step != WizardStep::Payment {
            return Err(WizardError::NotOnPaymentStep);
        }
        if self.upload_in_progress {
            return Err(WizardError::UploadInProgress);
        }

        // A new selection supersedes any earlier receipt
        let file_name = file_name.into();
        self.draft = OrderDraft {
            proof_file: Some(ProofFile {
                name: file_name.clone(),
            }),
            proof_url: None,
            ..self.draft.clone()
        };
        self.upload_in_progress = true;
        self.pending_advance = false;
        self.next_ticket += 1;

        Ok(UploadTicket {
            id: self.next_ticket,
            file_name,
        })
    }

    /// Release the upload lock and apply the outcome.
    ///
    /// On success the proof URL is stored and the confirmation step is
    /// scheduled; the caller finishes it with [`complete_transition`] once the
    /// configured delay has passed.
    ///
    /// [`complete_transition`]: CheckoutWizard::complete_transition
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<String, UploadError>,
    ) -> UploadResolution {
        debug_assert_eq!(ticket.id, self.next_ticket);
        self.upload_in_progress = false;

        match outcome {
            Ok(proof_url) => {
                self.draft = OrderDraft {
                    proof_url: Some(proof_url.clone()),
                    ..self.draft.clone()
                };
                self.pending_advance = self.step == WizardStep::Payment;
                UploadResolution::Uploaded { proof_url }
            }
            Err(error) => UploadResolution::Failed {
                alert: error.alert_message().to_string(),
                error,
            },
        }
    }

    /// Perform the scheduled post-upload move to confirmation.
    ///
    /// Runs at most once per successful upload; returns whether it advanced.
    pub fn complete_transition(&mut self) -> bool {
        if !self.pending_advance {
            return false;
        }
        self.pending_advance = false;
        if self.step != WizardStep::Payment || self.draft.proof_url.is_none() {
            return false;
        }
        self.step = WizardStep::Confirmation;
        true
    }

    /// Drop a scheduled transition, e.g. when the view is torn down mid-delay
    pub fn cancel_transition(&mut self) {
        self.pending_advance = false;
    }

    /// Build the hand-off link for the confirmed order. Does not touch state.
    pub fn notify(&self) -> Result<DeepLink, WizardError> {
        if self.step != WizardStep::Confirmation {
            return Err(WizardError::NotReady);
        }
        let proof_url = self.draft.proof_url.as_deref().ok_or(WizardError::NotReady)?;
        let message = order_message(&self.draft, proof_url);
        Ok(whatsapp_link(&self.config.business_phone, message))
    }
}
