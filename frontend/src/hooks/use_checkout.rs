use crate::services::{browser, logging::Logger, upload::UploadClient};
use gloo::timers::callback::Timeout;
use shared::{CheckoutConfig, CheckoutWizard, DraftField, OrderDraft, UploadResolution, WizardStep};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

const COMPONENT: &str = "checkout";

/// Render snapshot of the wizard
#[derive(Clone, PartialEq)]
pub struct CheckoutState {
    pub step: WizardStep,
    pub draft: OrderDraft,
    pub can_advance: bool,
    pub upload_in_progress: bool,
}

pub struct UseCheckoutResult {
    pub state: CheckoutState,
    pub actions: UseCheckoutActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCheckoutActions {
    pub advance: Callback<()>,
    pub retreat: Callback<()>,
    pub update_field: Callback<(DraftField, String)>,
    pub upload_proof: Callback<File>,
    pub notify: Callback<()>,
}

/// Hook that owns the checkout wizard for one page session.
///
/// The wizard lives in a `RefCell` so the upload future can apply its outcome
/// to the current state rather than a stale render snapshot. Every mutation
/// is followed by a forced re-render.
#[hook]
pub fn use_checkout(config: &CheckoutConfig) -> UseCheckoutResult {
    let wizard = {
        let config = config.clone();
        use_mut_ref(move || CheckoutWizard::new(config))
    };
    let transition_timer = use_mut_ref(|| Option::<Timeout>::None);
    let upload_client = use_memo(config.clone(), UploadClient::from_config);
    let refresh = use_force_update();

    // Cancel a pending post-upload transition when the wizard goes away
    {
        let wizard = wizard.clone();
        let transition_timer = transition_timer.clone();
        use_effect_with((), move |_| {
            move || {
                // Dropping the timeout clears it
                drop(transition_timer.borrow_mut().take());
                wizard.borrow_mut().cancel_transition();
            }
        });
    }

    let advance = {
        let wizard = wizard.clone();
        let refresh = refresh.clone();

        use_callback((), move |_: (), _| {
            if wizard.borrow_mut().advance() {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Advanced to step {}", wizard.borrow().step().number()),
                );
                refresh.force_update();
            }
        })
    };

    let retreat = {
        let wizard = wizard.clone();
        let transition_timer = transition_timer.clone();
        let refresh = refresh.clone();

        use_callback((), move |_: (), _| {
            if wizard.borrow_mut().retreat() {
                drop(transition_timer.borrow_mut().take());
                Logger::debug_with_component(COMPONENT, "Returned to details step");
                refresh.force_update();
            }
        })
    };

    let update_field = {
        let wizard = wizard.clone();
        let refresh = refresh.clone();

        use_callback((), move |(field, value): (DraftField, String), _| {
            wizard.borrow_mut().update_field(field, &value);
            refresh.force_update();
        })
    };

    let upload_proof = {
        let wizard = wizard.clone();
        let transition_timer = transition_timer.clone();
        let upload_client = upload_client.clone();
        let refresh = refresh.clone();

        use_callback((), move |file: File, _| {
            let ticket = match wizard.borrow_mut().begin_upload(file.name()) {
                Ok(ticket) => ticket,
                Err(e) => {
                    Logger::warn_with_component(
                        COMPONENT,
                        &format!("Ignoring selection of {}: {}", file.name(), e),
                    );
                    return;
                }
            };
            drop(transition_timer.borrow_mut().take());
            refresh.force_update();

            Logger::info_with_component(
                COMPONENT,
                &format!(
                    "Uploading {} ({} bytes) to {}",
                    ticket.file_name(),
                    file.size(),
                    upload_client.endpoint()
                ),
            );

            let wizard = wizard.clone();
            let transition_timer = transition_timer.clone();
            let upload_client = upload_client.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let outcome = upload_client.upload_receipt(&file).await;
                let resolution = wizard.borrow_mut().finish_upload(ticket, outcome);
                refresh.force_update();

                // The customer may have gone back while the request was in flight.
                // The outcome still applies, but no transition is scheduled; a stored
                // receipt enables the payment step's continue button instead.
                let step = wizard.borrow().step();
                if step != WizardStep::Payment {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Upload resolved while on step {}", step.number()),
                    );
                }

                match resolution {
                    UploadResolution::Uploaded { proof_url } => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Receipt uploaded: {}", proof_url),
                        );

                        let delay_ms = wizard.borrow().config().transition_delay_ms();
                        let timer = {
                            let wizard = wizard.clone();
                            let refresh = refresh.clone();
                            Timeout::new(delay_ms, move || {
                                if wizard.borrow_mut().complete_transition() {
                                    Logger::debug_with_component(
                                        COMPONENT,
                                        "Moved to confirmation step",
                                    );
                                    refresh.force_update();
                                }
                            })
                        };
                        *transition_timer.borrow_mut() = Some(timer);
                    }
                    UploadResolution::Failed { alert, error } => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Receipt upload failed: {}", error),
                        );
                        browser::show_alert(&alert);
                    }
                }
            });
        })
    };

    let notify = {
        let wizard = wizard.clone();

        use_callback((), move |_: (), _| {
            let link = match wizard.borrow().notify() {
                Ok(link) => link,
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("Cannot notify yet: {}", e));
                    return;
                }
            };

            Logger::info_with_component(COMPONENT, "Opening WhatsApp hand-off");
            if let Err(e) = browser::open_in_new_tab(&link.url) {
                Logger::error_with_component(
                    COMPONENT,
                    &format!("Failed to open WhatsApp link: {}", e),
                );
            }
        })
    };

    let state = {
        let wizard = wizard.borrow();
        CheckoutState {
            step: wizard.step(),
            draft: wizard.draft().clone(),
            can_advance: wizard.can_advance(),
            upload_in_progress: wizard.upload_in_progress(),
        }
    };

    UseCheckoutResult {
        state,
        actions: UseCheckoutActions {
            advance,
            retreat,
            update_field,
            upload_proof,
            notify,
        },
    }
}
