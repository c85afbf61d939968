mod confirmation_step;
mod details_step;
mod payment_step;

use crate::hooks::use_checkout::use_checkout;
use confirmation_step::ConfirmationStep;
use details_step::DetailsStep;
use payment_step::PaymentStep;
use shared::{CheckoutConfig, WizardStep};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckoutFormProps {
    pub config: CheckoutConfig,
}

/// Three-step checkout: details, payment receipt, confirmation
#[function_component(CheckoutForm)]
pub fn checkout_form(props: &CheckoutFormProps) -> Html {
    let checkout = use_checkout(&props.config);
    let state = checkout.state;
    let actions = checkout.actions;

    let step = match state.step {
        WizardStep::Details => html! {
            <DetailsStep
                draft={state.draft.clone()}
                can_advance={state.can_advance}
                on_field_change={actions.update_field.clone()}
                on_advance={actions.advance.clone()}
            />
        },
        WizardStep::Payment => html! {
            <PaymentStep
                account={props.config.payment_account.clone()}
                proof_file_name={state.draft.proof_file.as_ref().map(|f| f.name.clone())}
                upload_in_progress={state.upload_in_progress}
                can_advance={state.can_advance}
                on_back={actions.retreat.clone()}
                on_advance={actions.advance.clone()}
                on_file_selected={actions.upload_proof.clone()}
            />
        },
        WizardStep::Confirmation => html! {
            <ConfirmationStep
                draft={state.draft.clone()}
                on_notify={actions.notify.clone()}
            />
        },
    };

    html! {
        <div class="editorial-layout">
            <div class="editorial-image-side"></div>
            <div class="form-side" data-step={state.step.number().to_string()}>
                {step}
            </div>
        </div>
    }
}
