use shared::OrderDraft;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationStepProps {
    pub draft: OrderDraft,
    pub on_notify: Callback<()>,
}

#[function_component(ConfirmationStep)]
pub fn confirmation_step(props: &ConfirmationStepProps) -> Html {
    let on_notify = {
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| on_notify.emit(()))
    };

    html! {
        <div class="checkout-step step-confirmation">
            <div class="success-icon">{"✓"}</div>
            <h1 class="title">{"Confirmed"}</h1>
            <p class="subtitle">{"Welcome to the Inner Circle"}</p>
            <p class="confirmation-note">
                {format!(
                    "Dear {}, your Chianny Chin Chin is being prepared. Excellence takes time, but your wait is nearly over.",
                    props.draft.name
                )}
            </p>
            <p class="order-summary">
                {format!("{} pack(s) at {} each", props.draft.quantity, props.draft.unit_price.label())}
            </p>

            <button class="btn-primary btn-notify" onclick={on_notify}>
                {"Notify Chianny"}
            </button>
        </div>
    }
}
