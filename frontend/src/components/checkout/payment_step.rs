use shared::PaymentAccount;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentStepProps {
    pub account: PaymentAccount,
    pub proof_file_name: Option<String>,
    pub upload_in_progress: bool,
    /// A receipt is already stored, e.g. after returning from the details step
    pub can_advance: bool,
    pub on_back: Callback<()>,
    pub on_advance: Callback<()>,
    pub on_file_selected: Callback<File>,
}

#[function_component(PaymentStep)]
pub fn payment_step(props: &PaymentStepProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let on_advance = {
        let on_advance = props.on_advance.clone();
        Callback::from(move |_: MouseEvent| on_advance.emit(()))
    };

    let on_file_change = {
        let on_file_selected = props.on_file_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // Clear the picker so choosing the same file again still fires a change
            input.set_value("");
            if let Some(file) = file {
                on_file_selected.emit(file);
            }
        })
    };

    html! {
        <div class="checkout-step step-payment">
            <button class="btn-back" onclick={on_back}>
                {"‹ Previous"}
            </button>
            <h1 class="title">{"The Exchange"}</h1>
            <p class="subtitle">{"Acquiring Excellence"}</p>

            <div class="payment-card">
                <div class="account-info">
                    <span>{"Bank Institution"}</span>
                    <strong>{props.account.bank_name.clone()}</strong>

                    <span>{"Account Reference"}</span>
                    <strong>{props.account.account_number.clone()}</strong>

                    <span>{"Beneficiary"}</span>
                    <strong>{props.account.beneficiary.clone()}</strong>
                </div>
            </div>

            <div class="input-group">
                <label class="input-label">{"Document Transfer"}</label>
                <label class={classes!("upload-area", props.upload_in_progress.then_some("uploading"))}>
                    <input
                        type="file"
                        hidden={true}
                        accept="image/*"
                        onchange={on_file_change}
                        disabled={props.upload_in_progress}
                    />
                    {if props.upload_in_progress {
                        html! {
                            <>
                                <div class="spinner"></div>
                                <p class="upload-status">{"Uploading Receipt..."}</p>
                            </>
                        }
                    } else {
                        html! {
                            <p class="upload-hint">
                                {props.proof_file_name.clone().unwrap_or_else(|| "Upload Payment Receipt".to_string())}
                            </p>
                        }
                    }}
                </label>
            </div>

            {if props.can_advance {
                html! {
                    <button class="btn-primary" onclick={on_advance}>
                        {"Continue to Confirmation"}
                    </button>
                }
            } else { html! {} }}
        </div>
    }
}
