use shared::{DraftField, OrderDraft, PriceTier};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailsStepProps {
    pub draft: OrderDraft,
    pub can_advance: bool,
    pub on_field_change: Callback<(DraftField, String)>,
    pub on_advance: Callback<()>,
}

#[function_component(DetailsStep)]
pub fn details_step(props: &DetailsStepProps) -> Html {
    // Text inputs report on every keystroke so the advance button tracks the gate
    let on_text_input = |field: DraftField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_price_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::UnitPrice, select.value()));
        })
    };

    let on_advance = {
        let on_advance = props.on_advance.clone();
        Callback::from(move |_: MouseEvent| on_advance.emit(()))
    };

    let selected_price = props.draft.unit_price.amount().to_string();

    html! {
        <div class="checkout-step step-details">
            <h1 class="title">{"Chianny Chin Chin"}</h1>
            <p class="subtitle">{"The homemade golden crunch of perfection"}</p>

            <div class="input-group">
                <label class="input-label" for="customer-name">{"Connoisseur Name"}</label>
                <input
                    id="customer-name"
                    type="text"
                    class="input-field"
                    placeholder="Your Name"
                    value={props.draft.name.clone()}
                    oninput={on_text_input(DraftField::Name)}
                />
            </div>

            <div class="input-group">
                <label class="input-label" for="customer-phone">{"Contact Number"}</label>
                <input
                    id="customer-phone"
                    type="tel"
                    class="input-field"
                    placeholder="+234..."
                    value={props.draft.phone.clone()}
                    oninput={on_text_input(DraftField::Phone)}
                />
            </div>

            <div class="input-group">
                <label class="input-label" for="pack-selection">{"Pack Selection"}</label>
                <select id="pack-selection" class="input-field" onchange={on_price_change}>
                    {for PriceTier::ALL.iter().map(|tier| {
                        let value = tier.amount().to_string();
                        html! {
                            <option value={value.clone()} selected={value == selected_price}>
                                {tier.label()}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="input-group">
                <label class="input-label" for="pack-quantity">{"Selection Quantity"}</label>
                <input
                    id="pack-quantity"
                    type="number"
                    min="1"
                    class="input-field"
                    value={props.draft.quantity.clone()}
                    oninput={on_text_input(DraftField::Quantity)}
                />
            </div>

            <button
                class={classes!("btn-primary", (!props.can_advance).then_some("btn-disabled"))}
                onclick={on_advance}
                disabled={!props.can_advance}
            >
                {"Advance to Order"}
            </button>
        </div>
    }
}
