use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfigErrorScreenProps {
    pub problems: Vec<String>,
}

/// Shown instead of the checkout when the bundle was built without valid configuration
#[function_component(ConfigErrorScreen)]
pub fn config_error_screen(props: &ConfigErrorScreenProps) -> Html {
    html! {
        <div class="config-error">
            <h1 class="title">{"Checkout unavailable"}</h1>
            <p class="subtitle">{"This storefront was built with incomplete settings:"}</p>
            <ul>
                {for props.problems.iter().map(|problem| html! { <li>{problem.clone()}</li> })}
            </ul>
        </div>
    }
}
