mod components;
mod hooks;
mod services;

use components::checkout::CheckoutForm;
use components::config_error::ConfigErrorScreen;
use services::{build_env, logging::Logger};
use shared::{CheckoutConfig, ConfigErrors};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Result<CheckoutConfig, ConfigErrors>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    match &props.config {
        Ok(config) => html! { <CheckoutForm config={config.clone()} /> },
        Err(errors) => {
            let problems: Vec<String> = errors.0.iter().map(ToString::to_string).collect();
            html! { <ConfigErrorScreen {problems} /> }
        }
    }
}

fn main() {
    // Fail fast: a bad build never renders the wizard
    let config = CheckoutConfig::load(build_env::lookup);
    match &config {
        Ok(config) => Logger::info_with_component(
            "app",
            &format!("Checkout ready for cloud '{}'", config.cloud_name),
        ),
        Err(errors) => Logger::error_with_component(
            "app",
            &format!("Invalid checkout configuration: {}", errors),
        ),
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
