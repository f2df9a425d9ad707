use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_else(|| "Loading...".to_string())]
    pub message: String,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <p>{&props.message}</p>
        </div>
    }
}
