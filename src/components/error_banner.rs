use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner" role="alert">
            <span class="error-icon">{"⚠️"}</span>
            <span class="error-message">{&props.message}</span>
            if let Some(on_retry) = &props.on_retry {
                <button class="btn-retry" onclick={on_retry.reform(|_| ())}>
                    {"Retry"}
                </button>
            }
        </div>
    }
}
