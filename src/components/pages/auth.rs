// ============================================================================
// AUTH PAGE - Login / registro con selección de rol
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::components::pages::PageProps;
use crate::components::ErrorBanner;
use crate::models::{Credentials, RegisterForm, Role};

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[function_component(AuthPage)]
pub fn auth_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let mode = use_state(|| AuthMode::Login);
    let validation = use_state(|| None::<String>);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let role_ref = use_node_ref();

    let on_submit = {
        let mode = *mode;
        let validation = validation.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let role_ref = role_ref.clone();
        let login = ctx.login.clone();
        let register = ctx.register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value().trim().to_string())
                    .unwrap_or_default()
            };
            let email = value_of(&email_ref);
            let password = value_of(&password_ref);

            if email.is_empty() || password.is_empty() {
                validation.set(Some("Please fill in email and password".to_string()));
                return;
            }
            validation.set(None);

            match mode {
                AuthMode::Login => login.emit(Credentials { email, password }),
                AuthMode::Register => {
                    let name = value_of(&name_ref);
                    if name.is_empty() {
                        validation.set(Some("Please tell us your name".to_string()));
                        return;
                    }
                    let role = role_ref
                        .cast::<HtmlSelectElement>()
                        .and_then(|select| Role::parse(&select.value()))
                        .unwrap_or(Role::User);
                    register.emit(RegisterForm { name, email, password, role });
                }
            }
        })
    };

    let toggle_mode = {
        let mode = mode.clone();
        let validation = validation.clone();
        Callback::from(move |_: MouseEvent| {
            validation.set(None);
            mode.set(match *mode {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            });
        })
    };

    let error = (*validation).clone().or_else(|| ctx.session.error.clone());
    let loading = ctx.session.loading;
    let is_register = *mode == AuthMode::Register;

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ if is_register { "Create your account" } else { "Welcome back" } }</h1>

                if let Some(message) = error {
                    <ErrorBanner {message} />
                }

                <form class="auth-form" onsubmit={on_submit}>
                    if is_register {
                        <div class="form-group">
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" ref={name_ref} placeholder="Your name" />
                        </div>
                    }
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" ref={email_ref} placeholder="you@example.com" />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" ref={password_ref} />
                    </div>
                    if is_register {
                        <div class="form-group">
                            <label for="role">{"I am a..."}</label>
                            <select id="role" ref={role_ref}>
                                { for Role::ALL.iter().map(|role| html! {
                                    <option value={role.as_str()} selected={*role == Role::User}>
                                        {role.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    }
                    <button type="submit" class="btn-primary" disabled={loading}>
                        { match (loading, is_register) {
                            (true, _) => "Please wait...",
                            (false, true) => "Sign up",
                            (false, false) => "Sign in",
                        } }
                    </button>
                </form>

                <button class="btn-link" onclick={toggle_mode}>
                    { if is_register { "Already have an account? Sign in" } else { "New here? Create an account" } }
                </button>
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>
                    {"← Back"}
                </button>
            </div>
        </div>
    }
}
