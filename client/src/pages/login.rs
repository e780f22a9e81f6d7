//! Login page: username-or-email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route. A successful sign-in persists the session through
//! `ApiClient::sign_in` and flips the shared `AuthState`; the route guard
//! then moves the user on to the product listing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use medicare_api::types::{Credentials, UserProfile};
use medicare_api::{ApiClient, ApiError, SessionStorage, Transport};

use crate::state::auth::AuthState;

/// Shown for rejected logins the backend did not explain.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

pub const DEMO_USERNAME: &str = "testuser";
pub const DEMO_PASSWORD: &str = "password123";

/// Form fields plus request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl LoginForm {
    /// Both fields filled and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
        self.error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.error = None;
    }

    pub fn fill_demo(&mut self) {
        self.username = DEMO_USERNAME.to_owned();
        self.password = DEMO_PASSWORD.to_owned();
        self.error = None;
    }

    /// Mark the form busy and hand out credentials, or `None` if submit is
    /// not allowed right now.
    pub fn start_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_submit(&mut self, error: Option<String>) {
        self.busy = false;
        self.error = error;
    }
}

/// Text the login form shows for `err`.
pub fn login_error_message(err: &ApiError) -> String {
    err.message_or(LOGIN_FAILED_MESSAGE)
}

/// Sign in and persist the session, mapping failures to display text.
///
/// # Errors
///
/// Returns the message to show under the form.
pub async fn submit_login<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    credentials: &Credentials,
) -> Result<UserProfile, String> {
    client.sign_in(credentials).await.map_err(|e| {
        log::error!("login error: {e}");
        login_error_message(&e)
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::start_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = submit_login(&crate::net::web_client(), &credentials).await;
            match result {
                Ok(user) => {
                    form.try_update(|f| f.finish_submit(None));
                    auth.set(AuthState::signed_in(user));
                }
                Err(message) => {
                    form.try_update(|f| f.finish_submit(Some(message)));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>"MediCare Login"</h1>
                    <p>"Welcome back! Please sign in to your account"</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="error-message">
                            <span class="error-icon">"⚠️"</span>
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </div>
                    </Show>
                    <div class="form-group">
                        <label for="username">"Username or Email"</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Enter your username or email"
                            prop:value=move || form.with(|f| f.username.clone())
                            disabled=move || form.with(|f| f.busy)
                            on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || form.with(|f| f.password.clone())
                            disabled=move || form.with(|f| f.busy)
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </div>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || !form.with(LoginForm::can_submit)
                    >
                        {move || if form.with(|f| f.busy) { "Signing in..." } else { "Sign In" }}
                    </button>
                    <div class="demo-section">
                        <p>"Don't have credentials? Try the demo account:"</p>
                        <button
                            class="demo-button"
                            type="button"
                            disabled=move || form.with(|f| f.busy)
                            on:click=move |_| form.update(LoginForm::fill_demo)
                        >
                            "Use Demo Account"
                        </button>
                        <small class="demo-credentials">
                            "Username: " <code>{DEMO_USERNAME}</code> " | Password: " <code>{DEMO_PASSWORD}</code>
                        </small>
                    </div>
                </form>
                <div class="login-footer">
                    <p>"© 2025 MediCare. All rights reserved."</p>
                </div>
            </div>
        </div>
    }
}
