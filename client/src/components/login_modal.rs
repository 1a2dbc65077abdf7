//! Sign-in modal checked against the demo account table.

use leptos::prelude::*;

use crate::state::credentials::demo_hints;
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

/// Fullscreen modal with the login form. Closing clears any login error.
#[component]
pub fn LoginModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let close = move || session.update(SessionState::close_login);
    let on_backdrop = move |_| close();
    let on_close_click = move |_| close();
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.update(|s| {
            s.login(&BrowserStorage);
        });
    };

    view! {
        <div class="login-modal__backdrop" on:click=on_backdrop>
            <div
                class="glass-panel login-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="login-modal__header">
                    <div>
                        <h2 class="login-modal__title">"Sign In"</h2>
                        <p class="login-modal__subtitle">"Access your organization settings"</p>
                    </div>
                    <button class="login-modal__close" type="button" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label" for="login-email">"Email Address"</label>
                        <input
                            id="login-email"
                            class="field__input field__input--large"
                            type="email"
                            placeholder="admin@lms.com"
                            required=true
                            autofocus=true
                            prop:value=move || session.with(|s| s.form.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.form.email = value);
                            }
                        />
                    </div>

                    <div class="field">
                        <label class="field__label" for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            class="field__input field__input--large"
                            type="password"
                            placeholder="Enter your password"
                            required=true
                            prop:value=move || session.with(|s| s.form.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.form.password = value);
                            }
                        />
                    </div>

                    <Show when=move || session.with(|s| s.login_error.is_some())>
                        <div class="login-form__error">
                            {move || session.with(|s| s.login_error.clone().unwrap_or_default())}
                        </div>
                    </Show>

                    <div class="login-form__hints">
                        <p class="login-form__hints-title">"Demo Credentials:"</p>
                        {demo_hints().map(|hint| view! { <p>"• " {hint}</p> }).collect_view()}
                    </div>

                    <button class="cta-button cta-button--block" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
