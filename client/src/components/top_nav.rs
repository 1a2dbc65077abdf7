//! Top navigation bar with brand mark and sign-in controls.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn TopNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_sign_in = move |_| session.update(SessionState::open_login);
    let on_sign_out = move |_| session.update(|s| s.logout(&BrowserStorage));

    let user_name = move || session.with(|s| s.session.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_role = move || session.with(|s| s.session.as_ref().map_or("", |u| u.role.label()));

    view! {
        <header class="top-nav">
            <div class="top-nav__brand">
                <div class="top-nav__logo">
                    <span>"L"</span>
                </div>
                <div>
                    <p class="top-nav__title">"Lumina LMS"</p>
                    <p class="top-nav__subtitle">"Organization & Settings Portal"</p>
                </div>
            </div>

            <div class="top-nav__actions">
                <Show
                    when=move || session.with(SessionState::is_logged_in)
                    fallback=move || {
                        view! {
                            <button class="pill-button pill-button--outline top-nav__tour" type="button">
                                "Product Tour"
                            </button>
                            <button class="pill-button" type="button" on:click=on_sign_in>
                                "Sign In"
                            </button>
                        }
                    }
                >
                    <div class="top-nav__user">
                        <span class="status-dot"></span>
                        <span class="top-nav__user-name">{user_name}</span>
                        <span class="top-nav__user-sep">"•"</span>
                        <span class="top-nav__user-role">{user_role}</span>
                    </div>
                    <button class="pill-button" type="button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
