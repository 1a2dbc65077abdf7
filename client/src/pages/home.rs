//! Console landing page: hero, role panel, settings form, and login modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It restores the stored session and settings once
//! hydrated, then lets the components drive all further state changes.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::login_modal::LoginModal;
use crate::components::role_panel::RolePanel;
use crate::components::settings_panel::SettingsPanel;
use crate::components::top_nav::TopNav;
use crate::state::session::SessionState;
use crate::state::settings::SettingsState;

fn footer_text(year: i32) -> String {
    format!("© {year} Lumina LMS · Designed for modern organizations.")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();

    // Restore persisted state after hydration; SSR always renders defaults.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let store = crate::util::storage::BrowserStorage;
        session.set(SessionState::restore(&store));
        settings.set(SettingsState::restore(&store));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = settings;

    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <div class="console">
            <div class="console__glow" aria-hidden="true">
                <div class="console__glow-blob console__glow-blob--brand"></div>
                <div class="console__glow-blob console__glow-blob--fuchsia"></div>
                <div class="console__glow-blob console__glow-blob--emerald"></div>
            </div>

            <div class="console__shell">
                <TopNav/>

                <main class="console__grid">
                    <Hero/>
                    <section class="console__aside">
                        <RolePanel/>
                        <SettingsPanel/>
                    </section>
                </main>

                <footer class="console__footer">
                    <p>{footer_text(year)}</p>
                    <p class="console__footer-stack">
                        "Built with Rust, Leptos and Axum. Settings stay in this browser."
                    </p>
                </footer>
            </div>

            <Show when=move || session.with(|s| s.login_open)>
                <LoginModal/>
            </Show>
        </div>
    }
}
