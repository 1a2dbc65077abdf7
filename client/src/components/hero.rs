//! Hero section with the primary call to action and highlight cards.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// DOM id of the settings panel, target of "Go to Settings".
pub const SETTINGS_ANCHOR: &str = "organization-settings";

#[derive(Clone, Copy)]
struct Highlight {
    label: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        label: "Performance",
        text: "Pages optimized to load in under 3 seconds even with thousands of active learners.",
    },
    Highlight {
        label: "Security",
        text: "JWT-based authentication, role-based access and strict input validation by default.",
    },
    Highlight {
        label: "Usability",
        text: "A clean, responsive interface designed to stay out of your way and let learning flow.",
    },
];

fn scroll_to_settings() {
    #[cfg(feature = "hydrate")]
    {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SETTINGS_ANCHOR));
        if let Some(el) = target {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="glass-panel hero">
            <div class="hero__accent" aria-hidden="true"></div>

            <div class="hero__body">
                <div class="hero__badge">
                    <span class="status-dot status-dot--small"></span>
                    "RBAC-first · JWT Secure · Org-wide Policies"
                </div>

                <div>
                    <h1 class="hero__title">
                        "Configure your entire "
                        <span class="hero__title-gradient">"learning organization"</span>
                        " from one beautiful workspace."
                    </h1>
                    <p class="hero__lead">
                        "Set up your organization profile, branding and learning policies once. "
                        "The LMS automatically applies them across all admins, trainers and learners."
                    </p>
                </div>

                <div class="hero__actions">
                    <Show
                        when=move || session.with(SessionState::is_logged_in)
                        fallback=move || {
                            view! {
                                <button
                                    class="cta-button"
                                    type="button"
                                    on:click=move |_| session.update(SessionState::open_login)
                                >
                                    <span>"Launch Organization Console"</span>
                                    <span class="cta-button__arrow">"↗"</span>
                                </button>
                            }
                        }
                    >
                        <button class="cta-button" type="button" on:click=move |_| scroll_to_settings()>
                            <span>"Go to Settings"</span>
                            <span class="cta-button__arrow">"↓"</span>
                        </button>
                    </Show>
                    <button class="pill-button pill-button--outline hero__preview" type="button">
                        <span class="status-dot status-dot--small"></span>
                        "Live preview with sample data"
                    </button>
                </div>
            </div>

            <div class="hero__highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="highlight-card">
                                <p class="highlight-card__label">{item.label}</p>
                                <p class="highlight-card__text">{item.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
