//! Organization settings form: profile, branding, and policies.
//!
//! Controls are disabled unless the session role may edit settings. The save
//! button runs the simulated save (delay, write, status badge, auto-clear);
//! reset writes the defaults straight away.

use leptos::prelude::*;

use super::hero::SETTINGS_ANCHOR;
use crate::state::session::SessionState;
use crate::state::settings::{CONCURRENT_USERS_MIN, LearningPolicy, SettingsState, parse_concurrent_users};
use crate::util::storage::BrowserStorage;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();

    let can_edit = move || session.with(SessionState::can_edit_settings);
    let locked = move || !can_edit();

    let on_save = move |_| {
        if !session.with_untracked(SessionState::can_edit_settings) {
            return;
        }
        let mut started = false;
        settings.update(|s| started = s.begin_save());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::settings::{SAVE_DELAY, STATUS_CLEAR_DELAY};

            gloo_timers::future::sleep(SAVE_DELAY).await;
            settings.update(|s| {
                s.commit_save(&BrowserStorage);
            });
            gloo_timers::future::sleep(STATUS_CLEAR_DELAY).await;
            settings.update(SettingsState::clear_status);
        });
    };

    let on_reset = move |_| {
        if session.with_untracked(SessionState::can_edit_settings) {
            settings.update(|s| s.reset(&BrowserStorage));
        }
    };

    view! {
        <div class="glass-panel panel" id=SETTINGS_ANCHOR>
            <div class="panel__header">
                <div>
                    <p class="panel__eyebrow">"Organization Settings"</p>
                    <p class="panel__title">"Profile, Branding & Policies"</p>
                </div>
                <span class="panel__tag panel__tag--brand">"Guided Setup"</span>
            </div>

            <Show when=locked>
                <div class="settings__notice">
                    <p class="settings__notice-title">"🔒 Admin Access Required"</p>
                    <p class="settings__notice-text">
                        "Please sign in as Admin or Super Admin to edit organization settings."
                    </p>
                </div>
            </Show>

            <div class="settings">
                <div class="settings__row settings__row--halves">
                    <div class="field">
                        <label class="field__label" for="org-name">"Organization Name"</label>
                        <input
                            id="org-name"
                            class="field__input"
                            type="text"
                            placeholder="Acme Learning Group"
                            prop:value=move || settings.with(|s| s.settings.org_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|s| s.settings.org_name = value);
                            }
                            disabled=locked
                        />
                    </div>
                    <div class="field">
                        <label class="field__label" for="brand-color">"Primary Brand Color"</label>
                        <div class="field__color">
                            <input
                                class="field__swatch"
                                type="color"
                                prop:value=move || settings.with(|s| s.settings.brand_color.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    settings.update(|s| s.settings.brand_color = value);
                                }
                                disabled=locked
                            />
                            <input
                                id="brand-color"
                                class="field__input"
                                type="text"
                                prop:value=move || settings.with(|s| s.settings.brand_color.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    settings.update(|s| s.settings.brand_color = value);
                                }
                                disabled=locked
                            />
                        </div>
                    </div>
                </div>

                <div class="settings__row settings__row--wide-left">
                    <div class="field">
                        <label class="field__label" for="learning-policy">"Default Learning Policy"</label>
                        <select
                            id="learning-policy"
                            class="field__input field__select"
                            prop:value=move || settings.with(|s| s.settings.learning_policy.label())
                            on:change=move |ev| {
                                if let Some(policy) = LearningPolicy::from_label(&event_target_value(&ev)) {
                                    settings.update(|s| s.settings.learning_policy = policy);
                                }
                            }
                            disabled=locked
                        >
                            {LearningPolicy::ALL
                                .into_iter()
                                .map(|policy| {
                                    view! {
                                        <option
                                            value=policy.label()
                                            selected=move || settings.with(|s| s.settings.learning_policy == policy)
                                        >
                                            {policy.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label class="field__label" for="concurrent-users">"Concurrent User Limit"</label>
                        <input
                            id="concurrent-users"
                            class="field__input"
                            type="number"
                            min=CONCURRENT_USERS_MIN.to_string()
                            prop:value=move || settings.with(|s| s.settings.concurrent_users.to_string())
                            on:input=move |ev| {
                                let value = parse_concurrent_users(&event_target_value(&ev));
                                settings.update(|s| s.settings.concurrent_users = value);
                            }
                            disabled=locked
                        />
                    </div>
                </div>

                <div class="settings__footer">
                    <div class="settings__toggles">
                        <label class="toggle">
                            <input
                                class="toggle__box"
                                type="checkbox"
                                prop:checked=move || settings.with(|s| s.settings.jwt_sso)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    settings.update(|s| s.settings.jwt_sso = checked);
                                }
                                disabled=locked
                            />
                            <span>"Enforce JWT-based SSO for admins"</span>
                        </label>
                        <label class="toggle">
                            <input
                                class="toggle__box"
                                type="checkbox"
                                prop:checked=move || settings.with(|s| s.settings.strong_passwords)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    settings.update(|s| s.settings.strong_passwords = checked);
                                }
                                disabled=locked
                            />
                            <span>"Require strong passwords for all users"</span>
                        </label>
                    </div>

                    <div class="settings__actions">
                        <button class="pill-button pill-button--outline" type="button" on:click=on_reset disabled=locked>
                            "Reset"
                        </button>
                        <button
                            class="save-button"
                            type="button"
                            on:click=on_save
                            disabled=move || !settings.with(|s| s.can_save(can_edit()))
                        >
                            {move || settings.with(|s| s.status.button_label())}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
