//! Static access-control panel describing each console role.

use leptos::prelude::*;

use crate::state::session::Role;

fn role_description(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "Full control over the LMS: tenants, security, billing and global configuration.",
        Role::AdminHr => "Manage users, assign learning paths and track organization-wide progress.",
        Role::Trainer => "Design courses, schedule sessions and evaluate learner performance.",
        Role::Learner => "Consume content, complete assessments and grow skills at your own pace.",
    }
}

/// CSS modifier selecting the card's accent gradient.
fn role_accent(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "role-card__accent--amber",
        Role::AdminHr => "role-card__accent--emerald",
        Role::Trainer => "role-card__accent--sky",
        Role::Learner => "role-card__accent--violet",
    }
}

#[component]
pub fn RolePanel() -> impl IntoView {
    view! {
        <div class="glass-panel panel">
            <div class="panel__header">
                <div>
                    <p class="panel__eyebrow">"Access Control"</p>
                    <p class="panel__title">"Role-Based Access (RBAC)"</p>
                </div>
                <span class="panel__tag panel__tag--emerald">"Secure by Design"</span>
            </div>

            <div class="role-grid">
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <article class="role-card">
                                <div class=format!("role-card__accent {}", role_accent(role)) aria-hidden="true"></div>
                                <div class="role-card__header">
                                    <h3 class="role-card__name">{role.label()}</h3>
                                    <span class="role-card__state">"Active"</span>
                                </div>
                                <p class="role-card__description">{role_description(role)}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
