//! 个人档案编辑
//!
//! 技能以逗号分隔输入，提交前切分；保存成功后同步回认证上下文，
//! 这样页头与其他页面立即看到新名字。

use campushire_shared::protocol::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::toast::{Notification, Toast};

#[component]
pub fn ProfileSection() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

    let current = auth.state.get_untracked().profile;
    let initial_name = current
        .as_ref()
        .map(|p| p.full_name.clone())
        .unwrap_or_default();
    let public_slug = current.as_ref().and_then(|p| p.slug.clone());

    let (full_name, set_full_name) = signal(initial_name);
    let (headline, set_headline) = signal(String::new());
    let (skills, set_skills) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if full_name.get().trim().is_empty() {
            set_notification.set(Some(("Name cannot be empty".to_string(), true)));
            return;
        }

        let api = api.clone();
        let headline_value = headline.get_untracked();
        let req = UpdateProfileRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            headline: if headline_value.trim().is_empty() {
                None
            } else {
                Some(headline_value)
            },
            skills: skills
                .get_untracked()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api.send(&req).await {
                Ok(profile) => {
                    auth.set_state.update(|state| state.profile = Some(profile));
                    set_notification.set(Some(("Profile saved".to_string(), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to save profile: {e}"), true)));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-xl space-y-4">
            <Toast notification=notification set_notification=set_notification />

            {public_slug
                .map(|slug| {
                    view! {
                        <div role="alert" class="alert alert-info text-sm">
                            <span>"Your public page: /c/" {slug}</span>
                        </div>
                    }
                })}

            <form class="space-y-4" on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="profile-name">
                        <span class="label-text">"Full name"</span>
                    </label>
                    <input
                        id="profile-name"
                        type="text"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        prop:value=full_name
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile-headline">
                        <span class="label-text">"Headline"</span>
                    </label>
                    <input
                        id="profile-headline"
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Final-year CS student, open to backend roles"
                        on:input=move |ev| set_headline.set(event_target_value(&ev))
                        prop:value=headline
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile-skills">
                        <span class="label-text">"Skills (comma separated)"</span>
                    </label>
                    <input
                        id="profile-skills"
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Rust, SQL, React"
                        on:input=move |ev| set_skills.set(event_target_value(&ev))
                        prop:value=skills
                    />
                </div>
                <button class="btn btn-primary" disabled=move || saving.get()>
                    {move || {
                        if saving.get() {
                            view! {
                                <span class="loading loading-spinner"></span>
                                "Saving..."
                            }
                                .into_any()
                        } else {
                            "Save profile".into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
