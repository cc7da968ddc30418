//! 招聘方入驻向导
//!
//! 两步：填写公司信息 -> 确认提交。提交成功后把返回的档案
//! 写回认证上下文（`onboarding_complete` 翻转），再进入招聘后台。

use campushire_shared::protocol::CompleteOnboardingRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::Building;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn RecruiterOnboardingPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (step, set_step) = signal(1u8);
    let (company_name, set_company_name) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (industry, set_industry) = signal(String::new());
    let (company_size, set_company_size) = signal("1-10".to_string());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let to_review = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if company_name.get().trim().is_empty() || industry.get().trim().is_empty() {
            set_error_msg.set(Some("Company name and industry are required".to_string()));
            return;
        }
        set_error_msg.set(None);
        set_step.set(2);
    };

    let on_confirm = {
        let api = api.clone();
        let router = router.clone();
        move |_| {
            let api = api.clone();
            let router = router.clone();
            let site = website.get_untracked();
            let req = CompleteOnboardingRequest {
                company_name: company_name.get_untracked().trim().to_string(),
                website: if site.trim().is_empty() { None } else { Some(site) },
                industry: industry.get_untracked(),
                company_size: company_size.get_untracked(),
            };
            set_submitting.set(true);
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(profile) => {
                        auth.set_state.update(|state| state.profile = Some(profile));
                        router.navigate(PageState::RecruiterDashboard { section: None });
                    }
                    Err(e) => {
                        set_error_msg.set(Some(e.to_string()));
                        set_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="max-w-xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center gap-2">
                <Building attr:class="h-8 w-8 text-primary" />
                <h1 class="text-3xl font-bold">"Set up your company"</h1>
            </div>

            <ul class="steps w-full">
                <li class="step step-primary">"Company details"</li>
                <li class=move || {
                    if step.get() >= 2 { "step step-primary" } else { "step" }
                }>"Review"</li>
            </ul>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap()}</span>
                </div>
            </Show>

            <Show
                when=move || step.get() == 1
                fallback={
                    let on_confirm = on_confirm.clone();
                    move || {
                        let on_confirm = on_confirm.clone();
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body space-y-2">
                                    <h2 class="card-title">"Confirm your details"</h2>
                                    <p>
                                        <span class="font-medium">"Company: "</span>
                                        {company_name.get_untracked()}
                                    </p>
                                    <p>
                                        <span class="font-medium">"Industry: "</span>
                                        {industry.get_untracked()}
                                    </p>
                                    <p>
                                        <span class="font-medium">"Size: "</span>
                                        {company_size.get_untracked()} " employees"
                                    </p>
                                    <div class="card-actions justify-between mt-4">
                                        <button class="btn btn-ghost" on:click=move |_| set_step.set(1)>
                                            "Back"
                                        </button>
                                        <button
                                            class="btn btn-primary"
                                            disabled=move || submitting.get()
                                            on:click=on_confirm
                                        >
                                            {move || {
                                                if submitting.get() {
                                                    view! {
                                                        <span class="loading loading-spinner"></span>
                                                        "Submitting..."
                                                    }
                                                        .into_any()
                                                } else {
                                                    "Finish setup".into_any()
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                }
            >
                <form class="card bg-base-100 shadow-xl" on:submit=to_review>
                    <div class="card-body space-y-2">
                        <div class="form-control">
                            <label class="label" for="company-name">
                                <span class="label-text">"Company name"</span>
                            </label>
                            <input
                                id="company-name"
                                type="text"
                                class="input input-bordered"
                                placeholder="Acme Corp"
                                on:input=move |ev| set_company_name.set(event_target_value(&ev))
                                prop:value=company_name
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="company-website">
                                <span class="label-text">"Website (optional)"</span>
                            </label>
                            <input
                                id="company-website"
                                type="url"
                                class="input input-bordered"
                                placeholder="https://acme.example"
                                on:input=move |ev| set_website.set(event_target_value(&ev))
                                prop:value=website
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="company-industry">
                                <span class="label-text">"Industry"</span>
                            </label>
                            <input
                                id="company-industry"
                                type="text"
                                class="input input-bordered"
                                placeholder="Software"
                                on:input=move |ev| set_industry.set(event_target_value(&ev))
                                prop:value=industry
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="company-size">
                                <span class="label-text">"Company size"</span>
                            </label>
                            <select
                                id="company-size"
                                class="select select-bordered"
                                on:change=move |ev| set_company_size.set(event_target_value(&ev))
                            >
                                <option value="1-10" selected>"1-10"</option>
                                <option value="11-50">"11-50"</option>
                                <option value="51-200">"51-200"</option>
                                <option value="201+">"201+"</option>
                            </select>
                        </div>
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" type="submit">"Continue"</button>
                        </div>
                    </div>
                </form>
            </Show>
        </div>
    }
}
