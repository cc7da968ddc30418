//! 招聘方后台
//!
//! 子栏目：overview（默认）/ jobs / post-job / applicants。
//! 审批门槛在视图选择器里处理，这里假定账户已通过审核。

use campushire_shared::Job;
use campushire_shared::protocol::{RecruiterJobsRequest, SetJobActiveRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::LogOut;
use crate::components::recruiter_dashboard::applicants::ApplicantsSection;
use crate::components::recruiter_dashboard::post_job_form::PostJobSection;
use crate::components::toast::{Notification, Toast};
use crate::web::route::PageState;
use crate::web::router::use_router;

pub mod applicants;
pub mod post_job_form;

const SECTIONS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("jobs", "My jobs"),
    ("post-job", "Post a job"),
    ("applicants", "Applicants"),
];

#[component]
pub fn RecruiterDashboardPage(#[prop(optional_no_strip)] section: Option<String>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let active = section.unwrap_or_default();
    let active = if SECTIONS.iter().any(|(key, _)| *key == active) {
        active
    } else {
        "overview".to_string()
    };

    let tabs = {
        let router = router.clone();
        let active = active.clone();
        move || {
            SECTIONS
                .iter()
                .map(|(key, label)| {
                    let key = *key;
                    let router = router.clone();
                    let class = if key == active { "tab tab-active" } else { "tab" };
                    view! {
                        <button
                            class=class
                            on:click=move |_| {
                                let section = (key != "overview").then(|| key.to_string());
                                router.navigate(PageState::RecruiterDashboard { section });
                            }
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()
        }
    };

    let on_logout = {
        let router = router.clone();
        move |_| {
            logout(&auth);
            router.navigate(PageState::Landing);
        }
    };

    let company = move || {
        auth.state
            .get()
            .profile
            .and_then(|p| p.company_name)
            .unwrap_or_else(|| "Recruiter dashboard".to_string())
    };

    let body: AnyView = match active.as_str() {
        "jobs" => view! { <JobsSection /> }.into_any(),
        "post-job" => view! { <PostJobSection /> }.into_any(),
        "applicants" => view! { <ApplicantsSection /> }.into_any(),
        _ => view! { <Overview /> }.into_any(),
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{company}</h1>
                <button class="btn btn-ghost btn-sm gap-1" on:click=on_logout>
                    <LogOut attr:class="h-4 w-4" />
                    "Sign out"
                </button>
            </div>

            <div role="tablist" class="tabs tabs-boxed w-fit">{tabs}</div>

            {body}
        </div>
    }
}

/// 概览：职位数量统计
#[component]
fn Overview() -> impl IntoView {
    let api = use_api();

    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(data) = api.send(&RecruiterJobsRequest).await {
                set_jobs.set(data);
            }
            set_loading.set(false);
        });
    });

    let total = move || jobs.with(|j| j.len());
    let active_count = move || jobs.with(|j| j.iter().filter(|job| job.is_active).count());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="flex justify-center py-8">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            }
        >
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total postings"</div>
                    <div class="stat-value text-primary">{total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Currently live"</div>
                    <div class="stat-value text-success">{active_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Paused"</div>
                    <div class="stat-value">{move || total() - active_count()}</div>
                </div>
            </div>
        </Show>
    }
}

/// 职位列表：上线/下线切换
#[component]
fn JobsSection() -> impl IntoView {
    let api = use_api();

    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&RecruiterJobsRequest).await {
                Ok(data) => set_jobs.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load jobs: {e}"), true)));
                }
            }
            set_loading.set(false);
        });
    });

    let api_toggle = use_api();
    let on_toggle = move |id: String, is_active: bool| {
        let api = api_toggle.clone();
        spawn_local(async move {
            match api.send(&SetJobActiveRequest { id, is_active }).await {
                Ok(updated) => {
                    set_jobs.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|j| j.id == updated.id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to update job: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "You have not posted any jobs yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Location"</th>
                                    <th>"Type"</th>
                                    <th>"Posted"</th>
                                    <th>"Live"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || jobs.get() key=|job| job.id.clone() let:job>
                                    {
                                        let on_toggle = on_toggle.clone();
                                        let id = job.id.clone();
                                        let is_active = job.is_active;
                                        view! {
                                            <tr>
                                                <td class="font-medium">{job.title.clone()}</td>
                                                <td>{job.location.clone()}</td>
                                                <td>{job.job_type.label()}</td>
                                                <td>{job.posted_at.format("%b %e, %Y").to_string()}</td>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        class="toggle toggle-success"
                                                        prop:checked=is_active
                                                        on:change=move |_| {
                                                            on_toggle(id.clone(), !is_active)
                                                        }
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                </For>
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
