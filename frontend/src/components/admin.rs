//! 管理员后台
//!
//! 子栏目编码为路径段：overview（默认）/ candidates / recruiters /
//! jobs / courses / alerts / ads / messages / colleges。
//! 角色门槛在视图选择器里处理，这里假定账户是管理员。

use campushire_shared::protocol::{AdminCandidatesRequest, AdminJobsRequest, AdminRecruitersRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::admin::ads::AdsSection;
use crate::components::admin::alerts::AlertsOverviewSection;
use crate::components::admin::candidates::CandidatesSection;
use crate::components::admin::colleges::CollegesSection;
use crate::components::admin::courses::CoursesSection;
use crate::components::admin::jobs::JobsModerationSection;
use crate::components::admin::messages::MessagesSection;
use crate::components::admin::recruiters::RecruitersSection;
use crate::components::icons::LogOut;
use crate::web::route::PageState;
use crate::web::router::use_router;

pub mod ads;
pub mod alerts;
pub mod candidates;
pub mod college_students;
pub mod colleges;
pub mod courses;
pub mod jobs;
pub mod messages;
pub mod recruiters;

const SECTIONS: [(&str, &str); 9] = [
    ("overview", "Overview"),
    ("candidates", "Candidates"),
    ("recruiters", "Recruiters"),
    ("jobs", "Jobs"),
    ("courses", "Courses"),
    ("alerts", "Alerts"),
    ("ads", "Ads"),
    ("messages", "Messages"),
    ("colleges", "Colleges"),
];

#[component]
pub fn AdminPage(#[prop(optional_no_strip)] section: Option<String>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let active = section.unwrap_or_default();
    // 未知栏目当 overview 处理
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
                                router.navigate(PageState::Admin { section });
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

    let body: AnyView = match active.as_str() {
        "candidates" => view! { <CandidatesSection /> }.into_any(),
        "recruiters" => view! { <RecruitersSection /> }.into_any(),
        "jobs" => view! { <JobsModerationSection /> }.into_any(),
        "courses" => view! { <CoursesSection /> }.into_any(),
        "alerts" => view! { <AlertsOverviewSection /> }.into_any(),
        "ads" => view! { <AdsSection /> }.into_any(),
        "messages" => view! { <MessagesSection /> }.into_any(),
        "colleges" => view! { <CollegesSection /> }.into_any(),
        _ => view! { <Overview /> }.into_any(),
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Back office"</h1>
                <button class="btn btn-ghost btn-sm gap-1" on:click=on_logout>
                    <LogOut attr:class="h-4 w-4" />
                    "Sign out"
                </button>
            </div>

            <div role="tablist" class="tabs tabs-boxed w-fit flex-wrap">{tabs}</div>

            {body}
        </div>
    }
}

/// 概览：平台关键数字
#[component]
fn Overview() -> impl IntoView {
    let api = use_api();

    let (candidates, set_candidates) = signal(0usize);
    let (recruiters_pending, set_recruiters_pending) = signal(0usize);
    let (jobs_live, set_jobs_live) = signal(0usize);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(list) = api.send(&AdminCandidatesRequest).await {
                set_candidates.set(list.len());
            }
            if let Ok(list) = api.send(&AdminRecruitersRequest).await {
                set_recruiters_pending
                    .set(list.iter().filter(|r| !r.is_approved).count());
            }
            if let Ok(list) = api.send(&AdminJobsRequest).await {
                set_jobs_live.set(list.iter().filter(|j| j.is_active).count());
            }
            set_loading.set(false);
        });
    });

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
                    <div class="stat-title">"Registered candidates"</div>
                    <div class="stat-value text-primary">{candidates}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Recruiters awaiting approval"</div>
                    <div class="stat-value text-warning">{recruiters_pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Jobs live"</div>
                    <div class="stat-value text-success">{jobs_live}</div>
                </div>
            </div>
        </Show>
    }
}
