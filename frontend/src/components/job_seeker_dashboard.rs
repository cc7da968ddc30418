//! 求职者后台
//!
//! 子栏目编码为路径段：overview（默认）/ applications / alerts / profile，
//! 未知栏目回落到 overview。

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::{Bell, Briefcase, LogOut, Users};
use crate::components::job_seeker_dashboard::alerts::AlertsSection;
use crate::components::job_seeker_dashboard::applications::ApplicationsSection;
use crate::components::job_seeker_dashboard::profile_form::ProfileSection;
use crate::web::route::PageState;
use crate::web::router::use_router;

pub mod alerts;
pub mod applications;
pub mod profile_form;

const SECTIONS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("applications", "Applications"),
    ("alerts", "Job alerts"),
    ("profile", "Profile"),
];

#[component]
pub fn JobSeekerDashboardPage(#[prop(optional_no_strip)] section: Option<String>) -> impl IntoView {
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
                                router.navigate(PageState::JobSeekerDashboard { section });
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
        "applications" => view! { <ApplicationsSection /> }.into_any(),
        "alerts" => view! { <AlertsSection /> }.into_any(),
        "profile" => view! { <ProfileSection /> }.into_any(),
        _ => view! { <Overview /> }.into_any(),
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">
                    {move || {
                        auth.state
                            .get()
                            .profile
                            .map(|p| format!("Welcome, {}", p.full_name))
                            .unwrap_or_else(|| "My dashboard".to_string())
                    }}
                </h1>
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

/// 概览栏目：快捷入口
#[component]
fn Overview() -> impl IntoView {
    let router = use_router();

    let to_jobs = {
        let router = router.clone();
        move |_| router.navigate(PageState::Jobs)
    };
    let to_applications = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::JobSeekerDashboard {
                section: Some("applications".to_string()),
            })
        }
    };
    let to_alerts = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::JobSeekerDashboard {
                section: Some("alerts".to_string()),
            })
        }
    };

    view! {
        <div class="grid md:grid-cols-3 gap-4">
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <Briefcase attr:class="h-8 w-8 text-primary" />
                    <h2 class="card-title">"Find jobs"</h2>
                    <p class="text-base-content/70">"Fresh openings are posted every day."</p>
                    <button class="btn btn-outline btn-sm" on:click=to_jobs>"Browse"</button>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <Users attr:class="h-8 w-8 text-primary" />
                    <h2 class="card-title">"My applications"</h2>
                    <p class="text-base-content/70">"Track the status of every application."</p>
                    <button class="btn btn-outline btn-sm" on:click=to_applications>"Open"</button>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <Bell attr:class="h-8 w-8 text-primary" />
                    <h2 class="card-title">"Job alerts"</h2>
                    <p class="text-base-content/70">"Get matching jobs in your inbox."</p>
                    <button class="btn btn-outline btn-sm" on:click=to_alerts>"Manage"</button>
                </div>
            </div>
        </div>
    }
}
