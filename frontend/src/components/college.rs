//! 学院后台
//!
//! 子栏目：overview（默认）/ students。
//! 角色门槛在视图选择器里处理，这里假定账户是学院。

use campushire_shared::protocol::{MyCollegeRequest, MyStudentsRequest};
use campushire_shared::{College, StudentRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::{GraduationCap, LogOut};
use crate::web::route::PageState;
use crate::web::router::use_router;

const SECTIONS: [(&str, &str); 2] = [("overview", "Overview"), ("students", "Students")];

#[component]
pub fn CollegeDashboardPage(#[prop(optional_no_strip)] section: Option<String>) -> impl IntoView {
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
                                router.navigate(PageState::College { section });
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
        "students" => view! { <StudentsSection /> }.into_any(),
        _ => view! { <Overview /> }.into_any(),
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <GraduationCap attr:class="h-8 w-8 text-primary" />
                    <h1 class="text-3xl font-bold">"Placement cell"</h1>
                </div>
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

/// 概览：本学院档案与就业数字
#[component]
fn Overview() -> impl IntoView {
    let api = use_api();

    let (college, set_college) = signal(Option::<College>::None);
    let (students, set_students) = signal(Vec::<StudentRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&MyCollegeRequest).await {
                Ok(data) => set_college.set(Some(data)),
                Err(e) => set_error.set(Some(format!("Failed to load college profile: {e}"))),
            }
            if let Ok(data) = api.send(&MyStudentsRequest).await {
                set_students.set(data);
            }
            set_loading.set(false);
        });
    });

    let total = move || students.with(|list| list.len());
    let placed = move || students.with(|list| list.iter().filter(|s| s.placed).count());

    view! {
        <div class="space-y-4">
            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap()}</span>
                </div>
            </Show>

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
                {move || {
                    college
                        .get()
                        .map(|college| {
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">{college.name.clone()}</h2>
                                        <p class="text-base-content/70">{college.city.clone()}</p>
                                        {college
                                            .website
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        class="link link-primary w-fit"
                                                        href=url.clone()
                                                        target="_blank"
                                                        rel="noopener"
                                                    >
                                                        {url.clone()}
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                }}

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Students on record"</div>
                        <div class="stat-value text-primary">{total}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Placed"</div>
                        <div class="stat-value text-success">{placed}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Still searching"</div>
                        <div class="stat-value">{move || total() - placed()}</div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 学生名册栏目
#[component]
fn StudentsSection() -> impl IntoView {
    let api = use_api();

    let (students, set_students) = signal(Vec::<StudentRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&MyStudentsRequest).await {
                Ok(data) => set_students.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load students: {e}"))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-4">
            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap()}</span>
                </div>
            </Show>

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
                    when=move || !students.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No students on record yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Degree"</th>
                                    <th>"Year"</th>
                                    <th>"Placement"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || students.get() key=|s| s.id.clone() let:student>
                                    <tr>
                                        <td class="font-medium">{student.full_name.clone()}</td>
                                        <td>{student.email.clone()}</td>
                                        <td>{student.degree.clone()}</td>
                                        <td>{student.graduation_year}</td>
                                        <td>
                                            {if student.placed {
                                                view! {
                                                    <span class="badge badge-success">"Placed"</span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <span class="badge badge-ghost">"Searching"</span>
                                                }
                                                    .into_any()
                                            }}
                                        </td>
                                    </tr>
                                </For>
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
