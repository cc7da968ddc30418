//! 落地页
//!
//! 英雄区 + 角色入口 + 精选职位。

use campushire_shared::Job;
use campushire_shared::protocol::FeaturedJobsRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{Building, GraduationCap, Users};
use crate::components::jobs::JobCard;
use crate::web::route::{AuthMode, AuthRole, PageState};
use crate::web::router::use_router;

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (featured, set_featured) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&FeaturedJobsRequest).await {
                Ok(jobs) => set_featured.set(jobs),
                Err(err) => {
                    // 精选职位缺席不影响落地页其余内容
                    web_sys::console::warn_1(
                        &format!("[Landing] Featured jobs unavailable: {err}").into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let browse = {
        let router = router.clone();
        move |_| router.navigate(PageState::Jobs)
    };
    let join_seekers = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::Auth {
                mode: AuthMode::SignUp,
                role: AuthRole::JobSeeker,
                success_message: None,
            })
        }
    };
    let join_recruiters = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::Auth {
                mode: AuthMode::SignUp,
                role: AuthRole::Recruiter,
                success_message: None,
            })
        }
    };
    let join_colleges = {
        let router = router.clone();
        move |_| router.navigate(PageState::CollegeRegister)
    };

    view! {
        <div>
            <div class="hero bg-base-200 py-16">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold">"Find your next opportunity"</h1>
                        <p class="py-6 text-lg text-base-content/70">
                            "Jobs, internships and upskilling courses for candidates, "
                            "with hiring tools for recruiters and placement tracking for colleges."
                        </p>
                        <button class="btn btn-primary btn-lg" on:click=browse>
                            "Browse jobs"
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto p-4 md:p-8 grid md:grid-cols-3 gap-4">
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <Users attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Job seekers"</h2>
                        <p class="text-base-content/70">"Apply in one click and track every application."</p>
                        <button class="btn btn-outline btn-sm mt-2" on:click=join_seekers>
                            "Create a profile"
                        </button>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <Building attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Recruiters"</h2>
                        <p class="text-base-content/70">"Post jobs and manage applicants from one dashboard."</p>
                        <button class="btn btn-outline btn-sm mt-2" on:click=join_recruiters>
                            "Start hiring"
                        </button>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <GraduationCap attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Colleges"</h2>
                        <p class="text-base-content/70">"Bring your students and follow their placements."</p>
                        <button class="btn btn-outline btn-sm mt-2" on:click=join_colleges>
                            "Register your college"
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto p-4 md:p-8">
                <h2 class="text-2xl font-bold mb-4">"Featured jobs"</h2>
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
                        when=move || !featured.get().is_empty()
                        fallback=|| {
                            view! { <p class="text-base-content/60">"Nothing featured right now."</p> }
                        }
                    >
                        <div class="grid gap-4">
                            <For each=move || featured.get() key=|job| job.id.clone() let:job>
                                <JobCard job=job />
                            </For>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
