//! 静态信息页：关于、雇主介绍、学院目录、定价、隐私、条款

use campushire_shared::College;
use campushire_shared::protocol::ListCollegesRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{Building, GraduationCap};
use crate::web::route::{AuthMode, AuthRole, PageState};
use crate::web::router::use_router;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"About CampusHire"</h1>
            <p class="text-base-content/80">
                "CampusHire connects early-career candidates, recruiters and college "
                "placement cells on a single platform. Candidates apply to curated "
                "openings and upskill with partner courses, recruiters reach a vetted "
                "talent pool, and colleges follow their students from enrollment to offer."
            </p>
            <p class="text-base-content/80">
                "Recruiter accounts are manually reviewed before any job goes live, "
                "which keeps listings trustworthy for every candidate."
            </p>
        </div>
    }
}

#[component]
pub fn EmployersPage() -> impl IntoView {
    let router = use_router();

    let start_hiring = move |_| {
        router.navigate(PageState::Auth {
            mode: AuthMode::SignUp,
            role: AuthRole::Recruiter,
            success_message: None,
        })
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center gap-2">
                <Building attr:class="h-8 w-8 text-primary" />
                <h1 class="text-3xl font-bold">"Hire with CampusHire"</h1>
            </div>
            <p class="text-base-content/80">
                "Post openings, collect applications and move candidates through "
                "your pipeline with shortlist, reject and hire statuses. Campus "
                "batches come with verified college rosters."
            </p>
            <ul class="list-disc list-inside space-y-1 text-base-content/80">
                <li>"Unlimited job postings on every plan"</li>
                <li>"Applicant pipeline with status tracking"</li>
                <li>"Direct access to college placement cells"</li>
            </ul>
            <button class="btn btn-primary" on:click=start_hiring>"Create a recruiter account"</button>
        </div>
    }
}

/// 学院目录（公共页，数据来自公开端点）
#[component]
pub fn CollegesPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (colleges, set_colleges) = signal(Vec::<College>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&ListCollegesRequest).await {
                Ok(data) => set_colleges.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load colleges: {e}"))),
            }
            set_loading.set(false);
        });
    });

    let register = move |_| router.navigate(PageState::CollegeRegister);

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <GraduationCap attr:class="h-8 w-8 text-primary" />
                    <h1 class="text-3xl font-bold">"Partner colleges"</h1>
                </div>
                <button class="btn btn-outline btn-sm" on:click=register>"Register yours"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <div class="grid md:grid-cols-2 gap-4">
                    <For each=move || colleges.get() key=|c| c.id.clone() let:college>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{college.name.clone()}</h2>
                                <p class="text-base-content/70">{college.city.clone()}</p>
                                <p class="text-sm text-base-content/60">
                                    {college.student_count} " students on the platform"
                                </p>
                            </div>
                        </div>
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let router = use_router();

    let start = move |_| {
        router.navigate(PageState::Auth {
            mode: AuthMode::SignUp,
            role: AuthRole::Recruiter,
            success_message: None,
        })
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold text-center">"Pricing"</h1>
            <p class="text-center text-base-content/70">
                "Free for candidates and colleges. Recruiters pay per hire, not per post."
            </p>
            <div class="grid md:grid-cols-3 gap-4">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Candidates"</h2>
                        <p class="text-4xl font-bold">"Free"</p>
                        <p class="text-base-content/70">"Unlimited applications and job alerts."</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow border-2 border-primary">
                    <div class="card-body">
                        <h2 class="card-title">"Recruiters"</h2>
                        <p class="text-4xl font-bold">"Pay per hire"</p>
                        <p class="text-base-content/70">"Post for free, pay only on a confirmed offer."</p>
                        <button class="btn btn-primary btn-sm mt-2" on:click=start>"Get started"</button>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Colleges"</h2>
                        <p class="text-4xl font-bold">"Free"</p>
                        <p class="text-base-content/70">"Placement tracking for your whole batch."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-3xl font-bold">"Privacy policy"</h1>
            <p class="text-base-content/80">
                "We store the information you give us — profile details, applications "
                "and messages — to run the platform. Candidate profiles are only "
                "visible to recruiters you applied to, unless you publish a public page."
            </p>
            <p class="text-base-content/80">
                "We never sell personal data. Session tokens live in your browser's "
                "local storage and can be revoked by signing out."
            </p>
        </div>
    }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-3xl font-bold">"Terms of service"</h1>
            <p class="text-base-content/80">
                "Use CampusHire honestly: one account per person or organization, "
                "accurate listings, no scraping. Recruiter accounts are subject to "
                "manual review and may be suspended for fraudulent postings."
            </p>
            <p class="text-base-content/80">
                "Course payments are processed by an external provider; refunds "
                "follow the provider's policy linked at checkout."
            </p>
        </div>
    }
}
