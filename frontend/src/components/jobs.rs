//! 职位浏览页
//!
//! 搜索/筛选走同一个列表端点，筛选项为空时不拼进查询参数。

use campushire_shared::protocol::ListJobsRequest;
use campushire_shared::{Job, JobType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{MapPin, Search};
use crate::web::route::PageState;
use crate::web::router::use_router;

/// 职位卡片（落地页与列表页共用）
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let router = use_router();
    let job_id = job.id.clone();
    let salary = job.salary_label();

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="card-title">{job.title.clone()}</h2>
                        <p class="text-base-content/70">{job.company_name.clone()}</p>
                    </div>
                    <span class="badge badge-outline">{job.job_type.label()}</span>
                </div>
                <div class="flex items-center gap-1 text-sm text-base-content/60">
                    <MapPin attr:class="h-4 w-4" />
                    <span>{job.location.clone()}</span>
                    {salary.map(|s| view! { <span class="ml-2 font-medium text-success">{s}</span> })}
                </div>
                <div class="card-actions justify-between items-center mt-2">
                    <div class="flex gap-1 flex-wrap">
                        {job
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="badge badge-ghost badge-sm">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| {
                            router
                                .navigate(PageState::JobDetails {
                                    job_id: job_id.clone(),
                                })
                        }
                    >
                        "View"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let api = use_api();

    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (job_type, set_job_type) = signal(Option::<JobType>::None);

    let load = move || {
        let api = api.clone();
        set_loading.set(true);
        set_error.set(None);
        let req = ListJobsRequest {
            search: Some(search.get_untracked()),
            location: Some(location.get_untracked()),
            job_type: job_type.get_untracked(),
        };
        spawn_local(async move {
            match api.send(&req).await {
                Ok(data) => set_jobs.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load jobs: {e}"))),
            }
            set_loading.set(false);
        });
    };

    // 初始加载（筛选项用 untracked 读取，Effect 只跑一次）
    {
        let load = load.clone();
        Effect::new(move |_| {
            load();
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let on_type_change = move |ev: leptos::web_sys::Event| {
        let value = event_target_value(&ev);
        set_job_type.set(match value.as_str() {
            "full_time" => Some(JobType::FullTime),
            "part_time" => Some(JobType::PartTime),
            "internship" => Some(JobType::Internship),
            "contract" => Some(JobType::Contract),
            _ => None,
        });
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"Browse jobs"</h1>

            <form class="flex flex-col md:flex-row gap-2" on:submit=on_submit>
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Title, skill or company"
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                        prop:value=search
                    />
                </label>
                <input
                    type="text"
                    class="input input-bordered md:w-48"
                    placeholder="Location"
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    prop:value=location
                />
                <select class="select select-bordered md:w-44" on:change=on_type_change>
                    <option value="">"All types"</option>
                    {JobType::ALL
                        .iter()
                        .map(|t| {
                            let tag = match t {
                                JobType::FullTime => "full_time",
                                JobType::PartTime => "part_time",
                                JobType::Internship => "internship",
                                JobType::Contract => "contract",
                            };
                            view! { <option value=tag>{t.label()}</option> }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn-primary" type="submit">"Search"</button>
            </form>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-16">
                                "No jobs match your filters."
                            </p>
                        }
                    }
                >
                    <div class="grid gap-4">
                        <For each=move || jobs.get() key=|job| job.id.clone() let:job>
                            <JobCard job=job />
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
