//! 申请人管理
//!
//! 先选职位，再加载该职位的申请列表；状态流转通过下拉直接提交。

use campushire_shared::protocol::{
    JobApplicantsRequest, RecruiterJobsRequest, SetApplicationStatusRequest,
};
use campushire_shared::{ApplicationStatus, Job, JobApplication};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::job_seeker_dashboard::applications::status_badge_class;
use crate::components::toast::{Notification, Toast};

#[component]
pub fn ApplicantsSection() -> impl IntoView {
    let api = use_api();

    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (selected_job, set_selected_job) = signal(Option::<String>::None);
    let (applicants, set_applicants) = signal(Vec::<JobApplication>::new());
    let (loading_jobs, set_loading_jobs) = signal(true);
    let (loading_applicants, set_loading_applicants) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.send(&RecruiterJobsRequest).await {
                    Ok(data) => set_jobs.set(data),
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to load jobs: {e}"), true)));
                    }
                }
                set_loading_jobs.set(false);
            });
        });
    }

    let load_applicants = {
        let api = api.clone();
        move |job_id: String| {
            let api = api.clone();
            set_loading_applicants.set(true);
            spawn_local(async move {
                match api.send(&JobApplicantsRequest { job_id }).await {
                    Ok(data) => set_applicants.set(data),
                    Err(e) => {
                        set_notification
                            .set(Some((format!("Failed to load applicants: {e}"), true)));
                    }
                }
                set_loading_applicants.set(false);
            });
        }
    };

    let on_select = {
        let load_applicants = load_applicants.clone();
        move |ev: leptos::web_sys::Event| {
            let id = event_target_value(&ev);
            if id.is_empty() {
                set_selected_job.set(None);
                set_applicants.set(Vec::new());
            } else {
                set_selected_job.set(Some(id.clone()));
                load_applicants(id);
            }
        }
    };

    let api_status = use_api();
    let on_status_change = move |id: String, status: ApplicationStatus| {
        let api = api_status.clone();
        spawn_local(async move {
            match api.send(&SetApplicationStatusRequest { id, status }).await {
                Ok(updated) => {
                    set_applicants.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    set_notification.set(Some(("Status updated".to_string(), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to update status: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <Show
                when=move || !loading_jobs.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <select class="select select-bordered w-full max-w-md" on:change=on_select.clone()>
                    <option value="" selected>"Select a job posting"</option>
                    {move || {
                        jobs.get()
                            .iter()
                            .map(|job| {
                                view! { <option value=job.id.clone()>{job.title.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </Show>

            <Show when=move || selected_job.get().is_some()>
                <Show
                    when=move || !loading_applicants.get()
                    fallback=|| {
                        view! {
                            <div class="flex justify-center py-8">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || !applicants.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="text-center text-base-content/60 py-8">
                                    "No applications for this job yet."
                                </p>
                            }
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="table bg-base-100">
                                <thead>
                                    <tr>
                                        <th>"Candidate"</th>
                                        <th>"Applied"</th>
                                        <th>"Cover note"</th>
                                        <th>"Status"</th>
                                        <th>"Move to"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || applicants.get()
                                        key=|app| app.id.clone()
                                        let:app
                                    >
                                        {
                                            let on_status_change = on_status_change.clone();
                                            let id = app.id.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-medium">
                                                        {app.candidate_name.clone()}
                                                    </td>
                                                    <td>
                                                        {app.applied_at.format("%b %e, %Y").to_string()}
                                                    </td>
                                                    <td class="max-w-xs truncate">
                                                        {app.cover_note.clone().unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        <span class=status_badge_class(app.status)>
                                                            {app.status.label()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <select
                                                            class="select select-bordered select-xs"
                                                            on:change=move |ev| {
                                                                let status = match event_target_value(&ev)
                                                                    .as_str()
                                                                {
                                                                    "shortlisted" => ApplicationStatus::Shortlisted,
                                                                    "rejected" => ApplicationStatus::Rejected,
                                                                    "hired" => ApplicationStatus::Hired,
                                                                    _ => ApplicationStatus::Submitted,
                                                                };
                                                                on_status_change(id.clone(), status);
                                                            }
                                                        >
                                                            {ApplicationStatus::ALL
                                                                .iter()
                                                                .map(|s| {
                                                                    let tag = match s {
                                                                        ApplicationStatus::Submitted => "submitted",
                                                                        ApplicationStatus::Shortlisted => "shortlisted",
                                                                        ApplicationStatus::Rejected => "rejected",
                                                                        ApplicationStatus::Hired => "hired",
                                                                    };
                                                                    view! {
                                                                        <option
                                                                            value=tag
                                                                            selected=*s == app.status
                                                                        >
                                                                            {s.label()}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </select>
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
            </Show>
        </div>
    }
}
