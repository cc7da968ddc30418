//! 我的申请列表

use campushire_shared::protocol::MyApplicationsRequest;
use campushire_shared::{ApplicationStatus, JobApplication};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::PageState;
use crate::web::router::use_router;

/// 状态徽章样式
pub(crate) fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Submitted => "badge badge-info",
        ApplicationStatus::Shortlisted => "badge badge-warning",
        ApplicationStatus::Hired => "badge badge-success",
        ApplicationStatus::Rejected => "badge badge-error",
    }
}

#[component]
pub fn ApplicationsSection() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (applications, set_applications) = signal(Vec::<JobApplication>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&MyApplicationsRequest).await {
                Ok(data) => set_applications.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load applications: {e}"))),
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
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !applications.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-12">
                                "You have not applied to any jobs yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Job"</th>
                                    <th>"Company"</th>
                                    <th>"Applied"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || applications.get()
                                    key=|app| app.id.clone()
                                    let:app
                                >
                                    {
                                        let router = router.clone();
                                        let job_id = app.job_id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{app.job_title.clone()}</td>
                                                <td>{app.company_name.clone()}</td>
                                                <td>{app.applied_at.format("%b %e, %Y").to_string()}</td>
                                                <td>
                                                    <span class=status_badge_class(app.status)>
                                                        {app.status.label()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            router
                                                                .navigate(PageState::JobDetails {
                                                                    job_id: job_id.clone(),
                                                                })
                                                        }
                                                    >
                                                        "View job"
                                                    </button>
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
