//! 后台职位审核：全站职位的上线/下线开关

use campushire_shared::Job;
use campushire_shared::protocol::{AdminJobsRequest, AdminSetJobActiveRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::toast::{Notification, Toast};

#[component]
pub fn JobsModerationSection() -> impl IntoView {
    let api = use_api();

    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&AdminJobsRequest).await {
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
            match api.send(&AdminSetJobActiveRequest { id, is_active }).await {
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
                                "No jobs posted yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Company"</th>
                                    <th>"Location"</th>
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
                                                <td>{job.company_name.clone()}</td>
                                                <td>{job.location.clone()}</td>
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
