//! 职位提醒管理

use campushire_shared::protocol::{CreateAlertRequest, DeleteAlertRequest, ListAlertsRequest};
use campushire_shared::{AlertFrequency, JobAlert};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::Trash;
use crate::components::toast::{Notification, Toast};

#[component]
pub fn AlertsSection() -> impl IntoView {
    let api = use_api();

    let (alerts, set_alerts) = signal(Vec::<JobAlert>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    let (keyword, set_keyword) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (frequency, set_frequency) = signal(AlertFrequency::Weekly);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.send(&ListAlertsRequest).await {
                    Ok(data) => set_alerts.set(data),
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to load alerts: {e}"), true)));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| {
            load();
        });
    }

    let on_create = {
        let api = api.clone();
        let load = load.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if keyword.get().trim().is_empty() {
                set_notification.set(Some(("Keyword is required".to_string(), true)));
                return;
            }
            let api = api.clone();
            let load = load.clone();
            let loc = location.get_untracked();
            let req = CreateAlertRequest {
                keyword: keyword.get_untracked(),
                location: if loc.trim().is_empty() { None } else { Some(loc) },
                frequency: frequency.get_untracked(),
            };
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(_) => {
                        set_notification.set(Some(("Alert created".to_string(), false)));
                        set_keyword.set(String::new());
                        set_location.set(String::new());
                        load();
                    }
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to create alert: {e}"), true)));
                    }
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn_local(async move {
                match api.send_ok(&DeleteAlertRequest { id: id.clone() }).await {
                    Ok(()) => {
                        set_notification.set(Some(("Alert removed".to_string(), false)));
                        set_alerts.update(|list| list.retain(|a| a.id != id));
                    }
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to remove alert: {e}"), true)));
                    }
                }
            });
        }
    };

    view! {
        <div class="space-y-6">
            <Toast notification=notification set_notification=set_notification />

            <form class="flex flex-col md:flex-row gap-2" on:submit=on_create>
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="Keyword, e.g. frontend"
                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    prop:value=keyword
                />
                <input
                    type="text"
                    class="input input-bordered md:w-44"
                    placeholder="Location (optional)"
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    prop:value=location
                />
                <select
                    class="select select-bordered md:w-36"
                    on:change=move |ev| {
                        set_frequency
                            .set(
                                if event_target_value(&ev) == "daily" {
                                    AlertFrequency::Daily
                                } else {
                                    AlertFrequency::Weekly
                                },
                            )
                    }
                >
                    <option value="weekly" selected>"Weekly"</option>
                    <option value="daily">"Daily"</option>
                </select>
                <button class="btn btn-primary" type="submit">"Add alert"</button>
            </form>

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
                    when=move || !alerts.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No alerts yet. Add one above."
                            </p>
                        }
                    }
                >
                    <div class="grid gap-2">
                        <For each=move || alerts.get() key=|a| a.id.clone() let:alert>
                            {
                                let on_delete = on_delete.clone();
                                let id = alert.id.clone();
                                view! {
                                    <div class="flex items-center justify-between bg-base-100 rounded-box shadow px-4 py-3">
                                        <div>
                                            <span class="font-medium">{alert.keyword.clone()}</span>
                                            {alert
                                                .location
                                                .clone()
                                                .map(|l| {
                                                    view! {
                                                        <span class="text-base-content/60">" · " {l}</span>
                                                    }
                                                })}
                                            <span class="badge badge-ghost badge-sm ml-2">
                                                {alert.frequency.label()}
                                            </span>
                                        </div>
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            <Trash attr:class="h-4 w-4" />
                                        </button>
                                    </div>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
