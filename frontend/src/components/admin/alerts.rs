//! 后台职位提醒总览（只读）

use campushire_shared::JobAlert;
use campushire_shared::protocol::AdminAlertsRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;

#[component]
pub fn AlertsOverviewSection() -> impl IntoView {
    let api = use_api();

    let (alerts, set_alerts) = signal(Vec::<JobAlert>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&AdminAlertsRequest).await {
                Ok(data) => set_alerts.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load alerts: {e}"))),
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
                    when=move || !alerts.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No job alerts subscribed."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Keyword"</th>
                                    <th>"Location"</th>
                                    <th>"Frequency"</th>
                                    <th>"Subscriber"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || alerts.get() key=|a| a.id.clone() let:alert>
                                    <tr>
                                        <td class="font-medium">{alert.keyword.clone()}</td>
                                        <td>
                                            {alert
                                                .location
                                                .clone()
                                                .unwrap_or_else(|| "Anywhere".to_string())}
                                        </td>
                                        <td>{alert.frequency.label()}</td>
                                        <td>
                                            {alert
                                                .owner_email
                                                .clone()
                                                .unwrap_or_else(|| "—".to_string())}
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
