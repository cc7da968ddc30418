//! 后台候选人列表（只读）

use campushire_shared::CandidateSummary;
use campushire_shared::protocol::AdminCandidatesRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;

#[component]
pub fn CandidatesSection() -> impl IntoView {
    let api = use_api();

    let (candidates, set_candidates) = signal(Vec::<CandidateSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&AdminCandidatesRequest).await {
                Ok(data) => set_candidates.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load candidates: {e}"))),
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
                    when=move || !candidates.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No candidates registered yet."
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
                                    <th>"Applications"</th>
                                    <th>"Registered"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || candidates.get()
                                    key=|c| c.id.clone()
                                    let:candidate
                                >
                                    <tr>
                                        <td class="font-medium">{candidate.full_name.clone()}</td>
                                        <td>{candidate.email.clone()}</td>
                                        <td>{candidate.application_count}</td>
                                        <td>
                                            {candidate.registered_at.format("%b %e, %Y").to_string()}
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
