//! 后台合作学院列表，入口指向各学院的学生名册

use campushire_shared::College;
use campushire_shared::protocol::ListCollegesRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn CollegesSection() -> impl IntoView {
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
                    when=move || !colleges.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No partner colleges yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"City"</th>
                                    <th>"Students"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || colleges.get() key=|c| c.id.clone() let:college>
                                    {
                                        let router = router.clone();
                                        let college_id = college.id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{college.name.clone()}</td>
                                                <td>{college.city.clone()}</td>
                                                <td>{college.student_count}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            router
                                                                .navigate(PageState::AdminCollegeStudents {
                                                                    college_id: college_id.clone(),
                                                                })
                                                        }
                                                    >
                                                        "View students"
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
