//! 单个学院的学生名册（管理员视角，独立页面）

use campushire_shared::StudentRecord;
use campushire_shared::protocol::CollegeStudentsRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::GraduationCap;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn AdminCollegeStudentsPage(college_id: String) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (students, set_students) = signal(Vec::<StudentRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    {
        let api = api.clone();
        let college_id = college_id.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let req = CollegeStudentsRequest {
                college_id: college_id.clone(),
            };
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(data) => set_students.set(data),
                    Err(e) => set_error.set(Some(format!("Failed to load roster: {e}"))),
                }
                set_loading.set(false);
            });
        });
    }

    let back = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::Admin {
                section: Some("colleges".to_string()),
            })
        }
    };

    let placed = move || students.with(|list| list.iter().filter(|s| s.placed).count());

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <GraduationCap attr:class="h-8 w-8 text-primary" />
                    <h1 class="text-3xl font-bold">"Student roster"</h1>
                </div>
                <button class="btn btn-ghost btn-sm" on:click=back>
                    "Back to colleges"
                </button>
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
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Students"</div>
                        <div class="stat-value text-primary">
                            {move || students.with(|list| list.len())}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Placed"</div>
                        <div class="stat-value text-success">{placed}</div>
                    </div>
                </div>

                <Show
                    when=move || !students.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "This college has no students on record."
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
                                    <th>"Degree"</th>
                                    <th>"Year"</th>
                                    <th>"Placement"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || students.get() key=|s| s.id.clone() let:student>
                                    <tr>
                                        <td class="font-medium">{student.full_name.clone()}</td>
                                        <td>{student.email.clone()}</td>
                                        <td>{student.degree.clone()}</td>
                                        <td>{student.graduation_year}</td>
                                        <td>
                                            {if student.placed {
                                                view! {
                                                    <span class="badge badge-success">"Placed"</span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <span class="badge badge-ghost">"Searching"</span>
                                                }
                                                    .into_any()
                                            }}
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
