//! 职位详情页 + 投递弹窗

use campushire_shared::protocol::{ApplyToJobRequest, GetJobRequest};
use campushire_shared::{Job, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::MapPin;
use crate::components::toast::{Notification, Toast};
use crate::web::route::{AuthMode, AuthRole, PageState};
use crate::web::router::use_router;

#[component]
pub fn JobDetailsPage(job_id: String) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (job, set_job) = signal(Option::<Job>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (notification, set_notification) = signal(Notification::None);

    // 投递弹窗状态
    let (dialog_open, set_dialog_open) = signal(false);
    let (cover_note, set_cover_note) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    {
        let api = api.clone();
        let job_id = job_id.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let req = GetJobRequest { id: job_id.clone() };
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(data) => set_job.set(Some(data)),
                    Err(e) => set_error.set(Some(format!("Failed to load job: {e}"))),
                }
                set_loading.set(false);
            });
        });
    }

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if dialog_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_apply_submit = {
        let api = api.clone();
        let job_id = job_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let api = api.clone();
            let note = cover_note.get();
            let req = ApplyToJobRequest {
                job_id: job_id.clone(),
                cover_note: if note.trim().is_empty() { None } else { Some(note) },
            };
            set_submitting.set(true);
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(_) => {
                        set_notification
                            .set(Some(("Application submitted".to_string(), false)));
                        set_dialog_open.set(false);
                        set_cover_note.set(String::new());
                    }
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to apply: {e}"), true)));
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    let sign_in_to_apply = {
        let router = router.clone();
        move |_| {
            router.navigate(PageState::Auth {
                mode: AuthMode::SignIn,
                role: AuthRole::JobSeeker,
                success_message: None,
            })
        }
    };

    let back_to_jobs = {
        let router = router.clone();
        move |_| router.navigate(PageState::Jobs)
    };

    // 投递按钮随角色变化：求职者开弹窗，游客去登录，其余角色不展示
    let apply_action = move || -> AnyView {
        let state = auth.state.get();
        if state.is_loading {
            return ().into_any();
        }
        match state.profile {
            Some(profile) if profile.role == UserRole::JobSeeker => view! {
                <button class="btn btn-primary" on:click=move |_| set_dialog_open.set(true)>
                    "Apply now"
                </button>
            }
            .into_any(),
            Some(_) => ().into_any(),
            None => view! {
                <button class="btn btn-primary" on:click=sign_in_to_apply.clone()>
                    "Sign in to apply"
                </button>
            }
            .into_any(),
        }
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <Toast notification=notification set_notification=set_notification />

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
                    when=move || job.get().is_some()
                    fallback={
                        let back_to_jobs = back_to_jobs.clone();
                        move || {
                            let back_to_jobs = back_to_jobs.clone();
                            view! {
                                <div role="alert" class="alert alert-error">
                                    <span>
                                        {move || {
                                            error.get().unwrap_or_else(|| "Job not found".to_string())
                                        }}
                                    </span>
                                    <button class="btn btn-sm" on:click=back_to_jobs>
                                        "Back to jobs"
                                    </button>
                                </div>
                            }
                        }
                    }
                >
                    {move || {
                        let job = job.get().unwrap();
                        let salary = job.salary_label();
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body space-y-2">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h1 class="text-3xl font-bold">{job.title.clone()}</h1>
                                            <p class="text-lg text-base-content/70">
                                                {job.company_name.clone()}
                                            </p>
                                        </div>
                                        <span class="badge badge-outline">{job.job_type.label()}</span>
                                    </div>
                                    <div class="flex items-center gap-2 text-base-content/60">
                                        <MapPin attr:class="h-4 w-4" />
                                        <span>{job.location.clone()}</span>
                                        {salary
                                            .map(|s| {
                                                view! {
                                                    <span class="font-medium text-success">{s}</span>
                                                }
                                            })}
                                    </div>
                                    <div class="flex gap-1 flex-wrap">
                                        {job
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="badge badge-ghost badge-sm">
                                                        {tag.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="divider"></div>
                                    <p class="whitespace-pre-line">{job.description.clone()}</p>
                                    <div class="card-actions justify-end mt-4">
                                        {apply_action.clone()}
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </Show>
            </Show>

            <dialog class="modal" node_ref=dialog_ref>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Apply for this job"</h3>
                    <form class="space-y-4 mt-4" on:submit=on_apply_submit>
                        <div class="form-control">
                            <label class="label" for="cover-note">
                                <span class="label-text">"Cover note (optional)"</span>
                            </label>
                            <textarea
                                id="cover-note"
                                class="textarea textarea-bordered h-32"
                                placeholder="Tell the recruiter why you are a good fit"
                                on:input=move |ev| set_cover_note.set(event_target_value(&ev))
                                prop:value=cover_note
                            ></textarea>
                        </div>
                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_dialog_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || {
                                    if submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Submitting..."
                                        }
                                            .into_any()
                                    } else {
                                        "Submit application".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </dialog>
        </div>
    }
}
