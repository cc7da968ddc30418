//! 后台招聘方管理：人工审批
//!
//! 审批是平台的准入闸门——通过前招聘方无法发布职位。
//! 通过/撤销都走同一个接口，靠 `approve` 标志区分。

use campushire_shared::RecruiterSummary;
use campushire_shared::protocol::{AdminRecruitersRequest, ApproveRecruiterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::toast::{Notification, Toast};

fn status_badge(recruiter: &RecruiterSummary) -> (&'static str, &'static str) {
    if recruiter.is_approved {
        ("Approved", "badge badge-success")
    } else if recruiter.onboarding_complete {
        ("Awaiting review", "badge badge-warning")
    } else {
        ("Onboarding", "badge badge-ghost")
    }
}

#[component]
pub fn RecruitersSection() -> impl IntoView {
    let api = use_api();

    let (recruiters, set_recruiters) = signal(Vec::<RecruiterSummary>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&AdminRecruitersRequest).await {
                Ok(data) => set_recruiters.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load recruiters: {e}"), true)));
                }
            }
            set_loading.set(false);
        });
    });

    let api_review = use_api();
    let on_review = move |id: String, approve: bool| {
        let api = api_review.clone();
        spawn_local(async move {
            match api.send(&ApproveRecruiterRequest { id, approve }).await {
                Ok(updated) => {
                    set_recruiters.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    let verdict = if approve { "approved" } else { "revoked" };
                    set_notification.set(Some((format!("Recruiter {verdict}."), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Review failed: {e}"), true)));
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
                    when=move || !recruiters.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No recruiter accounts yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Company"</th>
                                    <th>"Email"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || recruiters.get()
                                    key=|r| r.id.clone()
                                    let:recruiter
                                >
                                    {
                                        let on_review = on_review.clone();
                                        let id = recruiter.id.clone();
                                        let approved = recruiter.is_approved;
                                        let (label, badge) = status_badge(&recruiter);
                                        view! {
                                            <tr>
                                                <td class="font-medium">
                                                    {recruiter.full_name.clone()}
                                                </td>
                                                <td>
                                                    {recruiter
                                                        .company_name
                                                        .clone()
                                                        .unwrap_or_else(|| "—".to_string())}
                                                </td>
                                                <td>{recruiter.email.clone()}</td>
                                                <td>
                                                    <span class=badge>{label}</span>
                                                </td>
                                                <td>
                                                    {if approved {
                                                        view! {
                                                            <button
                                                                class="btn btn-ghost btn-xs text-error"
                                                                on:click=move |_| {
                                                                    on_review(id.clone(), false)
                                                                }
                                                            >
                                                                "Revoke"
                                                            </button>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="btn btn-success btn-xs"
                                                                on:click=move |_| {
                                                                    on_review(id.clone(), true)
                                                                }
                                                            >
                                                                "Approve"
                                                            </button>
                                                        }
                                                            .into_any()
                                                    }}
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

#[cfg(test)]
mod tests {
    use super::*;

    fn recruiter(is_approved: bool, onboarding_complete: bool) -> RecruiterSummary {
        RecruiterSummary {
            id: "r1".to_string(),
            full_name: "Dana Recruiter".to_string(),
            email: "dana@acme.example".to_string(),
            company_name: Some("Acme".to_string()),
            is_approved,
            onboarding_complete,
        }
    }

    #[test]
    fn badge_reflects_review_pipeline_stage() {
        assert_eq!(status_badge(&recruiter(true, true)).0, "Approved");
        assert_eq!(status_badge(&recruiter(false, true)).0, "Awaiting review");
        assert_eq!(status_badge(&recruiter(false, false)).0, "Onboarding");
    }
}
