//! 支付结果页（`/payment/status`）
//!
//! 外部支付页完成后跳回此页，从后端读取最近一笔支付的结果。

use campushire_shared::protocol::PaymentStatusRequest;
use campushire_shared::{PaymentOutcome, PaymentState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn PaymentStatusPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (outcome, set_outcome) = signal(Option::<PaymentOutcome>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&PaymentStatusRequest).await {
                Ok(data) => set_outcome.set(Some(data)),
                Err(e) => set_error.set(Some(format!("Could not fetch payment status: {e}"))),
            }
            set_loading.set(false);
        });
    });

    let to_courses = {
        let router = router.clone();
        move |_| router.navigate(PageState::Courses)
    };
    let to_dashboard = {
        let router = router.clone();
        move |_| router.navigate(PageState::JobSeekerDashboard { section: None })
    };

    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md w-full">
                    <Show
                        when=move || !loading.get()
                        fallback=|| {
                            view! {
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            }
                        }
                    >
                        <Show
                            when=move || outcome.get().is_some()
                            fallback={
                                let to_courses = to_courses.clone();
                                move || {
                                    let to_courses = to_courses.clone();
                                    view! {
                                        <div role="alert" class="alert alert-error">
                                            <span>
                                                {move || {
                                                    error
                                                        .get()
                                                        .unwrap_or_else(|| "No payment found".to_string())
                                                }}
                                            </span>
                                            <button class="btn btn-sm" on:click=to_courses>
                                                "Back to courses"
                                            </button>
                                        </div>
                                    }
                                }
                            }
                        >
                            {
                                let to_courses = to_courses.clone();
                                let to_dashboard = to_dashboard.clone();
                                move || {
                                    let outcome = outcome.get().unwrap();
                                    let (title, css, blurb) = match outcome.state {
                                        PaymentState::Succeeded => (
                                            "Payment successful",
                                            "text-success",
                                            "You are enrolled. The course appears in your dashboard.",
                                        ),
                                        PaymentState::Pending => (
                                            "Payment pending",
                                            "text-warning",
                                            "The provider is still confirming your payment. Check back shortly.",
                                        ),
                                        PaymentState::Failed => (
                                            "Payment failed",
                                            "text-error",
                                            "You were not charged. Try enrolling again.",
                                        ),
                                    };
                                    let to_courses = to_courses.clone();
                                    let to_dashboard = to_dashboard.clone();
                                    view! {
                                        <div class="card bg-base-100 shadow-xl">
                                            <div class="card-body items-center space-y-2">
                                                <h1 class=format!("text-3xl font-bold {css}")>{title}</h1>
                                                {outcome
                                                    .course_title
                                                    .clone()
                                                    .map(|t| {
                                                        view! { <p class="font-medium">{t}</p> }
                                                    })}
                                                <p class="text-base-content/70">{blurb}</p>
                                                <p class="text-xs text-base-content/50">
                                                    "Reference: " {outcome.reference.clone()}
                                                </p>
                                                <div class="flex gap-2 mt-2">
                                                    <button class="btn btn-ghost btn-sm" on:click=to_courses>
                                                        "Courses"
                                                    </button>
                                                    <button class="btn btn-primary btn-sm" on:click=to_dashboard>
                                                        "My dashboard"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }
                            }
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
