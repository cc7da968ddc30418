//! 页面级权限兜底视图
//!
//! 守卫重定向只是体验优化，真正的授权在渲染层按角色复查；
//! 复查失败时就地渲染这些视图，不再跳转。

use leptos::prelude::*;

use crate::components::icons::ShieldCheck;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn AccessDenied() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <div class="flex justify-center mb-4 text-error">
                        <ShieldCheck attr:class="h-12 w-12" />
                    </div>
                    <h1 class="text-3xl font-bold">"Access denied"</h1>
                    <p class="py-4 text-base-content/70">
                        "Your account does not have permission to view this page."
                    </p>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| router.navigate(PageState::Landing)
                    >
                        "Back to home"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// 招聘方账户尚未通过人工审核时的占位页
#[component]
pub fn PendingApproval() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-3xl font-bold">"Approval pending"</h1>
                    <p class="py-4 text-base-content/70">
                        "Your recruiter account is waiting for review by our team. "
                        "You will be able to post jobs as soon as it is approved."
                    </p>
                    <button
                        class="btn btn-ghost"
                        on:click=move |_| router.navigate(PageState::Jobs)
                    >
                        "Browse jobs meanwhile"
                    </button>
                </div>
            </div>
        </div>
    }
}
