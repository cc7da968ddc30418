//! 全站页头/页脚
//!
//! 页头右侧随认证状态切换：加载中、未登录（登录/注册入口）、
//! 已登录（进入各自后台 + 注销）。

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::{Briefcase, LogOut};
use crate::web::route::{AuthMode, AuthRole, PageState, landing_for};
use crate::web::router::{RouterService, use_router};

/// 生成导航点击处理器的小工具
fn go(router: &RouterService, state: PageState) -> impl Fn(web_sys::MouseEvent) + Clone + use<> {
    let router = router.clone();
    move |_| router.navigate(state.clone())
}

#[component]
pub fn TopNav() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let dashboard = {
        let router = router.clone();
        move |_| {
            if let Some(profile) = auth.state.get_untracked().profile {
                router.navigate(landing_for(&profile));
            }
        }
    };

    let on_logout = {
        let router = router.clone();
        move |_| {
            logout(&auth);
            router.navigate(PageState::Landing);
        }
    };

    let signed_out_actions = {
        let router = router.clone();
        move || {
            let sign_in = go(
                &router,
                PageState::Auth {
                    mode: AuthMode::SignIn,
                    role: AuthRole::JobSeeker,
                    success_message: None,
                },
            );
            let sign_up = go(
                &router,
                PageState::Auth {
                    mode: AuthMode::SignUp,
                    role: AuthRole::JobSeeker,
                    success_message: None,
                },
            );
            view! {
                <button class="btn btn-ghost btn-sm" on:click=sign_in>"Sign in"</button>
                <button class="btn btn-primary btn-sm" on:click=sign_up>"Get started"</button>
            }
        }
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
            <div class="navbar-start">
                <button class="btn btn-ghost text-xl gap-2" on:click=go(&router, PageState::Landing)>
                    <Briefcase attr:class="h-6 w-6 text-primary" />
                    "CampusHire"
                </button>
            </div>
            <div class="navbar-center hidden lg:flex gap-1">
                <button class="btn btn-ghost btn-sm" on:click=go(&router, PageState::Jobs)>"Jobs"</button>
                <button class="btn btn-ghost btn-sm" on:click=go(&router, PageState::Courses)>"Courses"</button>
                <button class="btn btn-ghost btn-sm" on:click=go(&router, PageState::Colleges)>"Colleges"</button>
                <button class="btn btn-ghost btn-sm" on:click=go(&router, PageState::Employers)>"For employers"</button>
                <button class="btn btn-ghost btn-sm" on:click=go(&router, PageState::Contact)>"Contact"</button>
            </div>
            <div class="navbar-end gap-2">
                <Show
                    when=move || !auth.state.get().is_loading
                    fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                >
                    <Show
                        when=move || auth.state.get().profile.is_some()
                        fallback=signed_out_actions.clone()
                    >
                        <button class="btn btn-primary btn-sm" on:click=dashboard.clone()>
                            "Dashboard"
                        </button>
                        <button class="btn btn-ghost btn-sm gap-1" on:click=on_logout.clone()>
                            <LogOut attr:class="h-4 w-4" />
                            "Sign out"
                        </button>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let router = use_router();

    view! {
        <footer class="footer footer-center p-8 bg-base-300 text-base-content mt-12">
            <nav class="grid grid-flow-col gap-4">
                <button class="link link-hover" on:click=go(&router, PageState::About)>"About"</button>
                <button class="link link-hover" on:click=go(&router, PageState::Pricing)>"Pricing"</button>
                <button class="link link-hover" on:click=go(&router, PageState::Contact)>"Contact"</button>
                <button class="link link-hover" on:click=go(&router, PageState::PrivacyPolicy)>"Privacy"</button>
                <button class="link link-hover" on:click=go(&router, PageState::TermsOfService)>"Terms"</button>
            </nav>
            <aside>
                <p class="text-base-content/60">"CampusHire — jobs, courses and campus placements in one place."</p>
            </aside>
        </footer>
    }
}
