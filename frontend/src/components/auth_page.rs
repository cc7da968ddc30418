//! 认证页（登录/注册，多角色）
//!
//! 角色由 URL 段决定；注册成功后不自动登录，而是带着提示
//! 回到对应角色的登录页。登录成功后的跳转交给路由守卫。

use campushire_shared::protocol::SignUpRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{college_sign_in, sign_in, sign_up, use_auth};
use crate::components::icons::ShieldCheck;
use crate::web::route::{AuthMode, AuthRole, PageState};
use crate::web::router::use_router;

#[component]
pub fn AuthPage(
    mode: AuthMode,
    role: AuthRole,
    #[prop(optional_no_strip)] notice: Option<String>,
) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let heading = match mode {
        AuthMode::SignIn => format!("Sign in — {}", role.label()),
        AuthMode::SignUp => format!("Create a {} account", role.label()),
    };

    let role_tabs = {
        let router = router.clone();
        move || {
            let tabs = [AuthRole::JobSeeker, AuthRole::Recruiter, AuthRole::College];
            tabs.iter()
                .map(|tab| {
                    let tab = *tab;
                    let router = router.clone();
                    let active = if tab == role { "tab tab-active" } else { "tab" };
                    view! {
                        <button
                            class=active
                            on:click=move |_| {
                                router
                                    .navigate(PageState::Auth {
                                        mode,
                                        role: tab,
                                        success_message: None,
                                    })
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()
        }
    };

    let on_submit = {
        let api = api.clone();
        let router = router.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if email.get().is_empty() || password.get().is_empty() {
                set_error_msg.set(Some("Please fill in all fields".to_string()));
                return;
            }
            if mode == AuthMode::SignUp && full_name.get().is_empty() {
                set_error_msg.set(Some("Please enter your name".to_string()));
                return;
            }

            set_is_submitting.set(true);
            set_error_msg.set(None);

            let api = api.clone();
            let router = router.clone();
            spawn_local(async move {
                let result = match mode {
                    // 登录成功后由路由守卫按角色跳转，这里不导航
                    AuthMode::SignIn => match role {
                        AuthRole::College => {
                            college_sign_in(&auth, &api, email.get_untracked(), password.get_untracked())
                                .await
                        }
                        _ => sign_in(&auth, &api, email.get_untracked(), password.get_untracked()).await,
                    },
                    AuthMode::SignUp => {
                        let req = SignUpRequest {
                            email: email.get_untracked(),
                            password: password.get_untracked(),
                            full_name: full_name.get_untracked(),
                            role: role.user_role(),
                        };
                        match sign_up(&api, req).await {
                            Ok(_) => {
                                router.navigate(PageState::Auth {
                                    mode: AuthMode::SignIn,
                                    role,
                                    success_message: Some(
                                        "Account created. Please sign in.".to_string(),
                                    ),
                                });
                                Ok(())
                            }
                            Err(e) => Err(e),
                        }
                    }
                };

                if let Err(e) = result {
                    set_error_msg.set(Some(e.to_string()));
                }
                set_is_submitting.set(false);
            });
        }
    };

    let switch_mode = {
        let router = router.clone();
        let target = match mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        move |_| {
            router.navigate(PageState::Auth {
                mode: target,
                role,
                success_message: None,
            })
        }
    };
    let switch_label = match mode {
        AuthMode::SignIn => "No account yet? Sign up",
        AuthMode::SignUp => "Already registered? Sign in",
    };

    // 管理员不开放自助注册；学院注册走专用页
    let blocked_form: Option<AnyView> = match (mode, role) {
        (AuthMode::SignUp, AuthRole::Admin) => Some(
            view! {
                <div role="alert" class="alert alert-info">
                    <span>"Administrator accounts are provisioned internally."</span>
                </div>
            }
            .into_any(),
        ),
        (AuthMode::SignUp, AuthRole::College) => {
            let router = router.clone();
            Some(
                view! {
                    <div class="text-center space-y-4">
                        <p class="text-base-content/70">
                            "Colleges register through a dedicated onboarding form."
                        </p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| router.navigate(PageState::CollegeRegister)
                        >
                            "Go to college registration"
                        </button>
                    </div>
                }
                .into_any(),
            )
        }
        _ => None,
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-2">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-2xl font-bold">{heading}</h1>
                    </div>
                </div>

                <div role="tablist" class="tabs tabs-boxed">{role_tabs}</div>

                {notice
                    .map(|msg| {
                        view! {
                            <div role="alert" class="alert alert-success text-sm py-2 w-full">
                                <span>{msg}</span>
                            </div>
                        }
                    })}

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    {match blocked_form {
                        Some(blocked) => view! { <div class="card-body">{blocked}</div> }.into_any(),
                        None => view! {
                            <form class="card-body" on:submit=on_submit.clone()>
                                <Show when=move || error_msg.get().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{move || error_msg.get().unwrap()}</span>
                                    </div>
                                </Show>

                                <Show when=move || mode == AuthMode::SignUp>
                                    <div class="form-control">
                                        <label class="label" for="full-name">
                                            <span class="label-text">"Full name"</span>
                                        </label>
                                        <input
                                            id="full-name"
                                            type="text"
                                            placeholder="Jane Doe"
                                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                            prop:value=full_name
                                            class="input input-bordered"
                                        />
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label" for="email">
                                        <span class="label-text">"Email"</span>
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="you@example.com"
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="password">
                                        <span class="label-text">"Password"</span>
                                    </label>
                                    <input
                                        id="password"
                                        type="password"
                                        placeholder="••••••••"
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control mt-6">
                                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                        {move || {
                                            if is_submitting.get() {
                                                view! {
                                                    <span class="loading loading-spinner"></span>
                                                    "Please wait..."
                                                }
                                                    .into_any()
                                            } else {
                                                match mode {
                                                    AuthMode::SignIn => "Sign in".into_any(),
                                                    AuthMode::SignUp => "Create account".into_any(),
                                                }
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        }
                            .into_any(),
                    }}
                </div>

                <button class="btn btn-link btn-sm" on:click=switch_mode>{switch_label}</button>
            </div>
        </div>
    }
}
