//! 学院专用认证页（`/college/login`、`/college/register`）

use campushire_shared::protocol::CollegeRegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{college_register, college_sign_in, use_auth};
use crate::components::icons::GraduationCap;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn CollegeLoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            // 登录成功后由路由守卫跳到学院后台
            if let Err(e) =
                college_sign_in(&auth, &api, email.get_untracked(), password.get_untracked()).await
            {
                set_error_msg.set(Some(e.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    let to_register = {
        let router = router.clone();
        move |_| router.navigate(PageState::CollegeRegister)
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <GraduationCap attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-2xl font-bold">"College sign in"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="college-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="college-email"
                                type="email"
                                placeholder="placements@college.edu"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="college-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="college-password"
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
                                            "Signing in..."
                                        }
                                            .into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <button class="btn btn-link btn-sm" on:click=to_register>
                    "New here? Register your college"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn CollegeRegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (registered, set_registered) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all required fields".to_string()));
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let req = CollegeRegisterRequest {
            name: name.get_untracked(),
            city: city.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match college_register(&api, req).await {
                Ok(_) => set_registered.set(true),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    let to_login = {
        let router = router.clone();
        move |_| router.navigate(PageState::CollegeLogin)
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <GraduationCap attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-2xl font-bold">"Register your college"</h1>
                </div>

                <Show
                    when=move || !registered.get()
                    fallback={
                        let to_login = to_login.clone();
                        move || {
                            let to_login = to_login.clone();
                            view! {
                                <div class="card w-full shadow-2xl bg-base-100">
                                    <div class="card-body items-center text-center">
                                        <h2 class="card-title text-success">"Registration received"</h2>
                                        <p class="text-base-content/70">
                                            "Your college account has been created. Sign in to manage your students."
                                        </p>
                                        <button class="btn btn-primary mt-2" on:click=to_login>
                                            "Proceed to sign in"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    }
                >
                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit.clone()>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="college-name">
                                    <span class="label-text">"College name"</span>
                                </label>
                                <input
                                    id="college-name"
                                    type="text"
                                    placeholder="Springfield Institute of Technology"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=name
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="college-city">
                                    <span class="label-text">"City"</span>
                                </label>
                                <input
                                    id="college-city"
                                    type="text"
                                    placeholder="Springfield"
                                    on:input=move |ev| set_city.set(event_target_value(&ev))
                                    prop:value=city
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="college-reg-email">
                                    <span class="label-text">"Placement cell email"</span>
                                </label>
                                <input
                                    id="college-reg-email"
                                    type="email"
                                    placeholder="placements@college.edu"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="college-reg-password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="college-reg-password"
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
                                                "Registering..."
                                            }
                                                .into_any()
                                        } else {
                                            "Register".into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>
            </div>
        </div>
    }
}
