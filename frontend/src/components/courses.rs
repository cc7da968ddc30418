//! 课程目录与详情页

use campushire_shared::Course;
use campushire_shared::protocol::{EnrollCourseRequest, GetCourseRequest, ListCoursesRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::BookOpen;
use crate::web::route::{AuthMode, AuthRole, PageState};
use crate::web::router::use_router;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&ListCoursesRequest).await {
                Ok(data) => set_courses.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load courses: {e}"))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center gap-2">
                <BookOpen attr:class="h-8 w-8 text-primary" />
                <h1 class="text-3xl font-bold">"Courses"</h1>
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
                <div class="grid md:grid-cols-2 gap-4">
                    <For each=move || courses.get() key=|c| c.id.clone() let:course>
                        {
                            let router = router.clone();
                            let course_id = course.id.clone();
                            view! {
                                <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">{course.title.clone()}</h2>
                                        <p class="text-base-content/70">{course.provider.clone()}</p>
                                        <div class="flex items-center justify-between mt-2">
                                            <span class="font-bold text-primary">
                                                {course.price_label()}
                                            </span>
                                            {course
                                                .duration_weeks
                                                .map(|w| {
                                                    view! {
                                                        <span class="badge badge-ghost">
                                                            {w} " weeks"
                                                        </span>
                                                    }
                                                })}
                                        </div>
                                        <div class="card-actions justify-end">
                                            <button
                                                class="btn btn-primary btn-sm"
                                                on:click=move |_| {
                                                    router
                                                        .navigate(PageState::CourseDetails {
                                                            course_id: course_id.clone(),
                                                        })
                                                }
                                            >
                                                "Details"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn CourseDetailsPage(course_id: String) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (course, set_course) = signal(Option::<Course>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (enrolling, set_enrolling) = signal(false);

    {
        let api = api.clone();
        let course_id = course_id.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let req = GetCourseRequest {
                id: course_id.clone(),
            };
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(data) => set_course.set(Some(data)),
                    Err(e) => set_error.set(Some(format!("Failed to load course: {e}"))),
                }
                set_loading.set(false);
            });
        });
    }

    let on_enroll = {
        let api = api.clone();
        let router = router.clone();
        move |_| {
            // 未登录先去登录，回来再报名
            if auth.state.get_untracked().profile.is_none() {
                router.navigate(PageState::Auth {
                    mode: AuthMode::SignIn,
                    role: AuthRole::JobSeeker,
                    success_message: None,
                });
                return;
            }
            let Some(course) = course.get_untracked() else {
                return;
            };

            let api = api.clone();
            let req = EnrollCourseRequest {
                course_id: course.id,
            };
            set_enrolling.set(true);
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(session) => {
                        // 跳转到外部支付页；支付完成后回到 /payment/status
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().assign(&session.checkout_url);
                        }
                    }
                    Err(e) => {
                        set_error.set(Some(format!("Enrollment failed: {e}")));
                        set_enrolling.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error mb-4">
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
                {move || {
                    course
                        .get()
                        .map(|course| {
                            let on_enroll = on_enroll.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body space-y-2">
                                        <h1 class="text-3xl font-bold">{course.title.clone()}</h1>
                                        <p class="text-base-content/70">
                                            "Offered by " {course.provider.clone()}
                                        </p>
                                        <div class="flex items-center gap-3">
                                            <span class="text-2xl font-bold text-primary">
                                                {course.price_label()}
                                            </span>
                                            {course
                                                .duration_weeks
                                                .map(|w| {
                                                    view! {
                                                        <span class="badge badge-ghost">{w} " weeks"</span>
                                                    }
                                                })}
                                        </div>
                                        <div class="divider"></div>
                                        <p class="whitespace-pre-line">{course.description.clone()}</p>
                                        <div class="card-actions justify-end mt-4">
                                            <button
                                                class="btn btn-primary"
                                                disabled=move || enrolling.get()
                                                on:click=on_enroll
                                            >
                                                {move || {
                                                    if enrolling.get() {
                                                        view! {
                                                            <span class="loading loading-spinner"></span>
                                                            "Redirecting..."
                                                        }
                                                            .into_any()
                                                    } else {
                                                        "Enroll".into_any()
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
