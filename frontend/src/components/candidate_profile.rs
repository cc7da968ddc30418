//! 求职者公开主页（`/c/{slug}`）

use campushire_shared::CandidatePage;
use campushire_shared::protocol::CandidatePageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::PageState;
use crate::web::router::use_router;

#[component]
pub fn CandidateProfilePage(slug: String) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (page, set_page) = signal(Option::<CandidatePage>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let req = CandidatePageRequest { slug: slug.clone() };
            spawn_local(async move {
                match api.send(&req).await {
                    Ok(data) => set_page.set(Some(data)),
                    Err(e) => set_error.set(Some(format!("Profile unavailable: {e}"))),
                }
                set_loading.set(false);
            });
        });
    }

    let home = move |_| router.navigate(PageState::Landing);

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8">
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
                    when=move || page.get().is_some()
                    fallback={
                        let home = home.clone();
                        move || {
                            let home = home.clone();
                            view! {
                                <div role="alert" class="alert alert-error">
                                    <span>
                                        {move || {
                                            error
                                                .get()
                                                .unwrap_or_else(|| "Profile not found".to_string())
                                        }}
                                    </span>
                                    <button class="btn btn-sm" on:click=home>"Home"</button>
                                </div>
                            }
                        }
                    }
                >
                    {move || {
                        let page = page.get().unwrap();
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body space-y-3">
                                    <div class="flex items-center gap-4">
                                        <div class="avatar avatar-placeholder">
                                            <div class="bg-primary text-primary-content rounded-full w-16">
                                                <span class="text-2xl">
                                                    {page.full_name.chars().next().unwrap_or('?')}
                                                </span>
                                            </div>
                                        </div>
                                        <div>
                                            <h1 class="text-2xl font-bold">{page.full_name.clone()}</h1>
                                            {page
                                                .headline
                                                .clone()
                                                .map(|h| {
                                                    view! { <p class="text-base-content/70">{h}</p> }
                                                })}
                                        </div>
                                    </div>
                                    {page
                                        .about
                                        .clone()
                                        .map(|about| {
                                            view! {
                                                <p class="whitespace-pre-line text-base-content/80">
                                                    {about}
                                                </p>
                                            }
                                        })}
                                    <div class="flex gap-1 flex-wrap">
                                        {page
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="badge badge-outline">{skill.clone()}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </Show>
            </Show>
        </div>
    }
}
