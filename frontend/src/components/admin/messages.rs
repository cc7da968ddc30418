//! 后台联系留言收件箱

use campushire_shared::ContactMessage;
use campushire_shared::protocol::{AdminMessagesRequest, MarkMessageReadRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::Mail;
use crate::components::toast::{Notification, Toast};

#[component]
pub fn MessagesSection() -> impl IntoView {
    let api = use_api();

    let (messages, set_messages) = signal(Vec::<ContactMessage>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&AdminMessagesRequest).await {
                Ok(data) => set_messages.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load messages: {e}"), true)));
                }
            }
            set_loading.set(false);
        });
    });

    let api_read = use_api();
    let on_mark_read = move |id: String| {
        let api = api_read.clone();
        spawn_local(async move {
            match api.send(&MarkMessageReadRequest { id }).await {
                Ok(updated) => {
                    set_messages.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|m| m.id == updated.id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to mark as read: {e}"), true)));
                }
            }
        });
    };

    let unread = move || messages.with(|list| list.iter().filter(|m| !m.read).count());

    view! {
        <div class="space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex items-center gap-2">
                <Mail attr:class="h-5 w-5 text-primary" />
                <span class="font-medium">
                    {move || format!("{} unread", unread())}
                </span>
            </div>

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
                    when=move || !messages.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "The inbox is empty."
                            </p>
                        }
                    }
                >
                    <div class="space-y-3">
                        <For each=move || messages.get() key=|m| m.id.clone() let:message>
                            {
                                let id = message.id.clone();
                                let mark = move |_| on_mark_read(id.clone());
                                let read = message.read;
                                let card_class = if read {
                                    "card bg-base-100 shadow-sm"
                                } else {
                                    "card bg-base-100 shadow border-l-4 border-primary"
                                };
                                view! {
                                    <div class=card_class>
                                        <div class="card-body py-4">
                                            <div class="flex items-start justify-between gap-2">
                                                <div>
                                                    <h3 class="font-bold">
                                                        {message.subject.clone()}
                                                    </h3>
                                                    <p class="text-sm text-base-content/60">
                                                        {message.name.clone()} " <" {message.email.clone()}
                                                        "> · "
                                                        {message
                                                            .received_at
                                                            .format("%b %e, %Y %H:%M")
                                                            .to_string()}
                                                    </p>
                                                </div>
                                                <Show when=move || !read>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=mark.clone()
                                                    >
                                                        "Mark read"
                                                    </button>
                                                </Show>
                                            </div>
                                            <p class="whitespace-pre-line mt-2">
                                                {message.body.clone()}
                                            </p>
                                        </div>
                                    </div>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
