//! 联系我们表单

use campushire_shared::protocol::ContactRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::Mail;

#[component]
pub fn ContactPage() -> impl IntoView {
    let api = use_api();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() || body.get().is_empty() {
            set_error_msg.set(Some("Please fill in name, email and message".to_string()));
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let req = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            body: body.get_untracked(),
        };
        spawn_local(async move {
            match api.send_ok(&req).await {
                Ok(()) => {
                    set_sent.set(true);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_body.set(String::new());
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto p-4 md:p-8">
            <div class="flex items-center gap-2 mb-4">
                <Mail attr:class="h-7 w-7 text-primary" />
                <h1 class="text-3xl font-bold">"Contact us"</h1>
            </div>
            <p class="text-base-content/70 mb-6">
                "Questions about hiring, courses or your college account? Drop us a line."
            </p>

            <Show when=move || sent.get()>
                <div role="alert" class="alert alert-success mb-4">
                    <span>"Thanks! Your message has been sent."</span>
                </div>
            </Show>
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error mb-4">
                    <span>{move || error_msg.get().unwrap()}</span>
                </div>
            </Show>

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-4">
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Your name"
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        prop:value=name
                        required
                    />
                    <input
                        type="email"
                        class="input input-bordered w-full"
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        required
                    />
                </div>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="Subject"
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                    prop:value=subject
                />
                <textarea
                    class="textarea textarea-bordered w-full h-36"
                    placeholder="Your message"
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                    prop:value=body
                    required
                ></textarea>
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || {
                        if is_submitting.get() {
                            view! {
                                <span class="loading loading-spinner"></span>
                                "Sending..."
                            }
                                .into_any()
                        } else {
                            "Send message".into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
