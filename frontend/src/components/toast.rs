//! 轻提示组件
//!
//! 页面各自持有 `(消息内容, 是否出错)` 信号，本组件只负责展示
//! 与 3 秒后的自动清除。

use leptos::prelude::*;

/// 消息内容, 是否出错
pub type Notification = Option<(String, bool)>;

#[component]
pub fn Toast(
    notification: ReadSignal<Notification>,
    set_notification: WriteSignal<Notification>,
) -> impl IntoView {
    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = notification.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
