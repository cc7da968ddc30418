//! 后台课程管理：列表 + 模态编辑器
//!
//! 新建与编辑共用同一个弹窗，`editing_id` 为 None 时是新建。

use campushire_shared::Course;
use campushire_shared::protocol::{DeleteCourseRequest, ListCoursesRequest, UpsertCourseRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{Plus, Trash};
use crate::components::toast::{Notification, Toast};

/// 把美元文本转换为分；空串视为免费课程
///
/// 支持 "49"、"49.9"、"49.99" 三种写法，超过两位小数或非数字视为无效。
fn parse_price_cents(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let (dollars, cents) = match trimmed.split_once('.') {
        Some((d, c)) => (d, c),
        None => (trimmed, ""),
    };
    let dollars: u32 = dollars.parse().ok()?;
    let cents: u32 = match cents.len() {
        0 => 0,
        1 => cents.parse::<u32>().ok()? * 10,
        2 => cents.parse().ok()?,
        _ => return None,
    };
    Some(dollars * 100 + cents)
}

/// 分转回编辑框里的美元文本
fn format_price(cents: u32) -> String {
    if cents == 0 {
        String::new()
    } else if cents % 100 == 0 {
        format!("{}", cents / 100)
    } else {
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

fn parse_weeks(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// 编辑器表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
#[derive(Clone, Copy)]
struct CourseForm {
    editing_id: RwSignal<Option<String>>,
    title: RwSignal<String>,
    provider: RwSignal<String>,
    price: RwSignal<String>,
    duration: RwSignal<String>,
    description: RwSignal<String>,
}

impl CourseForm {
    fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            provider: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.editing_id.set(None);
        self.title.set(String::new());
        self.provider.set(String::new());
        self.price.set(String::new());
        self.duration.set(String::new());
        self.description.set(String::new());
    }

    /// 用已有课程预填编辑器
    fn load(&self, course: &Course) {
        self.editing_id.set(Some(course.id.clone()));
        self.title.set(course.title.clone());
        self.provider.set(course.provider.clone());
        self.price.set(format_price(course.price_cents));
        self.duration.set(
            course
                .duration_weeks
                .map(|w| w.to_string())
                .unwrap_or_default(),
        );
        self.description.set(course.description.clone());
    }

    /// 价格无效时返回 None，由调用方提示
    fn to_request(self) -> Option<UpsertCourseRequest> {
        Some(UpsertCourseRequest {
            id: self.editing_id.get_untracked(),
            title: self.title.get_untracked().trim().to_string(),
            provider: self.provider.get_untracked().trim().to_string(),
            price_cents: parse_price_cents(&self.price.get_untracked())?,
            description: self.description.get_untracked(),
            duration_weeks: parse_weeks(&self.duration.get_untracked()),
        })
    }
}

#[component]
pub fn CoursesSection() -> impl IntoView {
    let api = use_api();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    let form = CourseForm::new();
    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&ListCoursesRequest).await {
                Ok(data) => set_courses.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load courses: {e}"), true)));
                }
            }
            set_loading.set(false);
        });
    });

    // open 信号驱动原生 dialog 的显示与关闭
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let api_save = use_api();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(req) = form.to_request() else {
            set_notification.set(Some(("Price must be a dollar amount".to_string(), true)));
            return;
        };
        if req.title.is_empty() || req.provider.is_empty() {
            set_notification.set(Some(("Title and provider are required".to_string(), true)));
            return;
        }

        let api = api_save.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api.send(&req).await {
                Ok(saved) => {
                    set_courses.update(|list| {
                        match list.iter_mut().find(|c| c.id == saved.id) {
                            Some(slot) => *slot = saved,
                            None => list.push(saved),
                        }
                    });
                    set_open.set(false);
                    form.reset();
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to save course: {e}"), true)));
                }
            }
            set_saving.set(false);
        });
    };

    let api_delete = use_api();
    let on_delete = move |id: String| {
        let api = api_delete.clone();
        spawn_local(async move {
            match api.send_ok(&DeleteCourseRequest { id: id.clone() }).await {
                Ok(()) => {
                    set_courses.update(|list| list.retain(|c| c.id != id));
                    set_notification.set(Some(("Course deleted.".to_string(), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to delete course: {e}"), true)));
                }
            }
        });
    };

    let open_create = move |_| {
        form.reset();
        set_open.set(true);
    };

    view! {
        <div class="space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex justify-end">
                <button class="btn btn-primary btn-sm gap-1" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "New course"
                </button>
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
                    when=move || !courses.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No courses in the catalog yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Provider"</th>
                                    <th>"Price"</th>
                                    <th>"Duration"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || courses.get() key=|c| c.id.clone() let:course>
                                    {
                                        let on_delete = on_delete.clone();
                                        let id = course.id.clone();
                                        let edit_course = course.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{course.title.clone()}</td>
                                                <td>{course.provider.clone()}</td>
                                                <td>{course.price_label()}</td>
                                                <td>
                                                    {course
                                                        .duration_weeks
                                                        .map(|w| format!("{w} weeks"))
                                                        .unwrap_or_else(|| "—".to_string())}
                                                </td>
                                                <td class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            form.load(&edit_course);
                                                            set_open.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        <Trash attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                </For>
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || {
                            if form.editing_id.get().is_some() {
                                "Edit course"
                            } else {
                                "New course"
                            }
                        }}
                    </h3>

                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <div class="form-control">
                            <label for="course-title" class="label">
                                <span class="label-text">"Title"</span>
                            </label>
                            <input
                                id="course-title"
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Intro to SQL"
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                                prop:value=form.title
                                required
                            />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label for="course-provider" class="label">
                                    <span class="label-text">"Provider"</span>
                                </label>
                                <input
                                    id="course-provider"
                                    type="text"
                                    class="input input-bordered w-full"
                                    placeholder="DataCamp"
                                    on:input=move |ev| form.provider.set(event_target_value(&ev))
                                    prop:value=form.provider
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label for="course-price" class="label">
                                    <span class="label-text">"Price (USD, blank = free)"</span>
                                </label>
                                <input
                                    id="course-price"
                                    type="text"
                                    class="input input-bordered w-full"
                                    placeholder="49.99"
                                    on:input=move |ev| form.price.set(event_target_value(&ev))
                                    prop:value=form.price
                                />
                            </div>
                        </div>

                        <div class="form-control">
                            <label for="course-duration" class="label">
                                <span class="label-text">"Duration (weeks, optional)"</span>
                            </label>
                            <input
                                id="course-duration"
                                type="number"
                                class="input input-bordered w-full"
                                placeholder="6"
                                on:input=move |ev| form.duration.set(event_target_value(&ev))
                                prop:value=form.duration
                            />
                        </div>

                        <div class="form-control">
                            <label for="course-description" class="label">
                                <span class="label-text">"Description"</span>
                            </label>
                            <textarea
                                id="course-description"
                                class="textarea textarea-bordered h-28 w-full"
                                placeholder="What the course covers..."
                                on:input=move |ev| form.description.set(event_target_value(&ev))
                                prop:value=form.description
                            ></textarea>
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                                {move || {
                                    if saving.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Saving..."
                                        }
                                            .into_any()
                                    } else {
                                        "Save".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_input_accepts_dollar_forms() {
        assert_eq!(parse_price_cents(""), Some(0));
        assert_eq!(parse_price_cents("  "), Some(0));
        assert_eq!(parse_price_cents("49"), Some(4_900));
        assert_eq!(parse_price_cents("49.9"), Some(4_990));
        assert_eq!(parse_price_cents("49.99"), Some(4_999));
        assert_eq!(parse_price_cents(" 0.50 "), Some(50));
    }

    #[test]
    fn price_input_rejects_garbage() {
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("49.999"), None);
        assert_eq!(parse_price_cents("-5"), None);
        assert_eq!(parse_price_cents("49."), Some(4_900));
    }

    #[test]
    fn price_round_trips_through_the_editor() {
        for cents in [0u32, 50, 4_900, 4_990, 4_999] {
            let text = format_price(cents);
            assert_eq!(parse_price_cents(&text), Some(cents), "cents={cents}");
        }
    }

    #[test]
    fn weeks_input_normalizes_blank_to_none() {
        assert_eq!(parse_weeks(""), None);
        assert_eq!(parse_weeks(" 6 "), Some(6));
        assert_eq!(parse_weeks("many"), None);
    }
}
