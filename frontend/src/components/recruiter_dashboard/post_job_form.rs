//! 发布职位表单
//!
//! 将零散的 signal 整合为 `JobForm` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换

use campushire_shared::JobType;
use campushire_shared::protocol::CreateJobRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::toast::{Notification, Toast};

/// 把薪资输入框的文本转换为数值；空串或非数字视为未填
fn parse_salary(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// 逗号分隔的标签输入，去空白、丢弃空项
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
#[derive(Clone, Copy)]
struct JobForm {
    title: RwSignal<String>,
    location: RwSignal<String>,
    job_type: RwSignal<JobType>,
    salary_min: RwSignal<String>,
    salary_max: RwSignal<String>,
    description: RwSignal<String>,
    tags: RwSignal<String>,
}

impl JobForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            job_type: RwSignal::new(JobType::FullTime),
            salary_min: RwSignal::new(String::new()),
            salary_max: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    fn reset(&self) {
        self.title.set(String::new());
        self.location.set(String::new());
        self.job_type.set(JobType::FullTime);
        self.salary_min.set(String::new());
        self.salary_max.set(String::new());
        self.description.set(String::new());
        self.tags.set(String::new());
    }

    /// 将表单状态转换为 API 请求对象
    fn to_request(self) -> CreateJobRequest {
        CreateJobRequest {
            title: self.title.get_untracked().trim().to_string(),
            location: self.location.get_untracked().trim().to_string(),
            job_type: self.job_type.get_untracked(),
            salary_min: parse_salary(&self.salary_min.get_untracked()),
            salary_max: parse_salary(&self.salary_max.get_untracked()),
            description: self.description.get_untracked(),
            tags: split_tags(&self.tags.get_untracked()),
        }
    }
}

#[component]
pub fn PostJobSection() -> impl IntoView {
    let api = use_api();

    let form = JobForm::new();
    let (submitting, set_submitting) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.title.get().trim().is_empty() || form.description.get().trim().is_empty() {
            set_notification.set(Some(("Title and description are required".to_string(), true)));
            return;
        }

        let api = api.clone();
        let req = form.to_request();
        set_submitting.set(true);
        spawn_local(async move {
            match api.send(&req).await {
                Ok(_) => {
                    set_notification
                        .set(Some(("Job posted. It is now live.".to_string(), false)));
                    form.reset();
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to post job: {e}"), true)));
                }
            }
            set_submitting.set(false);
        });
    };

    let on_type_change = move |ev: leptos::web_sys::Event| {
        form.job_type.set(match event_target_value(&ev).as_str() {
            "part_time" => JobType::PartTime,
            "internship" => JobType::Internship,
            "contract" => JobType::Contract,
            _ => JobType::FullTime,
        });
    };

    view! {
        <div class="max-w-2xl space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="job-title">
                            <span class="label-text">"Job title"</span>
                        </label>
                        <input
                            id="job-title"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="Backend Engineer"
                            on:input=move |ev| form.title.set(event_target_value(&ev))
                            prop:value=form.title
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="job-location">
                            <span class="label-text">"Location"</span>
                        </label>
                        <input
                            id="job-location"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="Remote / Bengaluru"
                            on:input=move |ev| form.location.set(event_target_value(&ev))
                            prop:value=form.location
                            required
                        />
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-4">
                    <div class="form-control">
                        <label class="label" for="job-type">
                            <span class="label-text">"Type"</span>
                        </label>
                        <select id="job-type" class="select select-bordered" on:change=on_type_change>
                            <option value="full_time" selected>"Full-time"</option>
                            <option value="part_time">"Part-time"</option>
                            <option value="internship">"Internship"</option>
                            <option value="contract">"Contract"</option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="salary-min">
                            <span class="label-text">"Salary from (annual)"</span>
                        </label>
                        <input
                            id="salary-min"
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="60000"
                            on:input=move |ev| form.salary_min.set(event_target_value(&ev))
                            prop:value=form.salary_min
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="salary-max">
                            <span class="label-text">"Salary to"</span>
                        </label>
                        <input
                            id="salary-max"
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="90000"
                            on:input=move |ev| form.salary_max.set(event_target_value(&ev))
                            prop:value=form.salary_max
                        />
                    </div>
                </div>

                <div class="form-control">
                    <label class="label" for="job-description">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        id="job-description"
                        class="textarea textarea-bordered h-40 w-full"
                        placeholder="Responsibilities, requirements, perks..."
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=form.description
                        required
                    ></textarea>
                </div>

                <div class="form-control">
                    <label class="label" for="job-tags">
                        <span class="label-text">"Tags (comma separated)"</span>
                    </label>
                    <input
                        id="job-tags"
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="rust, backend, sql"
                        on:input=move |ev| form.tags.set(event_target_value(&ev))
                        prop:value=form.tags
                    />
                </div>

                <button class="btn btn-primary" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="loading loading-spinner"></span>
                                "Posting..."
                            }
                                .into_any()
                        } else {
                            "Post job".into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_input_normalizes_blanks_and_garbage_to_none() {
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("   "), None);
        assert_eq!(parse_salary("abc"), None);
        assert_eq!(parse_salary("-5"), None);
        assert_eq!(parse_salary("90000"), Some(90_000));
        assert_eq!(parse_salary(" 60000 "), Some(60_000));
    }

    #[test]
    fn tags_split_on_commas_and_drop_empties() {
        assert_eq!(split_tags(""), Vec::<String>::new());
        assert_eq!(
            split_tags("rust, backend , ,sql,"),
            vec!["rust".to_string(), "backend".to_string(), "sql".to_string()]
        );
    }
}
