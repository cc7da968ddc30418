use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// localStorage 中页面状态快照的键名
pub const PAGE_STATE_KEY: &str = "pageState";
/// localStorage 中会话令牌的键名
pub const TOKEN_KEY: &str = "token";
/// 实时通道中广告统计更新的事件名
pub const EVENT_AD_STATS_UPDATED: &str = "ad:stats-updated";

// =========================================================
// 账户与角色 (Accounts & Roles)
// =========================================================

/// 平台账户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Employer,
    Admin,
    College,
}

/// 当前登录账户的档案
///
/// `is_approved` 仅对 Employer 有意义；`onboarding_complete` 标记
/// 招聘方是否已完成公司信息填写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub college_id: Option<String>,
    /// 求职者公开主页的 slug（`/c/{slug}`）
    #[serde(default)]
    pub slug: Option<String>,
}

/// 登录/注册成功后的响应载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub profile: Profile,
}

// =========================================================
// 职位与申请 (Jobs & Applications)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
        }
    }

    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Internship,
        JobType::Contract,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    /// 人类可读的薪资区间，两端都缺省时返回 None
    pub fn salary_label(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(format!("${}k - ${}k", min / 1000, max / 1000)),
            (Some(min), None) => Some(format!("From ${}k", min / 1000)),
            (None, Some(max)) => Some(format!("Up to ${}k", max / 1000)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }

    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub cover_note: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// 求职者的公开主页（`/c/{slug}` 渲染用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePage {
    pub slug: String,
    pub full_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

// =========================================================
// 课程与学院 (Courses & Colleges)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub provider: String,
    /// 价格以分为单位存储，避免浮点
    pub price_cents: u32,
    pub description: String,
    #[serde(default)]
    pub duration_weeks: Option<u16>,
}

impl Course {
    pub fn price_label(&self) -> String {
        if self.price_cents == 0 {
            "Free".to_string()
        } else {
            format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub student_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub degree: String,
    pub graduation_year: u16,
    #[serde(default)]
    pub placed: bool,
}

// =========================================================
// 提醒、广告与留言 (Alerts, Ads & Messages)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFrequency {
    Daily,
    Weekly,
}

impl AlertFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            AlertFrequency::Daily => "Daily",
            AlertFrequency::Weekly => "Weekly",
        }
    }
}

/// 求职者订阅的职位提醒
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAlert {
    pub id: String,
    pub keyword: String,
    #[serde(default)]
    pub location: Option<String>,
    pub frequency: AlertFrequency,
    #[serde(default)]
    pub owner_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdStats {
    pub impressions: u64,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCampaign {
    pub id: String,
    pub advertiser: String,
    pub headline: String,
    pub target_url: String,
    pub active: bool,
    #[serde(default)]
    pub stats: AdStats,
}

/// 实时通道推送的广告统计增量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdStatsUpdate {
    pub campaign_id: String,
    pub stats: AdStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub received_at: DateTime<Utc>,
}

// =========================================================
// 后台汇总视图 (Admin Summaries)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub application_count: u32,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub is_approved: bool,
    pub onboarding_complete: bool,
}

// =========================================================
// 支付 (Payments)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Succeeded,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub state: PaymentState,
    pub reference: String,
    #[serde(default)]
    pub course_title: Option<String>,
}

/// 课程报名后的跳转目标（外部支付页）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

// =========================================================
// REST 响应信封 (Response Envelope)
// =========================================================

/// 后端统一的 `{success, data, error}` 响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// 归一化为 Result：
    /// - `success=true` 且有 data -> Ok(data)
    /// - 其余情况 -> Err(错误消息，缺失时给出兜底文案)
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "Empty response from server".to_string())
        } else {
            Err(self.error.unwrap_or_else(|| "Request failed".to_string()))
        }
    }
}

#[cfg(test)]
mod tests;
