//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有页面状态、URL 解析与 URL 生成，
//! 初始加载与 popstate 共用同一个解析入口，避免逻辑分叉。

use campushire_shared::{Profile, UserRole};
use serde::{Deserialize, Serialize};

/// 认证页面模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "signin" => Some(AuthMode::SignIn),
            "signup" => Some(AuthMode::SignUp),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "signup",
        }
    }
}

/// 认证页面的角色段（URL slug 与账户角色不同名：recruiter -> employer）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthRole {
    JobSeeker,
    Recruiter,
    College,
    Admin,
}

impl AuthRole {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "job-seeker" => Some(AuthRole::JobSeeker),
            "recruiter" => Some(AuthRole::Recruiter),
            "college" => Some(AuthRole::College),
            "admin" => Some(AuthRole::Admin),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AuthRole::JobSeeker => "job-seeker",
            AuthRole::Recruiter => "recruiter",
            AuthRole::College => "college",
            AuthRole::Admin => "admin",
        }
    }

    pub fn user_role(&self) -> UserRole {
        match self {
            AuthRole::JobSeeker => UserRole::JobSeeker,
            AuthRole::Recruiter => UserRole::Employer,
            AuthRole::College => UserRole::College,
            AuthRole::Admin => UserRole::Admin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthRole::JobSeeker => "Job Seeker",
            AuthRole::Recruiter => "Recruiter",
            AuthRole::College => "College",
            AuthRole::Admin => "Administrator",
        }
    }
}

/// 页面状态枚举
///
/// 每个变体即一个已知页面，参数直接挂在变体上；
/// 未知路径一律归入 `NotFound` 哨兵变体。
/// serde 标签与字段名对齐 localStorage 快照的既有格式
/// （`page` / `jobId` / `dashboardSection` 等）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageState {
    #[default]
    Landing,
    Auth {
        mode: AuthMode,
        role: AuthRole,
        /// 跨页提示（如注册成功后带到登录页），不编码进 URL
        #[serde(
            rename = "successMessage",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        success_message: Option<String>,
    },
    JobDetails {
        #[serde(rename = "jobId")]
        job_id: String,
    },
    CourseDetails {
        #[serde(rename = "courseId")]
        course_id: String,
    },
    CandidateProfile {
        #[serde(rename = "profileSlug")]
        slug: String,
    },
    JobSeekerDashboard {
        #[serde(
            rename = "dashboardSection",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        section: Option<String>,
    },
    RecruiterDashboard {
        #[serde(
            rename = "dashboardSection",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        section: Option<String>,
    },
    RecruiterOnboarding,
    Admin {
        #[serde(
            rename = "dashboardSection",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        section: Option<String>,
    },
    AdminCollegeStudents {
        #[serde(rename = "collegeId")]
        college_id: String,
    },
    College {
        #[serde(
            rename = "dashboardSection",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        section: Option<String>,
    },
    CollegeRegister,
    CollegeLogin,
    PaymentStatus,
    Jobs,
    Courses,
    Employers,
    Colleges,
    About,
    Contact,
    Pricing,
    PrivacyPolicy,
    TermsOfService,
    NotFound,
}

impl PageState {
    /// 将 URL path 解析为页面状态
    ///
    /// 匹配按段进行且整段精确：多段的未知路径（如 `jobs/remote`）
    /// 即使首段单独有效，也归入 `NotFound`。
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return PageState::Landing;
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["auth", mode, role] => {
                match (AuthMode::from_slug(mode), AuthRole::from_slug(role)) {
                    (Some(mode), Some(role)) => PageState::Auth {
                        mode,
                        role,
                        success_message: None,
                    },
                    _ => PageState::NotFound,
                }
            }
            ["admin", "college", id, "students"] => PageState::AdminCollegeStudents {
                college_id: (*id).to_string(),
            },
            ["admin"] => PageState::Admin { section: None },
            ["admin", section] => PageState::Admin {
                section: Some((*section).to_string()),
            },
            ["job-details", id] => PageState::JobDetails {
                job_id: (*id).to_string(),
            },
            ["courses", id] => PageState::CourseDetails {
                course_id: (*id).to_string(),
            },
            ["c", slug] => PageState::CandidateProfile {
                slug: (*slug).to_string(),
            },
            ["job-seeker-dashboard"] => PageState::JobSeekerDashboard { section: None },
            ["job-seeker-dashboard", section] => PageState::JobSeekerDashboard {
                section: Some((*section).to_string()),
            },
            ["recruiter-dashboard"] => PageState::RecruiterDashboard { section: None },
            ["recruiter-dashboard", section] => PageState::RecruiterDashboard {
                section: Some((*section).to_string()),
            },
            ["payment", "status"] => PageState::PaymentStatus,
            // register/login 是学院的认证页，优先于 section 规则
            ["college", "register"] => PageState::CollegeRegister,
            ["college", "login"] => PageState::CollegeLogin,
            ["college"] => PageState::College { section: None },
            ["college", section] => PageState::College {
                section: Some((*section).to_string()),
            },
            [single] => Self::static_page(single),
            _ => PageState::NotFound,
        }
    }

    /// 单段静态页面允许列表（精确匹配）
    fn static_page(name: &str) -> Self {
        match name {
            "jobs" => PageState::Jobs,
            "courses" => PageState::Courses,
            "employers" => PageState::Employers,
            "colleges" => PageState::Colleges,
            "about" => PageState::About,
            "contact" => PageState::Contact,
            "pricing" => PageState::Pricing,
            "privacy-policy" => PageState::PrivacyPolicy,
            "terms-of-service" => PageState::TermsOfService,
            "recruiter-onboarding" => PageState::RecruiterOnboarding,
            _ => PageState::NotFound,
        }
    }

    /// 生成页面状态对应的规范 URL
    ///
    /// 与 `from_path` 互逆：对所有可由导航构造的状态，
    /// `from_path(state.to_path()) == state`（URL 未编码的字段除外）。
    pub fn to_path(&self) -> String {
        fn dashboard_path(base: &str, section: &Option<String>) -> String {
            match section {
                Some(section) => format!("/{base}/{section}"),
                None => format!("/{base}"),
            }
        }

        match self {
            PageState::Landing => "/".to_string(),
            PageState::Auth { mode, role, .. } => {
                format!("/auth/{}/{}", mode.slug(), role.slug())
            }
            PageState::JobDetails { job_id } => format!("/job-details/{job_id}"),
            PageState::CourseDetails { course_id } => format!("/courses/{course_id}"),
            PageState::CandidateProfile { slug } => format!("/c/{slug}"),
            PageState::AdminCollegeStudents { college_id } => {
                format!("/admin/college/{college_id}/students")
            }
            PageState::JobSeekerDashboard { section } => {
                dashboard_path("job-seeker-dashboard", section)
            }
            PageState::RecruiterDashboard { section } => {
                dashboard_path("recruiter-dashboard", section)
            }
            PageState::Admin { section } => dashboard_path("admin", section),
            PageState::College { section } => dashboard_path("college", section),
            PageState::RecruiterOnboarding => "/recruiter-onboarding".to_string(),
            PageState::CollegeRegister => "/college/register".to_string(),
            PageState::CollegeLogin => "/college/login".to_string(),
            PageState::PaymentStatus => "/payment/status".to_string(),
            PageState::Jobs => "/jobs".to_string(),
            PageState::Courses => "/courses".to_string(),
            PageState::Employers => "/employers".to_string(),
            PageState::Colleges => "/colleges".to_string(),
            PageState::About => "/about".to_string(),
            PageState::Contact => "/contact".to_string(),
            PageState::Pricing => "/pricing".to_string(),
            PageState::PrivacyPolicy => "/privacy-policy".to_string(),
            PageState::TermsOfService => "/terms-of-service".to_string(),
            PageState::NotFound => "/404".to_string(),
        }
    }

    /// **守卫触发集合：已登录用户停留在这些页面时会被重定向**
    ///
    /// 只包含落地页与各认证页。深链（职位详情、后台各页）
    /// 不在集合内，避免已登录用户被弹走。
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            PageState::Landing
                | PageState::Auth { .. }
                | PageState::CollegeRegister
                | PageState::CollegeLogin
        )
    }
}

/// 按角色计算登录后的落地页
///
/// 招聘方未完成入驻流程时先去 onboarding，其余角色直达各自后台。
pub fn landing_for(profile: &Profile) -> PageState {
    match profile.role {
        UserRole::Admin => PageState::Admin { section: None },
        UserRole::Employer if !profile.onboarding_complete => PageState::RecruiterOnboarding,
        UserRole::Employer => PageState::RecruiterDashboard { section: None },
        UserRole::JobSeeker => PageState::JobSeekerDashboard { section: None },
        UserRole::College => PageState::College { section: None },
    }
}

/// 守卫判定：已登录账户停留在公共页时给出重定向目标，否则不动作
pub fn redirect_after_auth(current: &PageState, profile: &Profile) -> Option<PageState> {
    current.is_public().then(|| landing_for(profile))
}

#[cfg(test)]
mod tests;
