//! CampusHire 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: REST 客户端
//! - `components`: UI 组件层

use std::sync::Arc;

mod api;
mod auth;
mod realtime;

mod components {
    pub mod admin;
    pub mod auth_page;
    pub mod candidate_profile;
    pub mod college;
    pub mod college_auth;
    pub mod contact;
    pub mod courses;
    pub mod guard;
    pub mod icons;
    pub mod job_details;
    pub mod job_seeker_dashboard;
    pub mod jobs;
    pub mod landing;
    pub mod nav;
    pub mod payment_status;
    pub mod recruiter_dashboard;
    pub mod recruiter_onboarding;
    pub mod static_pages;
    pub mod toast;
}

// 原生 Web API 封装模块
// 路由、存储与长连接对浏览器环境的依赖都收拢在这里，
// 业务组件不直接触碰 window。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod socket;
    pub mod storage;
}

use campushire_shared::{Profile, UserRole};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthContext, AuthState, init_auth, use_auth};
use crate::components::admin::AdminPage;
use crate::components::admin::college_students::AdminCollegeStudentsPage;
use crate::components::auth_page::AuthPage;
use crate::components::candidate_profile::CandidateProfilePage;
use crate::components::college::CollegeDashboardPage;
use crate::components::college_auth::{CollegeLoginPage, CollegeRegisterPage};
use crate::components::contact::ContactPage;
use crate::components::courses::{CourseDetailsPage, CoursesPage};
use crate::components::guard::{AccessDenied, PendingApproval};
use crate::components::job_details::JobDetailsPage;
use crate::components::job_seeker_dashboard::JobSeekerDashboardPage;
use crate::components::jobs::JobsPage;
use crate::components::landing::LandingPage;
use crate::components::nav::{Footer, TopNav};
use crate::components::payment_status::PaymentStatusPage;
use crate::components::recruiter_dashboard::RecruiterDashboardPage;
use crate::components::recruiter_onboarding::RecruiterOnboardingPage;
use crate::components::static_pages::{
    AboutPage, CollegesPage, EmployersPage, PricingPage, PrivacyPolicyPage, TermsOfServicePage,
};
use crate::web::route::PageState;
use crate::web::router::{Router, use_router};
use crate::web::storage::{LocalStateStore, StateStore};

/// 认证落定前的占位骨架
fn resolving_view() -> AnyView {
    view! {
        <div class="flex justify-center py-24">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
    .into_any()
}

/// 渲染前按角色复查授权
///
/// 守卫重定向只是体验优化，这里才是真正的页面级门槛。
/// 认证未落定时先渲染占位骨架，落定后不满足条件就地渲染拒绝视图。
fn gate(
    auth: &AuthContext,
    allow: impl FnOnce(&Profile) -> bool,
    page: impl FnOnce() -> AnyView,
) -> AnyView {
    let state = auth.state.get();
    if state.is_loading {
        return resolving_view();
    }
    match state.profile {
        Some(ref profile) if allow(profile) => page(),
        _ => view! { <AccessDenied /> }.into_any(),
    }
}

/// 招聘方后台的准入判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecruiterAccess {
    Resolving,
    Granted,
    Pending,
    Denied,
}

/// 招聘方后台三分门槛：通过 / 待审核 / 无权限
///
/// 与栏目无关——未通过审核的招聘方在任何栏目都看到待审核页。
fn recruiter_access(state: &AuthState) -> RecruiterAccess {
    if state.is_loading {
        return RecruiterAccess::Resolving;
    }
    match state.profile {
        Some(ref p) if p.role == UserRole::Employer => {
            if p.is_approved {
                RecruiterAccess::Granted
            } else {
                RecruiterAccess::Pending
            }
        }
        _ => RecruiterAccess::Denied,
    }
}

/// 视图选择器
///
/// 对 `PageState` 的穷尽匹配，新增页面漏配会直接编译失败。
fn page_view(state: PageState, auth: &AuthContext) -> AnyView {
    match state {
        PageState::Landing => view! { <LandingPage /> }.into_any(),
        PageState::Auth {
            mode,
            role,
            success_message,
        } => view! { <AuthPage mode=mode role=role notice=success_message /> }.into_any(),
        PageState::JobDetails { job_id } => view! { <JobDetailsPage job_id=job_id /> }.into_any(),
        PageState::CourseDetails { course_id } => {
            view! { <CourseDetailsPage course_id=course_id /> }.into_any()
        }
        PageState::CandidateProfile { slug } => {
            view! { <CandidateProfilePage slug=slug /> }.into_any()
        }
        PageState::JobSeekerDashboard { section } => gate(
            auth,
            |p| p.role == UserRole::JobSeeker,
            || view! { <JobSeekerDashboardPage section=section /> }.into_any(),
        ),
        PageState::RecruiterDashboard { section } => match recruiter_access(&auth.state.get()) {
            RecruiterAccess::Resolving => resolving_view(),
            RecruiterAccess::Granted => {
                view! { <RecruiterDashboardPage section=section /> }.into_any()
            }
            RecruiterAccess::Pending => view! { <PendingApproval /> }.into_any(),
            RecruiterAccess::Denied => view! { <AccessDenied /> }.into_any(),
        },
        PageState::RecruiterOnboarding => gate(
            auth,
            |p| p.role == UserRole::Employer,
            || view! { <RecruiterOnboardingPage /> }.into_any(),
        ),
        PageState::Admin { section } => gate(
            auth,
            |p| p.role == UserRole::Admin,
            || view! { <AdminPage section=section /> }.into_any(),
        ),
        PageState::AdminCollegeStudents { college_id } => gate(
            auth,
            |p| p.role == UserRole::Admin,
            || view! { <AdminCollegeStudentsPage college_id=college_id /> }.into_any(),
        ),
        PageState::College { section } => gate(
            auth,
            |p| p.role == UserRole::College,
            || view! { <CollegeDashboardPage section=section /> }.into_any(),
        ),
        PageState::CollegeRegister => view! { <CollegeRegisterPage /> }.into_any(),
        PageState::CollegeLogin => view! { <CollegeLoginPage /> }.into_any(),
        PageState::PaymentStatus => view! { <PaymentStatusPage /> }.into_any(),
        PageState::Jobs => view! { <JobsPage /> }.into_any(),
        PageState::Courses => view! { <CoursesPage /> }.into_any(),
        PageState::Employers => view! { <EmployersPage /> }.into_any(),
        PageState::Colleges => view! { <CollegesPage /> }.into_any(),
        PageState::About => view! { <AboutPage /> }.into_any(),
        PageState::Contact => view! { <ContactPage /> }.into_any(),
        PageState::Pricing => view! { <PricingPage /> }.into_any(),
        PageState::PrivacyPolicy => view! { <PrivacyPolicyPage /> }.into_any(),
        PageState::TermsOfService => view! { <TermsOfServicePage /> }.into_any(),
        PageState::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh] bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"This page does not exist."</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 路由出口：跟随当前页面状态与认证状态重渲染
#[component]
fn PageOutlet() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let current = router.current();

    move || page_view(current.get(), &auth)
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文与 API 客户端
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 同源部署，REST 走相对路径
    let api = ApiClient::new("");
    provide_context(api.clone());

    // 2. 恢复会话（有令牌则换取档案）
    init_auth(&auth_ctx, api);

    // 3. 认证信号注入路由服务，实现重定向守卫（解耦！）
    let loading = auth_ctx.loading_signal();
    let profile = auth_ctx.profile_signal();
    let store: Arc<dyn StateStore> = Arc::new(LocalStateStore);

    view! {
        <Router store=store loading=loading profile=profile>
            <div class="min-h-screen flex flex-col bg-base-200">
                <TopNav />
                <main class="flex-1">
                    <PageOutlet />
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employer(is_approved: bool) -> AuthState {
        AuthState {
            profile: Some(Profile {
                id: "e-1".to_string(),
                email: "recruiter@acme.example".to_string(),
                full_name: "Dana Recruiter".to_string(),
                role: UserRole::Employer,
                is_approved,
                onboarding_complete: true,
                company_name: Some("Acme".to_string()),
                college_id: None,
                slug: None,
            }),
            is_loading: false,
        }
    }

    #[test]
    fn unapproved_employer_lands_on_the_pending_view() {
        assert_eq!(recruiter_access(&employer(false)), RecruiterAccess::Pending);
        assert_eq!(recruiter_access(&employer(true)), RecruiterAccess::Granted);
    }

    #[test]
    fn non_employers_are_denied_regardless_of_flags() {
        let mut state = employer(true);
        if let Some(p) = state.profile.as_mut() {
            p.role = UserRole::JobSeeker;
        }
        assert_eq!(recruiter_access(&state), RecruiterAccess::Denied);

        let signed_out = AuthState {
            profile: None,
            is_loading: false,
        };
        assert_eq!(recruiter_access(&signed_out), RecruiterAccess::Denied);
    }

    #[test]
    fn access_is_deferred_while_the_session_restores() {
        let resolving = AuthState {
            profile: None,
            is_loading: true,
        };
        assert_eq!(recruiter_access(&resolving), RecruiterAccess::Resolving);
    }
}
