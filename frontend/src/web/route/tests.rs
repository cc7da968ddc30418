use super::*;
use campushire_shared::{Profile, UserRole};

fn profile(role: UserRole) -> Profile {
    Profile {
        id: "u-1".to_string(),
        email: "user@example.com".to_string(),
        full_name: "Test User".to_string(),
        role,
        is_approved: false,
        onboarding_complete: false,
        company_name: None,
        college_id: None,
        slug: None,
    }
}

// =========================================================
// 解析：静态页面允许列表
// =========================================================

#[test]
fn static_pages_parse_to_bare_variants() {
    let cases = [
        ("/jobs", PageState::Jobs),
        ("/courses", PageState::Courses),
        ("/employers", PageState::Employers),
        ("/colleges", PageState::Colleges),
        ("/about", PageState::About),
        ("/contact", PageState::Contact),
        ("/pricing", PageState::Pricing),
        ("/privacy-policy", PageState::PrivacyPolicy),
        ("/terms-of-service", PageState::TermsOfService),
        ("/recruiter-onboarding", PageState::RecruiterOnboarding),
    ];
    for (path, expected) in cases {
        assert_eq!(PageState::from_path(path), expected, "path {path}");
    }
}

#[test]
fn root_resolves_to_landing() {
    assert_eq!(PageState::from_path("/"), PageState::Landing);
    assert_eq!(PageState::from_path(""), PageState::Landing);
    // 尾部斜杠不影响解析
    assert_eq!(PageState::from_path("/jobs/"), PageState::Jobs);
}

// =========================================================
// 解析：未知路径一律 NotFound
// =========================================================

#[test]
fn unknown_paths_resolve_to_not_found() {
    let cases = [
        "/definitely-not-a-page",
        // 首段有效但整条路径未被特判的多段路径
        "/jobs/remote",
        "/about/team",
        "/settings/billing",
        // auth 段数或取值不对
        "/auth/signin",
        "/auth/signin/pirate",
        "/auth/later/job-seeker",
        // 不完整的参数化路径
        "/job-details",
        "/c",
        "/payment",
        "/payment/receipt",
        "/admin/college/clg-1",
        "/admin/college/clg-1/teachers",
    ];
    for path in cases {
        assert_eq!(PageState::from_path(path), PageState::NotFound, "path {path}");
    }
}

// =========================================================
// 解析：参数化路由
// =========================================================

#[test]
fn parameterized_routes_capture_their_segment() {
    assert_eq!(
        PageState::from_path("/job-details/abc123"),
        PageState::JobDetails {
            job_id: "abc123".to_string()
        }
    );
    assert_eq!(
        PageState::from_path("/courses/crs-42"),
        PageState::CourseDetails {
            course_id: "crs-42".to_string()
        }
    );
    assert_eq!(
        PageState::from_path("/c/jane-doe"),
        PageState::CandidateProfile {
            slug: "jane-doe".to_string()
        }
    );
    assert_eq!(
        PageState::from_path("/admin/college/clg-7/students"),
        PageState::AdminCollegeStudents {
            college_id: "clg-7".to_string()
        }
    );
}

#[test]
fn auth_routes_parse_mode_and_role() {
    assert_eq!(
        PageState::from_path("/auth/signin/job-seeker"),
        PageState::Auth {
            mode: AuthMode::SignIn,
            role: AuthRole::JobSeeker,
            success_message: None,
        }
    );
    assert_eq!(
        PageState::from_path("/auth/signup/recruiter"),
        PageState::Auth {
            mode: AuthMode::SignUp,
            role: AuthRole::Recruiter,
            success_message: None,
        }
    );
}

#[test]
fn dashboard_sections_are_optional_path_segments() {
    assert_eq!(
        PageState::from_path("/job-seeker-dashboard"),
        PageState::JobSeekerDashboard { section: None }
    );
    assert_eq!(
        PageState::from_path("/job-seeker-dashboard/applications"),
        PageState::JobSeekerDashboard {
            section: Some("applications".to_string())
        }
    );
    assert_eq!(
        PageState::from_path("/recruiter-dashboard/post-job"),
        PageState::RecruiterDashboard {
            section: Some("post-job".to_string())
        }
    );
    assert_eq!(
        PageState::from_path("/admin"),
        PageState::Admin { section: None }
    );
    assert_eq!(
        PageState::from_path("/admin/ads"),
        PageState::Admin {
            section: Some("ads".to_string())
        }
    );
}

#[test]
fn college_auth_pages_win_over_the_section_rule() {
    assert_eq!(
        PageState::from_path("/college/register"),
        PageState::CollegeRegister
    );
    assert_eq!(
        PageState::from_path("/college/login"),
        PageState::CollegeLogin
    );
    assert_eq!(
        PageState::from_path("/college"),
        PageState::College { section: None }
    );
    assert_eq!(
        PageState::from_path("/college/students"),
        PageState::College {
            section: Some("students".to_string())
        }
    );
}

// =========================================================
// URL 生成与往返
// =========================================================

#[test]
fn to_path_fixtures() {
    assert_eq!(PageState::Landing.to_path(), "/");
    assert_eq!(
        PageState::JobDetails {
            job_id: "abc123".to_string()
        }
        .to_path(),
        "/job-details/abc123"
    );
    assert_eq!(
        PageState::Auth {
            mode: AuthMode::SignUp,
            role: AuthRole::College,
            success_message: None,
        }
        .to_path(),
        "/auth/signup/college"
    );
    assert_eq!(
        PageState::AdminCollegeStudents {
            college_id: "clg-7".to_string()
        }
        .to_path(),
        "/admin/college/clg-7/students"
    );
    assert_eq!(PageState::PaymentStatus.to_path(), "/payment/status");
    assert_eq!(
        PageState::RecruiterDashboard {
            section: Some("jobs".to_string())
        }
        .to_path(),
        "/recruiter-dashboard/jobs"
    );
}

/// 对所有可由导航构造的状态验证 encode/decode 互逆
#[test]
fn round_trip_for_navigable_states() {
    let states = vec![
        PageState::Landing,
        PageState::Jobs,
        PageState::Courses,
        PageState::Employers,
        PageState::Colleges,
        PageState::About,
        PageState::Contact,
        PageState::Pricing,
        PageState::PrivacyPolicy,
        PageState::TermsOfService,
        PageState::RecruiterOnboarding,
        PageState::NotFound,
        PageState::PaymentStatus,
        PageState::CollegeRegister,
        PageState::CollegeLogin,
        PageState::Auth {
            mode: AuthMode::SignIn,
            role: AuthRole::JobSeeker,
            success_message: None,
        },
        PageState::Auth {
            mode: AuthMode::SignUp,
            role: AuthRole::Admin,
            success_message: None,
        },
        PageState::JobDetails {
            job_id: "abc123".to_string(),
        },
        PageState::CourseDetails {
            course_id: "crs-42".to_string(),
        },
        PageState::CandidateProfile {
            slug: "jane-doe".to_string(),
        },
        PageState::JobSeekerDashboard { section: None },
        PageState::JobSeekerDashboard {
            section: Some("alerts".to_string()),
        },
        PageState::RecruiterDashboard { section: None },
        PageState::RecruiterDashboard {
            section: Some("applicants".to_string()),
        },
        PageState::Admin { section: None },
        PageState::Admin {
            section: Some("messages".to_string()),
        },
        PageState::AdminCollegeStudents {
            college_id: "clg-7".to_string(),
        },
        PageState::College { section: None },
        PageState::College {
            section: Some("overview".to_string()),
        },
    ];
    for state in states {
        assert_eq!(
            PageState::from_path(&state.to_path()),
            state,
            "round trip via {}",
            state.to_path()
        );
    }
}

#[test]
fn auth_notice_is_not_encoded_in_the_url() {
    let state = PageState::Auth {
        mode: AuthMode::SignIn,
        role: AuthRole::JobSeeker,
        success_message: Some("Account created".to_string()),
    };
    assert_eq!(state.to_path(), "/auth/signin/job-seeker");
    // 解析回来时提示消息自然丢失
    assert_eq!(
        PageState::from_path(&state.to_path()),
        PageState::Auth {
            mode: AuthMode::SignIn,
            role: AuthRole::JobSeeker,
            success_message: None,
        }
    );
}

// =========================================================
// 守卫相关的纯逻辑
// =========================================================

#[test]
fn public_set_only_contains_landing_and_auth_pages() {
    assert!(PageState::Landing.is_public());
    assert!(
        PageState::Auth {
            mode: AuthMode::SignIn,
            role: AuthRole::Recruiter,
            success_message: None,
        }
        .is_public()
    );
    assert!(PageState::CollegeRegister.is_public());
    assert!(PageState::CollegeLogin.is_public());

    assert!(!PageState::Jobs.is_public());
    assert!(
        !PageState::JobDetails {
            job_id: "abc".to_string()
        }
        .is_public()
    );
    assert!(!PageState::Admin { section: None }.is_public());
    assert!(!PageState::NotFound.is_public());
}

#[test]
fn redirect_fires_only_on_public_pages() {
    let seeker = profile(UserRole::JobSeeker);

    // 停在自己角色的登录页：恰好跳到求职者后台，而非其他角色的
    let parked = PageState::from_path("/auth/signin/job-seeker");
    assert_eq!(
        redirect_after_auth(&parked, &seeker),
        Some(PageState::JobSeekerDashboard { section: None })
    );
    assert_eq!(
        redirect_after_auth(&PageState::Landing, &seeker),
        Some(PageState::JobSeekerDashboard { section: None })
    );

    // 深链上的已登录用户不被弹走
    let deep_link = PageState::JobDetails {
        job_id: "abc123".to_string(),
    };
    assert_eq!(redirect_after_auth(&deep_link, &seeker), None);
    assert_eq!(
        redirect_after_auth(&PageState::Contact, &profile(UserRole::Admin)),
        None
    );
}

#[test]
fn landing_for_maps_each_role_to_its_own_dashboard() {
    assert_eq!(
        landing_for(&profile(UserRole::Admin)),
        PageState::Admin { section: None }
    );
    assert_eq!(
        landing_for(&profile(UserRole::JobSeeker)),
        PageState::JobSeekerDashboard { section: None }
    );
    assert_eq!(
        landing_for(&profile(UserRole::College)),
        PageState::College { section: None }
    );

    // 招聘方：未完成入驻先去 onboarding，完成后进后台
    let fresh = profile(UserRole::Employer);
    assert_eq!(landing_for(&fresh), PageState::RecruiterOnboarding);

    let mut onboarded = profile(UserRole::Employer);
    onboarded.onboarding_complete = true;
    assert_eq!(
        landing_for(&onboarded),
        PageState::RecruiterDashboard { section: None }
    );
}

// =========================================================
// 快照格式（localStorage 中的 JSON 形状）
// =========================================================

#[test]
fn snapshot_json_uses_the_page_tag_and_camel_case_params() {
    let state = PageState::JobDetails {
        job_id: "abc123".to_string(),
    };
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"page":"job-details","jobId":"abc123"}"#);

    let parsed: PageState =
        serde_json::from_str(r#"{"page":"recruiter-dashboard","dashboardSection":"jobs"}"#)
            .unwrap();
    assert_eq!(
        parsed,
        PageState::RecruiterDashboard {
            section: Some("jobs".to_string())
        }
    );
}
