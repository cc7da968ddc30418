use super::*;
use chrono::Utc;

use crate::protocol::{
    ApiRequest, CollegeStudentsRequest, GetJobRequest, ListJobsRequest, MarkMessageReadRequest,
};

// =========================================================
// 响应信封
// =========================================================

#[test]
fn envelope_success_with_data_normalizes_to_ok() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_str(r#"{"success":true,"data":["a","b"]}"#).unwrap();
    assert_eq!(envelope.into_result().unwrap(), vec!["a", "b"]);
}

#[test]
fn envelope_failure_carries_the_server_message() {
    let envelope: ApiEnvelope<String> =
        serde_json::from_str(r#"{"success":false,"error":"Job not found"}"#).unwrap();
    assert_eq!(envelope.into_result().unwrap_err(), "Job not found");
}

#[test]
fn envelope_failure_without_message_gets_a_fallback() {
    let envelope: ApiEnvelope<String> = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert_eq!(envelope.into_result().unwrap_err(), "Request failed");
}

#[test]
fn envelope_success_without_data_is_an_error() {
    let envelope: ApiEnvelope<String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(envelope.into_result().is_err());
}

// =========================================================
// 端点路径
// =========================================================

#[test]
fn list_jobs_path_only_includes_set_filters() {
    assert_eq!(ListJobsRequest::default().path(), "/api/jobs");

    let req = ListJobsRequest {
        search: Some("rust".to_string()),
        location: None,
        job_type: Some(JobType::Internship),
    };
    assert_eq!(req.path(), "/api/jobs?search=rust&type=internship");

    // 空字符串与 None 同样被忽略
    let req = ListJobsRequest {
        search: Some(String::new()),
        location: Some("Austin".to_string()),
        job_type: None,
    };
    assert_eq!(req.path(), "/api/jobs?location=Austin");
}

#[test]
fn id_bearing_paths_interpolate_the_id() {
    let req = GetJobRequest {
        id: "job-9".to_string(),
    };
    assert_eq!(req.path(), "/api/jobs/job-9");

    let req = CollegeStudentsRequest {
        college_id: "clg-3".to_string(),
    };
    assert_eq!(req.path(), "/api/admin/college/clg-3/students");

    let req = MarkMessageReadRequest {
        id: "msg-1".to_string(),
    };
    assert_eq!(req.path(), "/api/admin/messages/msg-1/read");
}

// =========================================================
// 领域模型
// =========================================================

#[test]
fn roles_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&UserRole::JobSeeker).unwrap(),
        r#""job_seeker""#
    );
    assert_eq!(
        serde_json::from_str::<UserRole>(r#""employer""#).unwrap(),
        UserRole::Employer
    );
}

#[test]
fn profile_flags_default_to_false_when_missing() {
    let profile: Profile = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.c","full_name":"A","role":"employer"}"#,
    )
    .unwrap();
    assert!(!profile.is_approved);
    assert!(!profile.onboarding_complete);
    assert_eq!(profile.slug, None);
}

#[test]
fn salary_label_handles_missing_bounds() {
    let mut job = Job {
        id: "j1".to_string(),
        title: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        salary_min: Some(90_000),
        salary_max: Some(120_000),
        description: String::new(),
        tags: Vec::new(),
        is_active: true,
        posted_at: Utc::now(),
    };
    assert_eq!(job.salary_label().unwrap(), "$90k - $120k");

    job.salary_max = None;
    assert_eq!(job.salary_label().unwrap(), "From $90k");

    job.salary_min = None;
    assert_eq!(job.salary_label(), None);
}

#[test]
fn course_price_label_renders_cents_and_free() {
    let mut course = Course {
        id: "c1".to_string(),
        title: "Intro".to_string(),
        provider: "Acme Academy".to_string(),
        price_cents: 4_999,
        description: String::new(),
        duration_weeks: Some(6),
    };
    assert_eq!(course.price_label(), "$49.99");

    course.price_cents = 0;
    assert_eq!(course.price_label(), "Free");
}
