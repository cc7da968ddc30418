use crate::{
    AdCampaign, AlertFrequency, ApplicationStatus, AuthResponse, CandidatePage, CandidateSummary,
    CheckoutSession, College, ContactMessage, Course, Job, JobAlert, JobApplication, JobType,
    PaymentOutcome, Profile, RecruiterSummary, StudentRecord, UserRole,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Unlike a plain `const PATH`, `path(&self)` is a method so that endpoints
/// with ids or query parameters can derive their URL from the request itself.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path (relative to the API origin).
    fn path(&self) -> String;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for SignInRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/auth/signin".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

impl ApiRequest for SignUpRequest {
    // 注册不自动登录，只返回新建档案
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/auth/signup".to_string()
    }
}

/// Resolve the session token into the current profile
#[derive(Debug, Serialize, Deserialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/auth/me".to_string()
    }
}

// =========================================================
// Public jobs
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListJobsRequest {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
}

impl ApiRequest for ListJobsRequest {
    type Response = Vec<Job>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        let mut query = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(format!("search={search}"));
        }
        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            query.push(format!("location={location}"));
        }
        if let Some(job_type) = self.job_type {
            // serde 的 snake_case 名称即查询参数值
            let tag = match job_type {
                JobType::FullTime => "full_time",
                JobType::PartTime => "part_time",
                JobType::Internship => "internship",
                JobType::Contract => "contract",
            };
            query.push(format!("type={tag}"));
        }
        if query.is_empty() {
            "/api/jobs".to_string()
        } else {
            format!("/api/jobs?{}", query.join("&"))
        }
    }
}

/// Featured jobs for the landing page
#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturedJobsRequest;

impl ApiRequest for FeaturedJobsRequest {
    type Response = Vec<Job>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/jobs/featured".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetJobRequest {
    pub id: String,
}

impl ApiRequest for GetJobRequest {
    type Response = Job;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/jobs/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyToJobRequest {
    #[serde(skip)]
    pub job_id: String,
    pub cover_note: Option<String>,
}

impl ApiRequest for ApplyToJobRequest {
    type Response = JobApplication;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/jobs/{}/apply", self.job_id)
    }
}

// =========================================================
// Job seeker
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MyApplicationsRequest;

impl ApiRequest for MyApplicationsRequest {
    type Response = Vec<JobApplication>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/applications".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListAlertsRequest;

impl ApiRequest for ListAlertsRequest {
    type Response = Vec<JobAlert>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/alerts".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    pub keyword: String,
    pub location: Option<String>,
    pub frequency: AlertFrequency,
}

impl ApiRequest for CreateAlertRequest {
    type Response = JobAlert;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/alerts".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAlertRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteAlertRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/alerts/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub headline: Option<String>,
    pub skills: Vec<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "/api/profile".to_string()
    }
}

/// Public candidate page by slug (`/c/{slug}`)
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidatePageRequest {
    #[serde(skip)]
    pub slug: String,
}

impl ApiRequest for CandidatePageRequest {
    type Response = CandidatePage;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/profiles/{}", self.slug)
    }
}

// =========================================================
// Recruiter
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteOnboardingRequest {
    pub company_name: String,
    pub website: Option<String>,
    pub industry: String,
    pub company_size: String,
}

impl ApiRequest for CompleteOnboardingRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/recruiter/onboarding".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecruiterJobsRequest;

impl ApiRequest for RecruiterJobsRequest {
    type Response = Vec<Job>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/recruiter/jobs".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub description: String,
    pub tags: Vec<String>,
}

impl ApiRequest for CreateJobRequest {
    type Response = Job;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/recruiter/jobs".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetJobActiveRequest {
    #[serde(skip)]
    pub id: String,
    pub is_active: bool,
}

impl ApiRequest for SetJobActiveRequest {
    type Response = Job;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/recruiter/jobs/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobApplicantsRequest {
    #[serde(skip)]
    pub job_id: String,
}

impl ApiRequest for JobApplicantsRequest {
    type Response = Vec<JobApplication>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/recruiter/jobs/{}/applicants", self.job_id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetApplicationStatusRequest {
    #[serde(skip)]
    pub id: String,
    pub status: ApplicationStatus,
}

impl ApiRequest for SetApplicationStatusRequest {
    type Response = JobApplication;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/recruiter/applications/{}", self.id)
    }
}

// =========================================================
// Admin back office
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminCandidatesRequest;

impl ApiRequest for AdminCandidatesRequest {
    type Response = Vec<CandidateSummary>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/candidates".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminRecruitersRequest;

impl ApiRequest for AdminRecruitersRequest {
    type Response = Vec<RecruiterSummary>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/recruiters".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApproveRecruiterRequest {
    #[serde(skip)]
    pub id: String,
    pub approve: bool,
}

impl ApiRequest for ApproveRecruiterRequest {
    type Response = RecruiterSummary;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/admin/recruiters/{}/approval", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminJobsRequest;

impl ApiRequest for AdminJobsRequest {
    type Response = Vec<Job>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/jobs".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminSetJobActiveRequest {
    #[serde(skip)]
    pub id: String,
    pub is_active: bool,
}

impl ApiRequest for AdminSetJobActiveRequest {
    type Response = Job;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/jobs/{}", self.id)
    }
}

/// Create when `id` is None, update otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertCourseRequest {
    pub id: Option<String>,
    pub title: String,
    pub provider: String,
    pub price_cents: u32,
    pub description: String,
    pub duration_weeks: Option<u16>,
}

impl ApiRequest for UpsertCourseRequest {
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/courses".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCourseRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteCourseRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/courses/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminAlertsRequest;

impl ApiRequest for AdminAlertsRequest {
    type Response = Vec<JobAlert>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/alerts".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListAdsRequest;

impl ApiRequest for ListAdsRequest {
    type Response = Vec<AdCampaign>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/ads".to_string()
    }
}

/// Create when `id` is None, update otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertAdRequest {
    pub id: Option<String>,
    pub advertiser: String,
    pub headline: String,
    pub target_url: String,
    pub active: bool,
}

impl ApiRequest for UpsertAdRequest {
    type Response = AdCampaign;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/ads".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAdRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteAdRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/ads/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminMessagesRequest;

impl ApiRequest for AdminMessagesRequest {
    type Response = Vec<ContactMessage>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/messages".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkMessageReadRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for MarkMessageReadRequest {
    type Response = ContactMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/admin/messages/{}/read", self.id)
    }
}

/// Student roster of one college, admin view (`/admin/college/{id}/students`)
#[derive(Debug, Serialize, Deserialize)]
pub struct CollegeStudentsRequest {
    #[serde(skip)]
    pub college_id: String,
}

impl ApiRequest for CollegeStudentsRequest {
    type Response = Vec<StudentRecord>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/admin/college/{}/students", self.college_id)
    }
}

// =========================================================
// Courses & payments
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCoursesRequest;

impl ApiRequest for ListCoursesRequest {
    type Response = Vec<Course>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/courses".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetCourseRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetCourseRequest {
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/courses/{}", self.id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnrollCourseRequest {
    #[serde(skip)]
    pub course_id: String,
}

impl ApiRequest for EnrollCourseRequest {
    type Response = CheckoutSession;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/courses/{}/enroll", self.course_id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentStatusRequest;

impl ApiRequest for PaymentStatusRequest {
    type Response = PaymentOutcome;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/payment/status".to_string()
    }
}

// =========================================================
// Colleges
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCollegesRequest;

impl ApiRequest for ListCollegesRequest {
    type Response = Vec<College>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/colleges".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CollegeRegisterRequest {
    pub name: String,
    pub city: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for CollegeRegisterRequest {
    // 与个人注册一致：不自动登录
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/college/register".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CollegeLoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for CollegeLoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/college/login".to_string()
    }
}

/// The logged-in college's own roster
#[derive(Debug, Serialize, Deserialize)]
pub struct MyStudentsRequest;

impl ApiRequest for MyStudentsRequest {
    type Response = Vec<StudentRecord>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/college/students".to_string()
    }
}

/// The logged-in college's own record
#[derive(Debug, Serialize, Deserialize)]
pub struct MyCollegeRequest;

impl ApiRequest for MyCollegeRequest {
    type Response = College;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/college/me".to_string()
    }
}

// =========================================================
// Contact
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ApiRequest for ContactRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/contact".to_string()
    }
}
