//! 채용/대외활동 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::jobs::job::{JobBadge, JobListing, JobType};

/// `GET /api/v1/jobs?type=&sort=&page=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobsQuery {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    /// latest(기본) | deadline | views
    pub sort: Option<String>,
    /// 1부터 시작
    pub page: Option<usize>,
}

/// 카드 한 장
#[derive(Debug, Clone, Serialize)]
pub struct JobItem {
    pub id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub org_name: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub deadline_date: String,
    pub d_day: i64,
    pub badge: JobBadge,
    pub is_active: bool,
    pub created_at: String,
    pub views: u64,
    pub saved: bool,
    pub external_url: String,
    pub reward_label: String,
    pub location: String,
    pub experience_range: String,
}

impl JobItem {
    pub fn from_listing(listing: &JobListing, d_day: i64, saved: bool) -> Self {
        Self {
            id: listing.id.clone(),
            job_type: listing.job_type,
            org_name: listing.org_name.clone(),
            title: listing.title.clone(),
            thumbnail_url: listing.thumbnail_url.clone(),
            deadline_date: listing.deadline_date.to_rfc3339(),
            d_day,
            badge: JobBadge::for_days(d_day),
            is_active: listing.is_active,
            created_at: listing.created_at.to_rfc3339(),
            views: listing.views,
            saved,
            external_url: listing.external_url.clone(),
            reward_label: listing.reward_label.clone(),
            location: listing.location.clone(),
            experience_range: listing.experience_range.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobsPage {
    pub items: Vec<JobItem>,
    pub has_more: bool,
    pub page: usize,
    pub total: usize,
}

/// 저장 버튼 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSaveStatus {
    Saved,
    Unsaved,
    /// 로그인 후 저장됨
    LoginRequired,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSaveResponse {
    pub job_id: String,
    pub status: JobSaveStatus,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedJobsResponse {
    pub items: Vec<JobItem>,
}
