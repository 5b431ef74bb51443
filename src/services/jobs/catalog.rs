//! 공고 카탈로그
//!
//! 채용/대외활동 공고 12건을 프로세스 내 상수로 보관하고,
//! 종류 필터, 정렬, 페이지 나누기를 수행합니다.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::core::errors::AppError;
use crate::domain::dto::jobs::{JobItem, JobsPage};
use crate::domain::entities::jobs::job::{JobListing, JobType};

/// 한 페이지에 보여줄 공고 수
pub const JOBS_PER_PAGE: usize = 8;

/// 공고 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// 등록일 내림차순
    #[default]
    Latest,
    /// 마감일 오름차순
    Deadline,
    /// 조회수 내림차순
    Views,
}

impl JobSort {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("latest") => Ok(JobSort::Latest),
            Some("deadline") => Ok(JobSort::Deadline),
            Some("views") => Ok(JobSort::Views),
            Some(other) => Err(AppError::ValidationError(format!(
                "지원하지 않는 정렬 기준입니다: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobSort::Latest => "latest",
            JobSort::Deadline => "deadline",
            JobSort::Views => "views",
        }
    }
}

fn utc(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

struct Seed {
    number: u32,
    job_type: JobType,
    org_name: &'static str,
    title: &'static str,
    thumbnail: Option<&'static str>,
    deadline: (u32, u32),
    is_active: bool,
    created: (u32, u32, u32, u32),
    views: u64,
    reward_label: &'static str,
    location: &'static str,
    experience_range: &'static str,
}

impl Seed {
    fn into_listing(self) -> JobListing {
        let (month, day) = self.deadline;
        let (c_month, c_day, c_hour, c_minute) = self.created;
        let id = format!("job-{:03}", self.number);

        JobListing {
            external_url: format!("https://example.com/jobs/{}", id),
            id,
            job_type: self.job_type,
            org_name: self.org_name.to_string(),
            title: self.title.to_string(),
            thumbnail_url: self
                .thumbnail
                .map(|photo| format!("https://images.unsplash.com/{}?q=80&w=600", photo)),
            deadline_date: utc(month, day, 9, 0),
            is_active: self.is_active,
            created_at: utc(c_month, c_day, c_hour, c_minute),
            views: self.views,
            reward_label: self.reward_label.to_string(),
            location: self.location.to_string(),
            experience_range: self.experience_range.to_string(),
        }
    }
}

static CATALOG: Lazy<Vec<JobListing>> = Lazy::new(|| {
    use JobType::{Activity, Job};

    [
        Seed {
            number: 1,
            job_type: Job,
            org_name: "FC 바르셀로나",
            title: "글로벌 마케팅 매니저",
            thumbnail: Some("photo-1543326727-cf6c39e8f84c"),
            deadline: (11, 12),
            is_active: true,
            created: (11, 4, 2, 30),
            views: 1290,
            reward_label: "합격보상금 100만원",
            location: "스페인 바르셀로나",
            experience_range: "경력 5년 이상",
        },
        Seed {
            number: 2,
            job_type: Job,
            org_name: "뉴욕 닉스",
            title: "선수 데이터 분석가",
            thumbnail: Some("photo-1488521787991-ed7bbaae773c"),
            deadline: (11, 8),
            is_active: true,
            created: (11, 2, 9, 10),
            views: 860,
            reward_label: "합격보상금 100만원",
            location: "미국 뉴욕",
            experience_range: "경력 1년 이상",
        },
        Seed {
            number: 3,
            job_type: Job,
            org_name: "토트넘 홋스퍼",
            title: "아카데미 운영 코디네이터",
            thumbnail: None,
            deadline: (11, 15),
            is_active: true,
            created: (11, 5, 7, 40),
            views: 540,
            reward_label: "합격보상금 80만원",
            location: "영국 런던",
            experience_range: "경력 2년 이상",
        },
        Seed {
            number: 4,
            job_type: Activity,
            org_name: "국제올림픽위원회",
            title: "청년 스포츠 서밋 2025",
            thumbnail: Some("photo-1530549387789-4c1017266639"),
            deadline: (11, 20),
            is_active: true,
            created: (11, 1, 14, 0),
            views: 1630,
            reward_label: "참가비 전액 지원",
            location: "스위스 로잔",
            experience_range: "대학생 · 취준생",
        },
        Seed {
            number: 5,
            job_type: Activity,
            org_name: "대한축구협회",
            title: "스포츠 비즈니스 챌린지 7기",
            thumbnail: None,
            deadline: (11, 10),
            is_active: true,
            created: (11, 3, 5, 10),
            views: 720,
            reward_label: "우수팀 포상 50만원",
            location: "대한민국 서울",
            experience_range: "대학생 · 취준생",
        },
        Seed {
            number: 6,
            job_type: Job,
            org_name: "라리가 사무국",
            title: "파트너십 매니저",
            thumbnail: Some("photo-1579952363873-27f3bade9f55"),
            deadline: (11, 7),
            is_active: false,
            created: (10, 25, 11, 15),
            views: 980,
            reward_label: "합격보상금 100만원",
            location: "스페인 마드리드",
            experience_range: "경력 3년 이상",
        },
        Seed {
            number: 7,
            job_type: Activity,
            org_name: "NBA",
            title: "글로벌 캡틴 인턴십",
            thumbnail: Some("photo-1504457047772-27faf1c00561"),
            deadline: (12, 1),
            is_active: true,
            created: (10, 30, 19, 15),
            views: 2010,
            reward_label: "글로벌 장학금 제공",
            location: "미국 뉴욕",
            experience_range: "대학생 · 취준생",
        },
        Seed {
            number: 8,
            job_type: Job,
            org_name: "AC 밀란",
            title: "디지털 콘텐츠 프로듀서",
            thumbnail: Some("photo-1518091043644-c1d4457512c6"),
            deadline: (11, 18),
            is_active: true,
            created: (11, 4, 13, 55),
            views: 640,
            reward_label: "합격보상금 80만원",
            location: "이탈리아 밀라노",
            experience_range: "경력 3년 이상",
        },
        Seed {
            number: 9,
            job_type: Job,
            org_name: "부산 아이파크",
            title: "스카우트 어시스턴트",
            thumbnail: None,
            deadline: (11, 9),
            is_active: true,
            created: (11, 1, 8, 0),
            views: 430,
            reward_label: "합격보상금 60만원",
            location: "대한민국 부산",
            experience_range: "경력 2년 이상",
        },
        Seed {
            number: 10,
            job_type: Activity,
            org_name: "프리미어리그",
            title: "NextGen 스포츠 해커톤",
            thumbnail: Some("photo-1587280501635-68c4e5f52f77"),
            deadline: (11, 25),
            is_active: true,
            created: (11, 2, 7, 45),
            views: 1180,
            reward_label: "최우수상 200만원",
            location: "영국 런던",
            experience_range: "대학생 · 취준생",
        },
        Seed {
            number: 11,
            job_type: Activity,
            org_name: "FIFA",
            title: "여성 축구 글로벌 포럼",
            thumbnail: None,
            deadline: (11, 6),
            is_active: false,
            created: (10, 20, 16, 20),
            views: 910,
            reward_label: "글로벌 패스 제공",
            location: "카타르 도하",
            experience_range: "경력 3년 이상",
        },
        Seed {
            number: 12,
            job_type: Job,
            org_name: "도쿄 올림픽 조직위",
            title: "지속가능성 프로젝트 오피서",
            thumbnail: Some("photo-1529429617124-aee007643004"),
            deadline: (11, 28),
            is_active: true,
            created: (11, 3, 22, 0),
            views: 510,
            reward_label: "합격보상금 120만원",
            location: "일본 도쿄",
            experience_range: "경력 4년 이상",
        },
    ]
    .into_iter()
    .map(Seed::into_listing)
    .collect()
});

/// 전체 공고 (비활성 포함)
pub fn all() -> &'static [JobListing] {
    &CATALOG
}

/// 활성 공고 하나
pub fn find_active(job_id: &str) -> Option<&'static JobListing> {
    CATALOG.iter().find(|job| job.id == job_id && job.is_active)
}

/// 종류 필터 → 정렬 → 페이지 (1부터 시작, 0은 1로 취급)
pub fn page(
    job_type: JobType,
    sort: JobSort,
    page: usize,
    saved_ids: &[String],
    now: DateTime<Utc>,
) -> JobsPage {
    let mut matches: Vec<&JobListing> = CATALOG
        .iter()
        .filter(|job| job.is_active && job.job_type == job_type)
        .collect();

    match sort {
        JobSort::Latest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        JobSort::Deadline => matches.sort_by(|a, b| a.deadline_date.cmp(&b.deadline_date)),
        JobSort::Views => matches.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    let page = page.max(1);
    let total = matches.len();
    let start = (page - 1).saturating_mul(JOBS_PER_PAGE);

    let items = matches
        .into_iter()
        .skip(start)
        .take(JOBS_PER_PAGE)
        .map(|job| to_item(job, saved_ids, now))
        .collect();

    JobsPage {
        items,
        has_more: start.saturating_add(JOBS_PER_PAGE) < total,
        page,
        total,
    }
}

pub fn to_item(job: &JobListing, saved_ids: &[String], now: DateTime<Utc>) -> JobItem {
    let saved = saved_ids.iter().any(|id| id == &job.id);
    JobItem::from_listing(job, job.days_remaining(now), saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::jobs::job::BadgeTone;

    fn now() -> DateTime<Utc> {
        utc(11, 8, 0, 0)
    }

    #[test]
    fn test_catalog_has_twelve_fixed_entries() {
        let ids: Vec<&str> = all().iter().map(|job| job.id.as_str()).collect();

        assert_eq!(ids.len(), 12);
        assert_eq!(ids.first(), Some(&"job-001"));
        assert_eq!(ids.last(), Some(&"job-012"));
        assert_eq!(all()[2].thumbnail_url, None);
        assert_eq!(
            all()[0].thumbnail_url.as_deref(),
            Some("https://images.unsplash.com/photo-1543326727-cf6c39e8f84c?q=80&w=600")
        );
    }

    #[test]
    fn test_inactive_listings_are_excluded() {
        let jobs = page(JobType::Job, JobSort::Latest, 1, &[], now());
        let activities = page(JobType::Activity, JobSort::Latest, 1, &[], now());

        assert_eq!(jobs.total, 6);
        assert_eq!(activities.total, 4);
        assert!(jobs.items.iter().all(|item| item.id != "job-006"));
        assert!(activities.items.iter().all(|item| item.id != "job-011"));
        assert!(find_active("job-006").is_none());
    }

    #[test]
    fn test_sort_orders() {
        let ids = |sort| -> Vec<String> {
            page(JobType::Job, sort, 1, &[], now())
                .items
                .into_iter()
                .map(|item| item.id)
                .collect()
        };

        assert_eq!(
            ids(JobSort::Latest),
            vec!["job-003", "job-008", "job-001", "job-012", "job-002", "job-009"]
        );
        assert_eq!(
            ids(JobSort::Deadline),
            vec!["job-002", "job-009", "job-001", "job-003", "job-008", "job-012"]
        );
        assert_eq!(
            ids(JobSort::Views),
            vec!["job-001", "job-002", "job-008", "job-003", "job-012", "job-009"]
        );
    }

    #[test]
    fn test_pages_hold_eight_items() {
        let first = page(JobType::Job, JobSort::Latest, 1, &[], now());
        assert_eq!(first.items.len(), 6);
        assert!(!first.has_more);

        let beyond = page(JobType::Job, JobSort::Latest, 2, &[], now());
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.page, 2);

        let zero = page(JobType::Job, JobSort::Latest, 0, &[], now());
        assert_eq!(zero.page, 1);
    }

    #[test]
    fn test_items_carry_d_day_and_saved_flag() {
        let saved = vec!["job-002".to_string()];
        let result = page(JobType::Job, JobSort::Deadline, 1, &saved, now());

        let today = &result.items[0];
        assert_eq!(today.id, "job-002");
        assert_eq!(today.d_day, 0);
        assert_eq!(today.badge.tone, BadgeTone::Urgent);
        assert!(today.saved);

        let tomorrow = &result.items[1];
        assert_eq!(tomorrow.d_day, 1);
        assert_eq!(tomorrow.badge.label, "D-1");
        assert!(!tomorrow.saved);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(JobSort::parse(None).unwrap(), JobSort::Latest);
        assert_eq!(JobSort::parse(Some("Deadline")).unwrap(), JobSort::Deadline);
        assert!(JobSort::parse(Some("salary")).is_err());
    }
}
