//! Job Listing
//!
//! 채용 공고와 대외활동 공고입니다. 저장소 없이 프로세스 내 상수 목록으로 제공됩니다.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// 공고 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Job,
    Activity,
}

impl JobType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "job" => Some(JobType::Job),
            "activity" => Some(JobType::Activity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Job => "job",
            JobType::Activity => "activity",
        }
    }
}

/// 마감 배지 색상 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Warning,
    Urgent,
    Neutral,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl JobBadge {
    /// 남은 일수에 따른 배지
    ///
    /// | d_day | label | tone |
    /// |-------|-------|------|
    /// | < 0 | 마감 | neutral |
    /// | 0 | 오늘 마감 | urgent |
    /// | 1 ~ 3 | D-n | warning |
    /// | > 3 | D-n | default |
    pub fn for_days(d_day: i64) -> Self {
        match d_day {
            d if d < 0 => Self::new("마감", BadgeTone::Neutral),
            0 => Self::new("오늘 마감", BadgeTone::Urgent),
            d if d <= 3 => Self::new(&format!("D-{}", d), BadgeTone::Warning),
            d => Self::new(&format!("D-{}", d), BadgeTone::Default),
        }
    }

    fn new(label: &str, tone: BadgeTone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobListing {
    pub id: String,
    pub job_type: JobType,
    pub org_name: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub deadline_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub external_url: String,
    pub reward_label: String,
    pub location: String,
    pub experience_range: String,
}

/// 마감일 계산 기준 시간대 (KST)
pub fn service_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix())
}

impl JobListing {
    /// 오늘부터 마감일까지 남은 달력 일수 (KST 날짜 기준)
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let offset = service_offset();
        let deadline = self.deadline_date.with_timezone(&offset).date_naive();
        let today = now.with_timezone(&offset).date_naive();
        (deadline - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn listing(deadline: &str) -> JobListing {
        JobListing {
            id: "job-999".to_string(),
            job_type: JobType::Job,
            org_name: "테스트 구단".to_string(),
            title: "테스트 공고".to_string(),
            thumbnail_url: None,
            deadline_date: DateTime::parse_from_rfc3339(deadline).unwrap().with_timezone(&Utc),
            is_active: true,
            created_at: Utc::now(),
            views: 0,
            external_url: String::new(),
            reward_label: String::new(),
            location: String::new(),
            experience_range: String::new(),
        }
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(JobBadge::for_days(-1), JobBadge::new("마감", BadgeTone::Neutral));
        assert_eq!(JobBadge::for_days(0), JobBadge::new("오늘 마감", BadgeTone::Urgent));
        assert_eq!(JobBadge::for_days(3), JobBadge::new("D-3", BadgeTone::Warning));
        assert_eq!(JobBadge::for_days(4), JobBadge::new("D-4", BadgeTone::Default));
    }

    #[test]
    fn test_days_remaining_uses_calendar_days() {
        let job = listing("2025-11-12T09:00:00.000Z");

        let same_day = Utc.with_ymd_and_hms(2025, 11, 12, 1, 0, 0).unwrap();
        let late_evening_before = Utc.with_ymd_and_hms(2025, 11, 11, 14, 59, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 11, 14, 0, 0, 0).unwrap();

        assert_eq!(job.days_remaining(same_day), 0);
        assert_eq!(job.days_remaining(late_evening_before), 1);
        assert_eq!(job.days_remaining(after), -2);
    }

    #[test]
    fn test_job_type_parsing() {
        assert_eq!(JobType::from_str("Activity"), Some(JobType::Activity));
        assert_eq!(JobType::from_str("intern"), None);
        assert_eq!(serde_json::to_string(&JobType::Job).unwrap(), "\"job\"");
    }
}
