//! # 채용 공고 서비스
//!
//! 상수 카탈로그 위에 호출자별 저장 상태를 얹습니다.
//!
//! - 로그인 사용자: 클라이언트 상태 목록 `jobs_saved_{user_id}` 에서 저장/해제를 토글합니다.
//! - 비로그인 사용자: `jobs_pending_save` 에 공고 ID를 예약하고 `login_required` 로 응답합니다.
//!   로그인 직후 예약이 한 번만 꺼내져 저장되고 안내 토스트가 반환됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use serde_json::Value;

use crate::caching::client_state::{keys, ClientStateStore};
use crate::core::errors::AppError;
use crate::domain::dto::jobs::{JobSaveResponse, JobSaveStatus, JobsPage, JobsQuery, SavedJobsResponse};
use crate::domain::entities::jobs::job::JobType;
use crate::services::analytics::{events, EventReporter};
use crate::services::jobs::catalog::{self, JobSort};

/// 저장 직후 보여줄 안내 문구
pub const SAVE_TOAST: &str = "커리어 비서가 공고 마감 3일 전에 알려드릴게요.";

pub struct JobService {
    client_state: Arc<dyn ClientStateStore>,
    events: Arc<dyn EventReporter>,
}

impl JobService {
    pub fn new(client_state: Arc<dyn ClientStateStore>, events: Arc<dyn EventReporter>) -> Self {
        Self { client_state, events }
    }

    /// 공고 목록 한 페이지. 종류 기본값은 `job`, 정렬 기본값은 `latest` 입니다.
    pub async fn list(
        &self,
        query: &JobsQuery,
        user_id: Option<&str>,
        client_id: &str,
        now: DateTime<Utc>,
    ) -> Result<JobsPage, AppError> {
        let job_type = match query.job_type.as_deref().map(str::trim) {
            None | Some("") => JobType::Job,
            Some(raw) => JobType::from_str(raw)
                .ok_or_else(|| AppError::ValidationError(format!("지원하지 않는 공고 종류입니다: {}", raw)))?,
        };
        let sort = JobSort::parse(query.sort.as_deref())?;

        let saved = self.saved_ids(user_id, client_id).await?;
        let page = catalog::page(job_type, sort, query.page.unwrap_or(1), &saved, now);

        if !page.items.is_empty() {
            self.events.record_event(
                events::JOBS_VIEWED,
                &[("type", job_type.as_str().to_string()), ("sort", sort.as_str().to_string())],
            );
        }
        Ok(page)
    }

    /// 저장 버튼
    pub async fn toggle_save(
        &self,
        user_id: Option<&str>,
        client_id: &str,
        job_id: &str,
    ) -> Result<JobSaveResponse, AppError> {
        let job = catalog::find_active(job_id)
            .ok_or_else(|| AppError::NotFound("공고를 찾을 수 없습니다.".to_string()))?;

        let Some(user_id) = user_id else {
            self.client_state
                .set_value(client_id, keys::JOBS_PENDING_SAVE, Value::from(job.id.as_str()))
                .await?;
            self.events.record_event(
                events::JOB_SAVED,
                &[("job_id", job.id.clone()), ("logged_in", "false".to_string())],
            );

            return Ok(JobSaveResponse {
                job_id: job.id.clone(),
                status: JobSaveStatus::LoginRequired,
                saved: false,
                toast: None,
            });
        };

        let key = keys::saved_jobs(user_id);
        let mut saved = self.client_state.get_list(client_id, &key).await?;

        let response = if saved.iter().any(|id| id == &job.id) {
            saved.retain(|id| id != &job.id);
            JobSaveResponse {
                job_id: job.id.clone(),
                status: JobSaveStatus::Unsaved,
                saved: false,
                toast: None,
            }
        } else {
            saved.push(job.id.clone());
            self.events.record_event(
                events::JOB_SAVED,
                &[("job_id", job.id.clone()), ("logged_in", "true".to_string())],
            );
            JobSaveResponse {
                job_id: job.id.clone(),
                status: JobSaveStatus::Saved,
                saved: true,
                toast: Some(SAVE_TOAST.to_string()),
            }
        };

        self.client_state.set_list(client_id, &key, &saved).await?;
        Ok(response)
    }

    /// 저장한 공고 목록 (저장한 순서)
    pub async fn saved(
        &self,
        user_id: &str,
        client_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SavedJobsResponse, AppError> {
        let saved = self.saved_ids(Some(user_id), client_id).await?;
        let items = saved
            .iter()
            .filter_map(|id| catalog::find_active(id))
            .map(|job| catalog::to_item(job, &saved, now))
            .collect();

        Ok(SavedJobsResponse { items })
    }

    /// 로그인 전 저장 예약을 계정에 반영합니다.
    ///
    /// 예약은 한 번만 꺼내집니다. 반영된 공고 ID와 안내 토스트를 반환합니다.
    pub async fn consume_pending(
        &self,
        user_id: &str,
        client_id: &str,
    ) -> Result<Option<(String, String)>, AppError> {
        let Some(job_id) = self
            .client_state
            .take_value(client_id, keys::JOBS_PENDING_SAVE)
            .await?
            .and_then(|value| value.as_str().map(str::to_string))
        else {
            return Ok(None);
        };

        let key = keys::saved_jobs(user_id);
        let mut saved = self.client_state.get_list(client_id, &key).await?;
        if !saved.contains(&job_id) {
            saved.push(job_id.clone());
            self.client_state.set_list(client_id, &key, &saved).await?;
        }

        info!("💾 로그인 전 공고 저장 반영: {} / {}", user_id, job_id);
        self.events.record_event(
            events::JOB_SAVED,
            &[("job_id", job_id.clone()), ("logged_in", "true".to_string())],
        );
        Ok(Some((job_id, SAVE_TOAST.to_string())))
    }

    async fn saved_ids(&self, user_id: Option<&str>, client_id: &str) -> Result<Vec<String>, AppError> {
        match user_id {
            Some(user_id) => self.client_state.get_list(client_id, &keys::saved_jobs(user_id)).await,
            None => Ok(Vec::new()),
        }
    }
}
