//! 온보딩/설정 요청 DTO
//!
//! 온보딩 모달은 세 단계를 모두 마친 뒤 한 번에 저장합니다.
//! 세 항목 중 하나라도 비어 있으면 아무것도 저장하지 않습니다.
//!
//! ```json
//! {
//!   "career_stage": "취업 준비중",
//!   "interests": ["마케팅 & 팬 경험", "데이터 & 분석"],
//!   "usage_purpose": "커리어 준비에 도움"
//! }
//! ```

use serde::Deserialize;

use crate::core::errors::AppError;
use crate::domain::entities::users::onboarding::{CareerStage, Interest, UsagePurpose, Vocabulary};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingRequest {
    #[serde(default)]
    pub career_stage: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub usage_purpose: Option<String>,
}

/// 선택지 검증을 마친 온보딩 입력
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingAnswers {
    pub career_stage: CareerStage,
    pub interests: Vec<Interest>,
    pub usage_purpose: UsagePurpose,
}

impl OnboardingRequest {
    /// 세 항목이 모두 있고 선택지 안의 값인지 검증합니다.
    ///
    /// 중복된 관심 분야는 하나로 합칩니다.
    pub fn parse(&self) -> Result<OnboardingAnswers, AppError> {
        let stage = self
            .career_stage
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("현재 상황을 선택해주세요.".to_string()))?;

        if self.interests.is_empty() {
            return Err(AppError::ValidationError("관심 분야를 하나 이상 선택해주세요.".to_string()));
        }

        let purpose = self
            .usage_purpose
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("이용 목적을 선택해주세요.".to_string()))?;

        let career_stage = CareerStage::from_label(stage)
            .ok_or_else(|| invalid_choice("현재 상황", stage))?;

        let mut interests = Vec::with_capacity(self.interests.len());
        for raw in &self.interests {
            let interest = Interest::from_label(raw).ok_or_else(|| invalid_choice("관심 분야", raw))?;
            if !interests.contains(&interest) {
                interests.push(interest);
            }
        }

        let usage_purpose = UsagePurpose::from_label(purpose)
            .ok_or_else(|| invalid_choice("이용 목적", purpose))?;

        Ok(OnboardingAnswers {
            career_stage,
            interests,
            usage_purpose,
        })
    }
}

fn invalid_choice(field: &str, value: &str) -> AppError {
    AppError::ValidationError(format!("{} 값이 올바르지 않습니다: {}", field, value))
}

/// 알림 설정 변경
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesRequest {
    pub notifications: Option<bool>,
    pub email_marketing: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> OnboardingRequest {
        OnboardingRequest {
            career_stage: Some("대학생".to_string()),
            interests: vec!["데이터 & 분석".to_string(), "데이터 & 분석".to_string()],
            usage_purpose: Some("산업 트렌드 학습".to_string()),
        }
    }

    #[test]
    fn test_complete_answers_are_parsed() {
        let answers = complete().parse().unwrap();

        assert_eq!(answers.career_stage, CareerStage::Student);
        assert_eq!(answers.interests, vec![Interest::DataAnalytics]);
        assert_eq!(answers.usage_purpose, UsagePurpose::IndustryTrends);
    }

    #[test]
    fn test_partial_answers_are_rejected() {
        let mut request = complete();
        request.interests.clear();
        assert!(matches!(request.parse(), Err(AppError::ValidationError(_))));

        let mut request = complete();
        request.usage_purpose = None;
        assert!(matches!(request.parse(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_values_outside_vocabulary_are_rejected() {
        let mut request = complete();
        request.career_stage = Some("고등학생".to_string());

        let err = request.parse().unwrap_err();
        assert!(err.message().contains("고등학생"));
    }
}
