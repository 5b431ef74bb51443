//! 온보딩 선택지
//!
//! 저장소에는 화면에 표시되는 한국어 문구가 그대로 저장됩니다.

use serde::{Deserialize, Serialize};

/// 고정된 선택지 집합
pub trait Vocabulary: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|item| item.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|item| item.label()).collect()
    }
}

/// 커리어 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerStage {
    #[serde(rename = "대학생")]
    Student,
    #[serde(rename = "취업 준비중")]
    JobSeeker,
    #[serde(rename = "스포츠 관련 종사자")]
    IndustryProfessional,
    #[serde(rename = "기타")]
    Other,
}

impl Vocabulary for CareerStage {
    const ALL: &'static [Self] = &[
        CareerStage::Student,
        CareerStage::JobSeeker,
        CareerStage::IndustryProfessional,
        CareerStage::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            CareerStage::Student => "대학생",
            CareerStage::JobSeeker => "취업 준비중",
            CareerStage::IndustryProfessional => "스포츠 관련 종사자",
            CareerStage::Other => "기타",
        }
    }
}

/// 관심 분야 (복수 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "스포츠 산업 전반")]
    SportsIndustry,
    #[serde(rename = "마케팅 & 팬 경험")]
    MarketingFanExperience,
    #[serde(rename = "데이터 & 분석")]
    DataAnalytics,
    #[serde(rename = "미디어 & 콘텐츠")]
    MediaContent,
    #[serde(rename = "기타")]
    Other,
}

impl Vocabulary for Interest {
    const ALL: &'static [Self] = &[
        Interest::SportsIndustry,
        Interest::MarketingFanExperience,
        Interest::DataAnalytics,
        Interest::MediaContent,
        Interest::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            Interest::SportsIndustry => "스포츠 산업 전반",
            Interest::MarketingFanExperience => "마케팅 & 팬 경험",
            Interest::DataAnalytics => "데이터 & 분석",
            Interest::MediaContent => "미디어 & 콘텐츠",
            Interest::Other => "기타",
        }
    }
}

/// 서비스 이용 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsagePurpose {
    #[serde(rename = "커리어 준비에 도움")]
    CareerPreparation,
    #[serde(rename = "산업 트렌드 학습")]
    IndustryTrends,
    #[serde(rename = "재미·호기심")]
    Curiosity,
}

impl Vocabulary for UsagePurpose {
    const ALL: &'static [Self] = &[
        UsagePurpose::CareerPreparation,
        UsagePurpose::IndustryTrends,
        UsagePurpose::Curiosity,
    ];

    fn label(&self) -> &'static str {
        match self {
            UsagePurpose::CareerPreparation => "커리어 준비에 도움",
            UsagePurpose::IndustryTrends => "산업 트렌드 학습",
            UsagePurpose::Curiosity => "재미·호기심",
        }
    }
}
