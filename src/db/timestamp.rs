//! 타임스탬프 정규화
//!
//! 엔티티의 `DateTime<Utc>` 필드를 BSON datetime 으로 저장하고,
//! 읽을 때는 과거 데이터에 섞여 있는 여러 표현을 모두 받아들입니다.
//!
//! | 저장된 값 | 해석 |
//! |-----------|------|
//! | BSON datetime | 그대로 사용 |
//! | RFC 3339 문자열 | `2025-11-04T02:30:00.000Z` |
//! | 정수/실수 | epoch 밀리초 |
//! | BSON timestamp | epoch 초 |
//! | `{ seconds, nanoseconds }` 문서 | 내보내기 도구가 남긴 타임스탬프 객체 |
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Entity {
//!     #[serde(with = "crate::db::timestamp")]
//!     created_at: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    bson::DateTime::from_millis(value.timestamp_millis()).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Bson::deserialize(deserializer)?;
    normalize(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("지원하지 않는 타임스탬프 형식입니다: {}", raw))
    })
}

/// 저장된 값 하나를 UTC 시각으로 변환합니다.
pub fn normalize(value: &Bson) -> Option<DateTime<Utc>> {
    match value {
        Bson::DateTime(dt) => DateTime::from_timestamp_millis(dt.timestamp_millis()),
        Bson::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        Bson::Int64(millis) => DateTime::from_timestamp_millis(*millis),
        Bson::Int32(millis) => DateTime::from_timestamp_millis(i64::from(*millis)),
        Bson::Double(millis) if millis.is_finite() => DateTime::from_timestamp_millis(*millis as i64),
        Bson::Timestamp(ts) => DateTime::from_timestamp(i64::from(ts.time), 0),
        Bson::Document(doc) => from_seconds_document(doc),
        _ => None,
    }
}

fn from_seconds_document(doc: &Document) -> Option<DateTime<Utc>> {
    let read = |key: &str| -> Option<i64> {
        match doc.get(key)? {
            Bson::Int64(v) => Some(*v),
            Bson::Int32(v) => Some(i64::from(*v)),
            Bson::Double(v) if v.is_finite() => Some(*v as i64),
            _ => None,
        }
    };

    let seconds = read("seconds").or_else(|| read("_seconds"))?;
    let nanos = read("nanoseconds").or_else(|| read("_nanoseconds")).unwrap_or(0);
    DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
}

/// `Option<DateTime<Utc>>` 필드용
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Bson>::deserialize(deserializer)? {
            None | Some(Bson::Null) => Ok(None),
            Some(raw) => normalize(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("지원하지 않는 타임스탬프 형식입니다: {}", raw))
            }),
        }
    }
}
