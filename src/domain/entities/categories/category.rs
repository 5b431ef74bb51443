//! Category
//!
//! 별도 컬렉션 없이 게시된 아티클의 `categories` 필드에서 집계합니다.

use serde::{Deserialize, Serialize};

/// 카테고리 필터를 적용하지 않는 특수 값
pub const ALL_CATEGORIES: &str = "전체";

/// 저장소를 읽을 수 없거나 게시된 아티클이 없을 때 사용하는 기본 목록
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "전체",
    "스포츠산업",
    "마케팅 & 팬덤",
    "미디어 & 콘텐츠",
    "데이터 & 분석",
    "테크 & 혁신",
    "커리어 & 인재",
    "글로벌 트렌드",
    "기타",
];

const PALETTE: [&str; 9] = [
    "#111827", "#2563EB", "#DB2777", "#7C3AED", "#059669", "#0891B2", "#D97706", "#DC2626", "#6B7280",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
    pub order: u32,
    pub article_count: u64,
}

impl Category {
    /// 카테고리 필터 값이 "필터 없음" 인지
    pub fn is_unfiltered(category: Option<&str>) -> bool {
        match category.map(str::trim) {
            None | Some("") => true,
            Some(name) => name == ALL_CATEGORIES,
        }
    }

    pub fn fallback() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(order, name)| Category {
                name: name.to_string(),
                color: color_for(name, order),
                order: order as u32,
                article_count: 0,
            })
            .collect()
    }

    /// (카테고리, 게시 아티클 수) 집계 결과로 목록을 만듭니다.
    ///
    /// `전체` 가 항상 첫 번째이고, 기본 목록에 있는 이름은 기본 순서를,
    /// 나머지는 아티클 수 내림차순 뒤 이름순으로 이어 붙입니다.
    pub fn from_counts(counts: Vec<(String, u64)>, total_published: u64) -> Vec<Category> {
        let mut known: Vec<(usize, String, u64)> = Vec::new();
        let mut extra: Vec<(String, u64)> = Vec::new();

        for (name, count) in counts {
            if name.trim().is_empty() || name == ALL_CATEGORIES {
                continue;
            }
            match DEFAULT_CATEGORIES.iter().position(|c| *c == name) {
                Some(position) => known.push((position, name, count)),
                None => extra.push((name, count)),
            }
        }

        known.sort_by_key(|(position, _, _)| *position);
        extra.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut categories = vec![Category {
            name: ALL_CATEGORIES.to_string(),
            color: color_for(ALL_CATEGORIES, 0),
            order: 0,
            article_count: total_published,
        }];

        let ordered = known
            .into_iter()
            .map(|(_, name, count)| (name, count))
            .chain(extra);

        for (index, (name, count)) in ordered.enumerate() {
            let order = index + 1;
            categories.push(Category {
                color: color_for(&name, order),
                name,
                order: order as u32,
                article_count: count,
            });
        }

        categories
    }
}

fn color_for(name: &str, order: usize) -> String {
    let index = DEFAULT_CATEGORIES
        .iter()
        .position(|c| *c == name)
        .unwrap_or(order % PALETTE.len());
    PALETTE[index].to_string()
}
