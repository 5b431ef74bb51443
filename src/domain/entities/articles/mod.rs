//! Articles Entity Module
//!
//! 아티클 문서와 부분 수정 타입을 정의합니다.

pub mod article;
