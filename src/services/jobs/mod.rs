//! 채용/대외활동 공고 서비스 모듈

pub mod catalog;
pub mod job_service;

pub use job_service::*;
