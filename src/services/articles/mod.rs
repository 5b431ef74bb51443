//! 아티클 서비스 모듈

pub mod article_service;

pub use article_service::*;
