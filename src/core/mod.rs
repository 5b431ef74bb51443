//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 핵심 구성 요소입니다.
//!
//! - [`errors`] - `AppError` 통합 에러 타입과 저장소 에러 분류
//! - [`state`] - 서비스 조립 루트 (`AppState`)
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `ApplicationContext` | `AppState` (`web::Data` 로 공유) |
//! | `@Autowired` 생성자 주입 | `Arc<dyn Repository>` 생성자 주입 |
//! | `@ExceptionHandler` | `AppError::error_response()` |

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
