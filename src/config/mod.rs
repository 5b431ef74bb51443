//! 환경 변수 기반 설정
//!
//! 각 설정 타입은 호출 시점에 환경 변수를 읽고, 없으면 개발용 기본값을 돌려줍니다.
//! 카카오 설정처럼 여러 값을 함께 검증해야 하는 경우만 스냅샷 구조체(`KakaoSettings`)를 둡니다.
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, MongoDB, Redis, Rate Limiting, CORS
//! - [`auth_config`] - 카카오 OAuth, JWT, 관리자 PIN, `AuthProvider`
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `HOST` / `PORT` | `127.0.0.1` / `8080` |
//! | `MONGODB_URI` / `DATABASE_NAME` | `mongodb://localhost:27017` / `sportsx_dev` |
//! | `REDIS_URL` | `redis://localhost:6379` |
//! | `JWT_SECRET` | 개발용 고정 키 (경고 로그) |
//! | `KAKAO_CLIENT_ID`, `KAKAO_REDIRECT_URI` | 없음 (로그인 시 500) |
//! | `ADMIN_PIN` | 개발용 기본 PIN (경고 로그) |
//! | `CORS_ALLOWED_ORIGINS` | 운영 외 환경에서 로컬 프론트엔드 주소 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
