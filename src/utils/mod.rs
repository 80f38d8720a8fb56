pub mod auth;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod response;

pub use response::BaseResponse;
pub use response::ErrorResponse;

use chrono::{DateTime, NaiveDateTime, Utc};

/// DB에 UTC 기준 naive 값으로 저장된 시각을 응답용 UTC 시각으로 변환
pub fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(naive, Utc)
}
