use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 요청별 추적 ID (request extensions에 저장)
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청 ID를 부여하고 요청 단위 span 안에서 핸들러를 실행합니다.
///
/// 클라이언트가 보낸 `x-request-id`가 있으면 재사용하고, 응답 헤더로 되돌려줍니다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if status.is_server_error() {
            warn!(
                duration_ms = duration_ms,
                status = status.as_u16(),
                "request failed"
            );
        } else {
            info!(
                duration_ms = duration_ms,
                status = status.as_u16(),
                "request completed"
            );
        }

        response.headers_mut().insert(
            REQUEST_ID_HEADER.clone(),
            HeaderValue::from_str(&request_id)
                .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
        );
        response
    }
    .instrument(span)
    .await
}
