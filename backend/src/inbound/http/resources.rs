//! Handler bodies shared by the user and task endpoints.
//!
//! The per-resource modules only add routing metadata and OpenAPI
//! annotations; everything else happens here, generic over the resource.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use futures_util::StreamExt;
use serde::Serialize;
use tracing::{debug, error};

use super::ApiResult;
use crate::domain::{Error, NaturalKeyResource, ResourceService};

/// Upper bound on accepted request bodies.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

const BAD_REQUEST: &str = "Bad request";

/// Serialise `value` into a JSON response with `status`.
///
/// # Errors
///
/// Returns an internal error when serialisation fails.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<HttpResponse> {
    let body = serde_json::to_vec(value).map_err(|err| {
        error!(error = %err, "response serialisation failed");
        Error::internal("Failed to create a response")
    })?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body))
}

/// Read the whole body and decode it into the resource's draft.
///
/// Transport failures, oversized bodies, and malformed JSON all become
/// `400 Bad request`.
pub async fn read_draft<R: NaturalKeyResource>(mut payload: web::Payload) -> ApiResult<R::Draft> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            debug!(error = %err, "request body could not be read");
            Error::invalid_request(BAD_REQUEST)
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            debug!(limit = MAX_BODY_BYTES, "request body too large");
            return Err(Error::invalid_request(BAD_REQUEST));
        }
        body.extend_from_slice(&chunk);
    }

    serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, resource = R::NOUN, "request body is not a valid draft");
        Error::invalid_request(BAD_REQUEST)
    })
}

/// `GET {base}`: 200 with a JSON array.
pub async fn list<R: NaturalKeyResource>(
    service: &ResourceService<R>,
) -> ApiResult<HttpResponse> {
    let records = service.list().await?;
    json_response(StatusCode::OK, &records)
}

/// `POST {base}`: 201 with a confirmation string.
pub async fn create<R: NaturalKeyResource>(
    service: &ResourceService<R>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let draft = read_draft::<R>(payload).await?;
    let message = service.create(draft).await?;
    json_response(StatusCode::CREATED, &message)
}

/// `GET {base}/{key}`: 200 with the record.
pub async fn get<R: NaturalKeyResource>(
    service: &ResourceService<R>,
    key: &str,
) -> ApiResult<HttpResponse> {
    let record = service.get(key).await?;
    json_response(StatusCode::OK, &record)
}

/// `DELETE {base}/{key}`: 200 with a confirmation string.
pub async fn delete<R: NaturalKeyResource>(
    service: &ResourceService<R>,
    key: &str,
) -> ApiResult<HttpResponse> {
    let message = service.delete(key).await?;
    json_response(StatusCode::OK, &message)
}

/// `PUT {base}/{key}`: always 501.
pub fn update<R: NaturalKeyResource>(
    service: &ResourceService<R>,
    key: &str,
) -> ApiResult<HttpResponse> {
    let record = service.update(key)?;
    json_response(StatusCode::OK, &record)
}

/// Fallback for a matched path with an unsupported method.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("Method not allowed"))
}

/// Fallback for paths outside the route table.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Not found"))
}
