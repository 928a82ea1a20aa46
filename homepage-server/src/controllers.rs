use axum::{
    async_trait,
    extract::{rejection::PathRejection, Extension, Form, FromRequest, Path, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use homepage_core::{
    AboutContent, Error, ErrorCode, ErrorResponse, ListMessagesResponse, SaveMessageRequest,
    SaveMessageResponse, STATUS_RETRIEVE_FAILED, STATUS_SAVE_FAILED,
};
use std::sync::Arc;

use crate::{store::StoreError, AppState};

/// Errore di un handler: diventa `{ error, status }` con HTTP 400.
#[derive(Debug)]
pub struct ApiError {
    pub status: &'static str,
    pub error: Error,
}

impl ApiError {
    fn retrieve(err: &StoreError) -> Self {
        Self { status: STATUS_RETRIEVE_FAILED, error: err.into() }
    }

    fn save(err: &StoreError) -> Self {
        Self { status: STATUS_SAVE_FAILED, error: err.into() }
    }

    /// Toglie i dettagli interni se la configurazione lo richiede.
    fn for_client(mut self, state: &AppState) -> Self {
        if !state.expose_error_details {
            self.error = self.error.redacted();
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.error, status: self.status.to_string() };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Handler per GET /api/about
pub async fn about() -> Json<AboutContent> {
    Json(AboutContent::page())
}

/// Handler per GET /messages
pub async fn list_messages(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ListMessagesResponse>, ApiError> {
    match state.store.find_all().await {
        Ok(messages) => Ok(Json(ListMessagesResponse::ok(messages))),
        Err(e) => {
            tracing::error!(error = %e, "failed to retrieve messages");
            Err(ApiError::retrieve(&e).for_client(&state))
        }
    }
}

/// Handler per GET /messages/:messageId
/// Un id sconosciuto restituisce una lista vuota, non un 404.
pub async fn get_message(
    Extension(state): Extension<Arc<AppState>>,
    message_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ListMessagesResponse>, ApiError> {
    // un id non decodificabile (es. UTF-8 non valido) è input malformato come un id non UUID
    let message_id = match message_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected message id");
            let err = ApiError {
                status: STATUS_RETRIEVE_FAILED,
                error: Error::new(ErrorCode::InvalidInput, rejection.body_text()),
            };
            return Err(err.for_client(&state));
        }
    };

    match state.store.find_by_id(&message_id).await {
        Ok(messages) => Ok(Json(ListMessagesResponse::ok(messages))),
        Err(e) => {
            tracing::error!(error = %e, message_id = %message_id, "failed to retrieve message");
            Err(ApiError::retrieve(&e).for_client(&state))
        }
    }
}

/// Handler per POST /messages/save
pub async fn save_message(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<SaveBody, ApiError>,
) -> Result<Json<SaveMessageResponse>, ApiError> {
    let SaveBody(req) = body.map_err(|e| e.for_client(&state))?;

    match state.store.insert(&req.name, &req.message).await {
        Ok(message) => {
            tracing::info!(message_id = %message.id, "saved message");
            Ok(Json(SaveMessageResponse::ok(message)))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save message");
            Err(ApiError::save(&e).for_client(&state))
        }
    }
}

/// Body di /messages/save: JSON oppure form url-encoded, scelto dal Content-Type.
pub struct SaveBody(pub SaveMessageRequest);

#[async_trait]
impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        let parsed = if is_form {
            Form::<SaveMessageRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<SaveMessageRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| rejection.body_text())
        };

        parsed.map(SaveBody).map_err(|reason| {
            tracing::warn!(%reason, "rejected save request body");
            ApiError {
                status: STATUS_SAVE_FAILED,
                error: Error::new(ErrorCode::InvalidInput, reason),
            }
        })
    }
}
