use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::helpers::{ResolveAdminError, ResolveCurrentUserError};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A request carrying a syntactically valid, unexpired access token.
/// Only the token is checked here; whether the subject still exists is
/// decided by [`resolve_current_user_or_response`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// DB-backed identity: a token whose subject was deleted out from under it
/// is as unauthorized as no token at all.
pub async fn resolve_current_user_or_response(
    data: &web::Data<AppState>,
    auth: &AuthenticatedUser,
) -> Result<User, HttpResponse> {
    match data.current_user_resolver.resolve(auth.user_id).await {
        Ok(user) => Ok(user),

        Err(ResolveCurrentUserError::UnknownUser) => Err(ApiResponse::unauthorized(
            "UNKNOWN_USER",
            "Could not validate credentials",
        )),

        Err(ResolveCurrentUserError::RepositoryError(msg)) => {
            tracing::error!("Repository error resolving user {}: {}", auth.user_id, msg);
            Err(ApiResponse::internal_error())
        }
    }
}

pub async fn resolve_admin_or_response(
    data: &web::Data<AppState>,
    auth: &AuthenticatedUser,
) -> Result<User, HttpResponse> {
    match data.current_user_resolver.resolve_admin(auth.user_id).await {
        Ok(user) => Ok(user),

        Err(ResolveAdminError::UnknownUser) => Err(ApiResponse::unauthorized(
            "UNKNOWN_USER",
            "Could not validate credentials",
        )),

        Err(ResolveAdminError::NotAdmin) => Err(ApiResponse::forbidden(
            "ADMIN_REQUIRED",
            "Administrator privileges required",
        )),

        Err(ResolveAdminError::RepositoryError(msg)) => {
            tracing::error!(
                "Repository error resolving admin {}: {}",
                auth.user_id,
                msg
            );
            Err(ApiResponse::internal_error())
        }
    }
}
