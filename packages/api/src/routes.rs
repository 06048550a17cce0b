//! Axum routes for the registration API.
//!
//! [`api_router`] owns the full HTTP surface: `POST /api/register` and the
//! `/api/test-connection` probe. Handlers receive the shared [`Database`]
//! handle through router state, so the only way to build the surface is to
//! hand it an already-created connection.
//!
//! The register route parses the body by hand instead of using the `Json`
//! extractor: a missing header, malformed JSON, or mistyped field must all
//! collapse into the same `400 {"error": "Invalid input data."}` reply.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{any, post};
use axum::{Json, Router};
use mongodb::bson::{doc, Bson};
use mongodb::Database;

use crate::db::USERS_COLLECTION;
use crate::error::ApiError;
use crate::models::{RegisterRequest, RegisterSuccess, Registration, TestConnectionBody};
use crate::validate::validate_fields;
use crate::{REGISTER_PATH, TEST_CONNECTION_PATH};

/// Builds the API router around an existing database handle.
pub fn api_router(db: Database) -> Router {
    Router::new()
        .route(
            REGISTER_PATH,
            post(register).fallback(method_not_allowed),
        )
        .route(TEST_CONNECTION_PATH, any(test_connection))
        .with_state(db)
}

/// Validates a registration payload and stores it in the users collection.
///
/// The duplicate check matches the email exactly as submitted; trimming and
/// lowercasing happen when the document is built for insert. Nothing guards
/// the window between the check and the insert, so two racing submissions
/// with the same email can both land.
async fn register(
    State(db): State<Database>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegisterSuccess>), ApiError> {
    let payload: RegisterRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidInput)?;

    if !validate_fields(&payload) {
        return Err(ApiError::InvalidInput);
    }

    let users = db.collection::<Registration>(USERS_COLLECTION);

    let existing = users
        .find_one(doc! { "email": &payload.email })
        .await
        .map_err(ApiError::Database)?;
    if existing.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let record = Registration::new(&payload);
    let result = users.insert_one(&record).await.map_err(ApiError::Database)?;

    let user_id = match result.inserted_id {
        Bson::ObjectId(id) => id.to_hex(),
        _ => return Err(ApiError::InsertFailed),
    };

    tracing::info!(%user_id, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(RegisterSuccess {
            message: "User registered successfully.".to_string(),
            user_id,
        }),
    ))
}

/// Fallback for every non-POST method on the register route.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Lists collection names as a liveness probe for the database link.
async fn test_connection(
    State(db): State<Database>,
) -> Result<Json<TestConnectionBody>, ApiError> {
    let collections = db
        .list_collection_names()
        .await
        .map_err(ApiError::Connection)?;

    Ok(Json(TestConnectionBody {
        message: "Connected to MongoDB successfully!".to_string(),
        collections,
    }))
}
