use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use super::AppState;
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{describe_errors, Car, CarInput, CarPatch};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route(
            "/:id",
            get(get_car)
                .put(replace_car)
                .patch(merge_car)
                .delete(delete_car),
        )
}

/// Every stored car, in no particular order.
async fn list_cars(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.repository.list_all().await)
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    state
        .repository
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::car_not_found(&id))
}

async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    // Reject malformed bodies, then field constraints
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|e| AppError::Validation(describe_errors(&e)))?;

    tracing::info!("{} Received create for {} {}", API_NAME, input.make, input.model);

    let car = state.repository.create(input).await;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn replace_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarInput>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    // Validate before the lookup so a bad body is 422 even for unknown ids
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|e| AppError::Validation(describe_errors(&e)))?;

    state
        .repository
        .replace(&id, input)
        .await
        .map(Json)
        .ok_or_else(|| AppError::car_not_found(&id))
}

async fn merge_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarPatch>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    // Only the fields present in the body are checked
    let Json(patch) = payload?;
    patch
        .validate()
        .map_err(|e| AppError::Validation(describe_errors(&e)))?;

    // An empty patch comes back as RepositoryError::EmptyUpdate
    state
        .repository
        .merge(&id, &patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::car_not_found(&id))
}

/// 204 with an empty body when a record was removed.
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.repository.delete(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::car_not_found(&id))
    }
}
