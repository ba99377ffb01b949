use crate::{
    errors::AppError,
    repositories::basic_schedules,
    routes::auth,
    state::AppState,
    structs::{
        action_result::ActionResult,
        basic_schedules::{BasicSchedule, NewBasicSchedule},
    },
};
use axum::{
    extract::{Json, Path, State},
    middleware,
    routing::{delete, post},
    Router,
};
use uuid::Uuid;

pub fn new(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_basic_schedule))
        .route("/{id}", delete(delete_basic_schedule))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ))
}

/// 新增每週固定的基本排班
pub async fn create_basic_schedule(
    State(state): State<AppState>,
    Json(input): Json<NewBasicSchedule>,
) -> Result<ActionResult<BasicSchedule>, AppError> {
    if !(0..7).contains(&input.weekday) {
        return Err(AppError::Validation(
            "weekday must be between 0 and 6".to_string(),
        ));
    }

    if input.end_time <= input.start_time {
        return Err(AppError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }

    let created = basic_schedules::create(&state, &input).await?;

    Ok(ActionResult::ok(created))
}

pub async fn delete_basic_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ActionResult<Uuid>, AppError> {
    let deleted = basic_schedules::delete(&state, id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("basic schedule"));
    }

    Ok(ActionResult::ok(id))
}
