use crate::{
    errors::AppError,
    repositories::{service_users, shifts, staffs},
    routes::auth,
    services::shift_generation,
    state::AppState,
    structs::{
        action_result::ActionResult,
        auth::CurrentStaff,
        shifts::{
            GenerateWeekRequest, GenerateWeekResponse, NewShift, Shift, ShiftListQuery,
            ShiftListResponse, ViewMode,
        },
    },
    timeline,
};
use axum::{
    extract::{Extension, Json, Query, State},
    middleware,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use uuid::Uuid;

pub fn new(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_shifts).post(create_shift))
        .route("/generate", post(generate_week))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ))
}

/// 週表:shift、利用者、職員三個查詢並行打,全部成功才組資料。
/// 任何一個失敗就整個請求失敗,不做「當成空陣列」的降級。
pub async fn list_shifts(
    State(state): State<AppState>,
    Extension(current_staff): Extension<CurrentStaff>,
    Query(query): Query<ShiftListQuery>,
) -> Result<ActionResult<ShiftListResponse>, AppError> {
    if query.to < query.from {
        return Err(AppError::Validation("to must not be before from".to_string()));
    }

    let (shift_records, clients, staff_list) = tokio::try_join!(
        shifts::get_shifts_in_range(&state, current_staff.office_id, query.from, query.to),
        service_users::get_service_users(&state, current_staff.office_id),
        staffs::get_staffs(&state),
    )?;

    let client_names: HashMap<Uuid, String> =
        clients.into_iter().map(|c| (c.id, c.name)).collect();
    let staff_names: HashMap<Uuid, String> =
        staff_list.into_iter().map(|s| (s.id, s.name)).collect();

    let rows = timeline::to_display_rows(&shift_records, &client_names, &staff_names);

    let response = match query.view {
        ViewMode::List => ShiftListResponse::List(rows),
        ViewMode::Grid => {
            let service_type_names: HashMap<Uuid, String> =
                shifts::get_service_type_names(&state).await?.into_iter().collect();

            ShiftListResponse::Grid(timeline::build_grid_view(&rows, &service_type_names))
        }
    };

    Ok(ActionResult::ok(response))
}

/// 新增單次的班(利用者改期時帶 cancel_shift_id 一起取消原班)
pub async fn create_shift(
    State(state): State<AppState>,
    Json(new_shift): Json<NewShift>,
) -> Result<ActionResult<Shift>, AppError> {
    if new_shift.end_time <= new_shift.start_time {
        return Err(AppError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }

    let created = shifts::create_one_off(&state, &new_shift)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("shift"),
            e => AppError::from(e),
        })?;

    Ok(ActionResult::ok(created))
}

/// 手動長一週的班(排程 job 也走同一個 service)
pub async fn generate_week(
    State(state): State<AppState>,
    Json(request): Json<GenerateWeekRequest>,
) -> Result<ActionResult<GenerateWeekResponse>, AppError> {
    let created_count = shift_generation::generate_week(&state, request.week_start).await?;

    Ok(ActionResult::ok(GenerateWeekResponse { created_count }))
}
