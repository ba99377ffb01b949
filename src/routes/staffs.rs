use crate::{
    errors::AppError,
    repositories::{shifts, staffs},
    routes::auth,
    state::AppState,
    structs::{
        action_result::ActionResult,
        staffs::{AbsenceRequest, AbsenceResponse, Staff},
    },
};
use axum::{
    extract::{Json, Path, State},
    middleware,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

/// 請假區間最長 90 天,跟前端日期選擇器的上限一致
const MAX_ABSENCE_DAYS: i64 = 90;

pub fn new(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_staffs))
        .route("/{id}/absences", post(create_absence))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ))
}

/// 取職員清單
pub async fn get_staffs(
    State(state): State<AppState>,
) -> Result<ActionResult<Vec<Staff>>, AppError> {
    let result = staffs::get_staffs(&state).await?;

    Ok(ActionResult::ok(result))
}

/// 職員請假:把區間內的班改成未指派,回傳動到幾筆
pub async fn create_absence(
    State(state): State<AppState>,
    Path(staff_id): Path<Uuid>,
    Json(absence): Json<AbsenceRequest>,
) -> Result<ActionResult<AbsenceResponse>, AppError> {
    if absence.to < absence.from {
        return Err(AppError::Validation(
            "to must not be before from".to_string(),
        ));
    }

    if (absence.to - absence.from).num_days() > MAX_ABSENCE_DAYS {
        return Err(AppError::Validation(format!(
            "absence range must be within {} days",
            MAX_ABSENCE_DAYS
        )));
    }

    if staffs::get_staff_by_id(&state, staff_id).await?.is_none() {
        return Err(AppError::NotFound("staff"));
    }

    let unassigned_count =
        shifts::unassign_staff_in_range(&state, staff_id, absence.from, absence.to).await?;

    Ok(ActionResult::ok(AbsenceResponse { unassigned_count }))
}
