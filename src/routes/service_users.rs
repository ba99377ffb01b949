use crate::{
    errors::{AppError, AuthError},
    repositories::service_users,
    routes::auth,
    state::AppState,
    structs::{
        action_result::ActionResult,
        auth::CurrentStaff,
        service_users::{ServiceUser, ServiceUserQuery},
    },
};
use axum::{
    extract::{Extension, Query, State},
    middleware,
    routing::get,
    Router,
};

pub fn new(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_service_users))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ))
}

/// 取利用者清單,範圍固定在登入職員自己的事業所
pub async fn get_service_users(
    State(state): State<AppState>,
    Extension(current_staff): Extension<CurrentStaff>,
    Query(query): Query<ServiceUserQuery>,
) -> Result<ActionResult<Vec<ServiceUser>>, AppError> {
    let office_id = resolve_office_scope(query.office_id, current_staff.office_id)?;

    let result = service_users::get_service_users(&state, office_id).await?;

    Ok(ActionResult::ok(result))
}

/// 事業所是資料可見範圍的邊界:指定別的事業所一律拒絕
pub fn resolve_office_scope(
    requested: Option<uuid::Uuid>,
    current: uuid::Uuid,
) -> Result<uuid::Uuid, AppError> {
    match requested {
        Some(office_id) if office_id != current => {
            Err(AppError::AuthError(AuthError::Forbidden))
        }
        _ => Ok(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use uuid::Uuid;

    #[test]
    fn defaults_to_own_office() {
        let office = Uuid::new_v4();
        assert_eq!(resolve_office_scope(None, office).unwrap(), office);
        assert_eq!(resolve_office_scope(Some(office), office).unwrap(), office);
    }

    #[test]
    fn foreign_office_is_rejected() {
        let err = resolve_office_scope(Some(Uuid::new_v4()), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::AuthError(AuthError::Forbidden)));
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }
}
