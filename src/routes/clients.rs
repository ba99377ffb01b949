use crate::{
    errors::{AppError, AuthError},
    repositories::{service_users, staffs},
    routes::auth,
    state::AppState,
    structs::{
        action_result::ActionResult,
        service_users::ServiceUser,
        staffs::{DbStaff, ROLE_ADMIN},
    },
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use uuid::Uuid;

/// 停用利用者。只有同一個事業所的 admin 可以操作:
/// 沒登入 401、權限或事業所不符 403、職員或利用者不存在 404。
pub async fn suspend(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<ActionResult<ServiceUser>, AppError> {
    let token = auth::extract_token(&headers)?;
    let token_data = auth::decode_jwt(token)?;

    let staff = staffs::check_email_exists(&state, &token_data.claims.email)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("staff"),
            e => AppError::from(e),
        })?;

    ensure_admin(&staff)?;

    let client = service_users::get_service_user_by_id(&state, id)
        .await?
        .ok_or(AppError::NotFound("client"))?;

    ensure_same_office(&staff, &client)?;

    let updated = service_users::suspend(&state, client.id).await?;

    Ok(ActionResult::ok(updated))
}

fn ensure_admin(staff: &DbStaff) -> Result<(), AppError> {
    if staff.role != ROLE_ADMIN {
        return Err(AppError::AuthError(AuthError::Forbidden));
    }

    Ok(())
}

fn ensure_same_office(staff: &DbStaff, client: &ServiceUser) -> Result<(), AppError> {
    if client.office_id != staff.office_id {
        return Err(AppError::AuthError(AuthError::Forbidden));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    fn staff(role: &str, office_id: Uuid) -> DbStaff {
        DbStaff {
            id: Uuid::new_v4(),
            name: "山田".to_string(),
            email: "yamada@example.com".to_string(),
            password: "hash".to_string(),
            role: role.to_string(),
            office_id,
        }
    }

    fn client(office_id: Uuid) -> ServiceUser {
        ServiceUser {
            id: Uuid::new_v4(),
            name: "佐藤".to_string(),
            office_id,
            is_suspended: false,
        }
    }

    #[test]
    fn admin_in_same_office_passes_both_checks() {
        let office = Uuid::new_v4();
        let staff = staff(ROLE_ADMIN, office);

        assert!(ensure_admin(&staff).is_ok());
        assert!(ensure_same_office(&staff, &client(office)).is_ok());
    }

    #[tokio::test]
    async fn non_admin_gets_403_forbidden_envelope() {
        let err = ensure_admin(&staff("caregiver", Uuid::new_v4())).unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Forbidden");
        assert_eq!(json["data"], serde_json::Value::Null);
    }

    #[test]
    fn different_office_is_forbidden() {
        let staff = staff(ROLE_ADMIN, Uuid::new_v4());
        let err = ensure_same_office(&staff, &client(Uuid::new_v4())).unwrap_err();

        assert!(matches!(err, AppError::AuthError(AuthError::Forbidden)));
    }
}
