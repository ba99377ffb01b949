use crate::{state::AppState, structs::service_users::ServiceUser};
use sqlx::Error;
use uuid::Uuid;

/// 取同一個事業所的利用者清單
pub async fn get_service_users(state: &AppState, office_id: Uuid) -> Result<Vec<ServiceUser>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id, name, office_id, is_suspended
            FROM
                service_users
            WHERE
                office_id = $1
            ORDER BY
                name;
        "#,
    )
    .bind(office_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_service_user_by_id(
    state: &AppState,
    id: Uuid,
) -> Result<Option<ServiceUser>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id, name, office_id, is_suspended
            FROM
                service_users
            WHERE
                id = $1;
        "#,
    )
    .bind(id)
    .fetch_optional(state.get_pool())
    .await
}

/// 把利用者標成停用,回傳更新後的資料
pub async fn suspend(state: &AppState, id: Uuid) -> Result<ServiceUser, Error> {
    sqlx::query_as(
        r#"
            UPDATE service_users
            SET is_suspended = TRUE
            WHERE id = $1
            RETURNING id, name, office_id, is_suspended;
        "#,
    )
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}
