use crate::{
    state::AppState,
    structs::staffs::{DbStaff, Staff},
};
use sqlx::Error;
use uuid::Uuid;

pub async fn get_staffs(state: &AppState) -> Result<Vec<Staff>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id, name, email, role, office_id
            FROM
                staffs
            ORDER BY
                name;
        "#,
    )
    .fetch_all(state.get_pool())
    .await
}

pub async fn check_email_exists(state: &AppState, email: &str) -> Result<DbStaff, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id, name, email, password, role, office_id
            FROM
                staffs
            WHERE
                email = $1
            LIMIT
                1;
        "#,
    )
    .bind(email)
    .fetch_one(state.get_pool())
    .await
}

pub async fn get_staff_by_id(state: &AppState, id: Uuid) -> Result<Option<Staff>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id, name, email, role, office_id
            FROM
                staffs
            WHERE
                id = $1;
        "#,
    )
    .bind(id)
    .fetch_optional(state.get_pool())
    .await
}
