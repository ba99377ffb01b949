use crate::{
    state::AppState,
    structs::basic_schedules::{BasicSchedule, NewBasicSchedule},
};
use sqlx::Error;
use uuid::Uuid;

pub async fn create(state: &AppState, input: &NewBasicSchedule) -> Result<BasicSchedule, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO basic_schedules (
                id, service_user_id, staff_id, weekday, start_time, end_time,
                service_type_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, service_user_id, staff_id, weekday, start_time, end_time,
                service_type_id;
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(input.service_user_id)
    .bind(input.staff_id)
    .bind(input.weekday)
    .bind(input.start_time)
    .bind(input.end_time)
    .bind(input.service_type_id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete(state: &AppState, id: Uuid) -> Result<u64, Error> {
    let result = sqlx::query("DELETE FROM basic_schedules WHERE id = $1;")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected())
}

/// 週次產生用:停用中的利用者不長班
pub async fn get_active(state: &AppState) -> Result<Vec<BasicSchedule>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                bs.id, bs.service_user_id, bs.staff_id, bs.weekday,
                bs.start_time, bs.end_time, bs.service_type_id
            FROM basic_schedules bs
            JOIN service_users su ON su.id = bs.service_user_id
            WHERE NOT su.is_suspended
            ORDER BY bs.weekday, bs.start_time;
        "#,
    )
    .fetch_all(state.get_pool())
    .await
}
