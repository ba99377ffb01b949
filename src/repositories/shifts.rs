use crate::{
    state::AppState,
    structs::{
        basic_schedules::BasicSchedule,
        shifts::{NewShift, Shift, STATUS_CANCELLED, STATUS_SCHEDULED},
    },
};
use chrono::NaiveDate;
use sqlx::Error;
use uuid::Uuid;

/// 取區間內的班,經由利用者 join 限定在單一事業所
pub async fn get_shifts_in_range(
    state: &AppState,
    office_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<Shift>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                s.id, s.service_user_id, s.staff_id, s.date, s.start_time,
                s.end_time, s.service_type_id, s.status, s.cancel_reason,
                s.cancel_category, s.basic_schedule_id
            FROM
                shifts s
            JOIN
                service_users su ON su.id = s.service_user_id
            WHERE
                su.office_id = $1
                AND s.date BETWEEN $2 AND $3
            ORDER BY
                s.date, s.start_time;
        "#,
    )
    .bind(office_id)
    .bind(from)
    .bind(to)
    .fetch_all(state.get_pool())
    .await
}

/// 新增單次的班;帶 cancel_shift_id 時在同一個交易裡把原班改成取消
pub async fn create_one_off(state: &AppState, new_shift: &NewShift) -> Result<Shift, Error> {
    let mut tx = state.get_pool().begin().await?;

    if let Some(cancel_id) = new_shift.cancel_shift_id {
        let cancelled = sqlx::query(
            r#"
                UPDATE shifts
                SET status = $1, cancel_reason = $2, cancel_category = $3
                WHERE id = $4;
            "#,
        )
        .bind(STATUS_CANCELLED)
        .bind(&new_shift.cancel_reason)
        .bind(&new_shift.cancel_category)
        .bind(cancel_id)
        .execute(&mut *tx)
        .await?;

        if cancelled.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
    }

    let created: Shift = sqlx::query_as(
        r#"
            INSERT INTO shifts (
                id, service_user_id, staff_id, date, start_time, end_time,
                service_type_id, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, service_user_id, staff_id, date, start_time, end_time,
                service_type_id, status, cancel_reason, cancel_category,
                basic_schedule_id;
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_shift.service_user_id)
    .bind(new_shift.staff_id)
    .bind(new_shift.date)
    .bind(new_shift.start_time)
    .bind(new_shift.end_time)
    .bind(new_shift.service_type_id)
    .bind(STATUS_SCHEDULED)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(created)
}

/// 由基本排班範本長出一筆指定日期的班
pub async fn insert_from_template(
    state: &AppState,
    template: &BasicSchedule,
    date: NaiveDate,
) -> Result<(), Error> {
    sqlx::query(
        r#"
            INSERT INTO shifts (
                id, service_user_id, staff_id, date, start_time, end_time,
                service_type_id, status, basic_schedule_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9);
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(template.service_user_id)
    .bind(template.staff_id)
    .bind(date)
    .bind(template.start_time)
    .bind(template.end_time)
    .bind(template.service_type_id)
    .bind(STATUS_SCHEDULED)
    .bind(template.id)
    .execute(state.get_pool())
    .await?;

    Ok(())
}

/// 一週內已經由範本長出來的 (範本 id, 日期),產生時用來跳過重複
pub async fn template_dates_in_range(
    state: &AppState,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<(Uuid, NaiveDate)>, Error> {
    sqlx::query_as(
        r#"
            SELECT basic_schedule_id, date
            FROM shifts
            WHERE basic_schedule_id IS NOT NULL
              AND date BETWEEN $1 AND $2;
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(state.get_pool())
    .await
}

/// 職員請假:把區間內這位職員還排程中的班改成未指派
pub async fn unassign_staff_in_range(
    state: &AppState,
    staff_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<u64, Error> {
    let result = sqlx::query(
        r#"
            UPDATE shifts
            SET staff_id = NULL
            WHERE staff_id = $1
              AND status = $2
              AND date BETWEEN $3 AND $4;
        "#,
    )
    .bind(staff_id)
    .bind(STATUS_SCHEDULED)
    .bind(from)
    .bind(to)
    .execute(state.get_pool())
    .await?;

    Ok(result.rows_affected())
}

/// grid view 的服務種類名字對照
pub async fn get_service_type_names(state: &AppState) -> Result<Vec<(Uuid, String)>, Error> {
    sqlx::query_as(
        r#"
            SELECT id, name FROM service_types;
        "#,
    )
    .fetch_all(state.get_pool())
    .await
}
