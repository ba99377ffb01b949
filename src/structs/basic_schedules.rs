use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 基本排班:每週固定的服務範本,weekday 0 = 週一
#[derive(Serialize, sqlx::FromRow)]
pub struct BasicSchedule {
    pub id: Uuid,
    pub service_user_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub service_type_id: Uuid,
}

#[derive(Deserialize)]
pub struct NewBasicSchedule {
    pub service_user_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub service_type_id: Uuid,
}
