use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";

#[derive(Serialize, sqlx::FromRow)]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub office_id: Uuid,
}

/// 登入驗證用,多帶 password hash,不對外序列化
#[derive(sqlx::FromRow)]
pub struct DbStaff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub office_id: Uuid,
}

/// 職員請假區間,區間內該職員的班會被改成未指派
#[derive(Deserialize)]
pub struct AbsenceRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Serialize)]
pub struct AbsenceResponse {
    pub unassigned_count: u64,
}
