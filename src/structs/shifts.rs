use crate::timeline::StaffColumn;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_CANCELLED: &str = "cancelled";

/// 查不到名字時的顯示字樣
pub const UNKNOWN_STAFF: &str = "unknown staff";
pub const UNKNOWN_CLIENT: &str = "unknown client";

/// 一筆具體日期的班(可能由基本排班產生,也可能是單次新增)
#[derive(Serialize, sqlx::FromRow)]
pub struct Shift {
    pub id: Uuid,
    pub service_user_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub service_type_id: Uuid,
    pub status: String,
    pub cancel_reason: Option<String>,
    pub cancel_category: Option<String>,
    pub basic_schedule_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

/// 週表 list view 用的顯示列,每次查詢重新組出來,不落地
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDisplayRow {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub client_name: String,
    pub service_type_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub staff_name: Option<String>,
    pub status: String,
    pub is_unassigned: bool,
    pub cancel_reason: Option<String>,
    pub cancel_category: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

#[derive(Deserialize)]
pub struct ShiftListQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub view: ViewMode,
}

/// 單次新增的班;帶 cancel_shift_id 時同一個交易裡取消原班(利用者改期)
#[derive(Deserialize)]
pub struct NewShift {
    pub service_user_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub service_type_id: Uuid,
    pub cancel_shift_id: Option<Uuid>,
    pub cancel_reason: Option<String>,
    pub cancel_category: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateWeekRequest {
    /// 必須是週一
    pub week_start: NaiveDate,
}

#[derive(Serialize)]
pub struct GenerateWeekResponse {
    pub created_count: u64,
}

/// grid view 的一格 entry,像素位置由 grid 模組換算
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridEntry {
    pub column_key: String,
    pub top_px: f32,
    pub height_px: f32,
    pub client_name: String,
    pub service_type_name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub slots: Vec<String>,
    pub columns: Vec<StaffColumn>,
    pub entries: Vec<GridEntry>,
}

/// list / grid 二選一的回應
#[derive(Serialize)]
#[serde(untagged)]
pub enum ShiftListResponse {
    List(Vec<ShiftDisplayRow>),
    Grid(GridView),
}
