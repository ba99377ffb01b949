//! 週表/當日時間軸的純轉換:shift 記錄加名字對照表組成顯示列,
//! 再從顯示列導出職員欄位跟 grid entry。不碰資料庫。

use crate::grid;
use crate::structs::shifts::{
    GridEntry, GridView, Shift, ShiftDisplayRow, TimeOfDay, UNKNOWN_CLIENT, UNKNOWN_STAFF,
};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// 未指派欄位的保留 key
pub const UNASSIGNED_KEY: &str = "__unassigned__";
pub const UNASSIGNED_LABEL: &str = "未指派";

/// 當日時間軸的一筆 entry
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodayTimelineItem {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub client_name: String,
    pub service_type_name: String,
    pub staff_name: Option<String>,
    pub is_unassigned: bool,
}

/// grid view 的一個直欄
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaffColumn {
    pub key: String,
    pub label: String,
    pub is_unassigned: bool,
}

/// shift 記錄配上 id→名字 對照表,組成顯示列。輸出順序跟輸入一致。
pub fn to_display_rows(
    shifts: &[Shift],
    client_names: &HashMap<Uuid, String>,
    staff_names: &HashMap<Uuid, String>,
) -> Vec<ShiftDisplayRow> {
    shifts
        .iter()
        .map(|shift| {
            let staff_name = shift.staff_id.map(|id| {
                staff_names
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_STAFF.to_string())
            });

            ShiftDisplayRow {
                id: shift.id,
                date: shift.date,
                start_time: shift.start_time.into(),
                end_time: shift.end_time.into(),
                client_name: client_names
                    .get(&shift.service_user_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_CLIENT.to_string()),
                service_type_id: shift.service_type_id,
                staff_id: shift.staff_id,
                staff_name,
                status: shift.status.clone(),
                is_unassigned: shift.staff_id.is_none(),
                cancel_reason: shift.cancel_reason.clone(),
                cancel_category: shift.cancel_category.clone(),
            }
        })
        .collect()
}

/// 顯示列轉成時間軸 entry
pub fn to_timeline_items(
    rows: &[ShiftDisplayRow],
    service_type_names: &HashMap<Uuid, String>,
) -> Vec<TodayTimelineItem> {
    rows.iter()
        .map(|row| TodayTimelineItem {
            start_time: row.start_time,
            end_time: row.end_time,
            client_name: row.client_name.clone(),
            service_type_name: service_type_names
                .get(&row.service_type_id)
                .cloned()
                .unwrap_or_default(),
            staff_name: row.staff_name.clone(),
            is_unassigned: row.is_unassigned,
        })
        .collect()
}

/// 依出現順序列出職員欄位,有未指派的 entry 時最後補一欄未指派。
///
/// 已知限制:欄位以顯示名稱當 key,同名職員會被併成同一欄
/// (輸入型別沒有帶穩定的職員 id)。
pub fn build_columns(items: &[TodayTimelineItem]) -> Vec<StaffColumn> {
    let mut names: Vec<String> = Vec::new();
    let mut has_unassigned = false;

    for item in items {
        match &item.staff_name {
            Some(name) if !item.is_unassigned && !name.is_empty() => {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
            _ => has_unassigned = true,
        }
    }

    let mut columns: Vec<StaffColumn> = names
        .into_iter()
        .map(|name| StaffColumn {
            key: name.clone(),
            label: name,
            is_unassigned: false,
        })
        .collect();

    if has_unassigned {
        columns.push(StaffColumn {
            key: UNASSIGNED_KEY.to_string(),
            label: UNASSIGNED_LABEL.to_string(),
            is_unassigned: true,
        });
    }

    columns
}

/// 組出 grid view 回應:格線標籤、職員欄位、定位好的 entry
pub fn build_grid_view(
    rows: &[ShiftDisplayRow],
    service_type_names: &HashMap<Uuid, String>,
) -> GridView {
    let items = to_timeline_items(rows, service_type_names);
    let columns = build_columns(&items);

    let entries = items
        .iter()
        .map(|item| {
            let start = grid::grid_minutes(item.start_time.hour, item.start_time.minute);
            let end = grid::grid_minutes(item.end_time.hour, item.end_time.minute);

            let column_key = match &item.staff_name {
                Some(name) if !item.is_unassigned => name.clone(),
                _ => UNASSIGNED_KEY.to_string(),
            };

            GridEntry {
                column_key,
                top_px: grid::entry_top(start),
                height_px: grid::entry_height(start, end),
                client_name: item.client_name.clone(),
                service_type_name: item.service_type_name.clone(),
                start_time: item.start_time,
                end_time: item.end_time,
            }
        })
        .collect();

    GridView {
        slots: grid::time_slots(),
        columns,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn item(staff_name: Option<&str>, is_unassigned: bool) -> TodayTimelineItem {
        TodayTimelineItem {
            start_time: TimeOfDay { hour: 9, minute: 0 },
            end_time: TimeOfDay {
                hour: 10,
                minute: 0,
            },
            client_name: "佐藤".to_string(),
            service_type_name: "身体介護".to_string(),
            staff_name: staff_name.map(ToString::to_string),
            is_unassigned,
        }
    }

    fn shift(staff_id: Option<Uuid>) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            service_user_id: Uuid::new_v4(),
            staff_id,
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            service_type_id: Uuid::new_v4(),
            status: "scheduled".to_string(),
            cancel_reason: None,
            cancel_category: None,
            basic_schedule_id: None,
        }
    }

    #[test]
    fn columns_dedupe_by_first_seen_order() {
        let items = vec![
            item(Some("山田"), false),
            item(None, true),
            item(Some("山田"), false),
        ];

        let columns = build_columns(&items);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].key, "山田");
        assert!(!columns[0].is_unassigned);
        assert_eq!(columns[1].key, UNASSIGNED_KEY);
        assert!(columns[1].is_unassigned);
    }

    #[test]
    fn unassigned_column_is_always_last() {
        let items = vec![
            item(None, true),
            item(Some("山田"), false),
            item(Some("鈴木"), false),
        ];

        let columns = build_columns(&items);

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].key, "山田");
        assert_eq!(columns[1].key, "鈴木");
        assert_eq!(columns[2].key, UNASSIGNED_KEY);
        assert!(columns[2].is_unassigned);
    }

    #[test]
    fn missing_staff_name_counts_as_unassigned() {
        let items = vec![item(None, false)];

        let columns = build_columns(&items);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].key, UNASSIGNED_KEY);
    }

    #[test]
    fn no_items_means_no_columns() {
        assert!(build_columns(&[]).is_empty());
    }

    #[test]
    fn display_row_for_unassigned_shift() {
        let shifts = vec![shift(None)];
        let mut client_names = HashMap::new();
        client_names.insert(shifts[0].service_user_id, "佐藤".to_string());

        let rows = to_display_rows(&shifts, &client_names, &HashMap::new());

        assert!(rows[0].is_unassigned);
        assert_eq!(rows[0].staff_name, None);
        assert_eq!(rows[0].client_name, "佐藤");
        assert_eq!(rows[0].start_time, TimeOfDay { hour: 9, minute: 30 });
    }

    #[test]
    fn display_row_falls_back_on_missing_lookups() {
        let staff_id = Uuid::new_v4();
        let shifts = vec![shift(Some(staff_id))];

        let rows = to_display_rows(&shifts, &HashMap::new(), &HashMap::new());

        assert!(!rows[0].is_unassigned);
        assert_eq!(rows[0].staff_name.as_deref(), Some(UNKNOWN_STAFF));
        assert_eq!(rows[0].client_name, UNKNOWN_CLIENT);
    }

    #[test]
    fn display_rows_preserve_input_order() {
        let shifts = vec![shift(None), shift(Some(Uuid::new_v4())), shift(None)];

        let rows = to_display_rows(&shifts, &HashMap::new(), &HashMap::new());

        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let expected: Vec<_> = shifts.iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn grid_view_positions_entries() {
        let staff_id = Uuid::new_v4();
        let shifts = vec![shift(Some(staff_id))];
        let mut staff_names = HashMap::new();
        staff_names.insert(staff_id, "山田".to_string());

        let rows = to_display_rows(&shifts, &HashMap::new(), &staff_names);
        let view = build_grid_view(&rows, &HashMap::new());

        assert_eq!(view.slots.len(), 48);
        assert_eq!(view.columns.len(), 1);
        assert_eq!(view.entries.len(), 1);
        // 09:30 是 06:00 起第 210 分鐘
        assert_eq!(view.entries[0].top_px, 210.0 * 0.8);
        assert_eq!(view.entries[0].height_px, 90.0 * 0.8);
        assert_eq!(view.entries[0].column_key, "山田");
    }
}
