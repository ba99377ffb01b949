//! 時間軸 grid 換算:一天從 06:00 開始,跨夜到隔天 06:00,
//! 每 30 分鐘一格,共 48 格。

/// grid 起點 06:00(以分鐘表示)
pub const GRID_START_MINUTES: u32 = 6 * 60;
/// 一格 30 分鐘
pub const SLOT_MINUTES: u32 = 30;
/// 總格數
pub const SLOT_COUNT: u32 = 48;
/// 一分鐘對應的像素
pub const PX_PER_MINUTE: f32 = 0.8;
/// 一格的像素高度,也是 entry 的最小高度
pub const SLOT_PX: f32 = 24.0;
/// 整個 grid 的像素高度 (1440 * 0.8)
pub const GRID_PX: f32 = 1152.0;

/// 把時刻換算成「距離 06:00 幾分鐘」,跨夜時段 wrap 回 [0, 1440)
pub fn grid_minutes(hour: u32, minute: u32) -> u32 {
    let wall = (hour % 24) * 60 + minute % 60;
    (wall + 24 * 60 - GRID_START_MINUTES) % (24 * 60)
}

/// entry 的像素高度,至少一格高,長度為零也看得到
pub fn entry_height(start_minutes: u32, end_minutes: u32) -> f32 {
    let duration = end_minutes as i64 - start_minutes as i64;
    (duration as f32 * PX_PER_MINUTE).max(SLOT_PX)
}

/// entry 的像素起點
pub fn entry_top(start_minutes: u32) -> f32 {
    start_minutes as f32 * PX_PER_MINUTE
}

/// 48 個 "HH:MM" 格線標籤,從 06:00 開始每 30 分鐘一個
pub fn time_slots() -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| {
            let minutes = GRID_START_MINUTES + i * SLOT_MINUTES;
            format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_minutes_starts_at_six() {
        assert_eq!(grid_minutes(6, 0), 0);
        assert_eq!(grid_minutes(6, 30), 30);
        assert_eq!(grid_minutes(12, 0), 360);
    }

    #[test]
    fn grid_minutes_wraps_past_midnight() {
        assert_eq!(grid_minutes(0, 0), 18 * 60);
        assert_eq!(grid_minutes(5, 59), 24 * 60 - 1);
    }

    #[test]
    fn grid_minutes_stays_in_range_and_is_monotonic_from_six() {
        let mut prev = None;
        for offset in 0..24 * 60 {
            let wall = (GRID_START_MINUTES + offset) % (24 * 60);
            let value = grid_minutes(wall / 60, wall % 60);
            assert!(value < 24 * 60);
            if let Some(prev) = prev {
                assert!(value > prev);
            }
            prev = Some(value);
        }
    }

    #[test]
    fn entry_height_has_minimum_one_slot() {
        assert_eq!(entry_height(100, 100), SLOT_PX);
        assert_eq!(entry_height(100, 110), SLOT_PX);
        assert_eq!(entry_height(0, 60), 48.0);
    }

    #[test]
    fn time_slots_cover_whole_day() {
        let slots = time_slots();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots.first().unwrap(), "06:00");
        assert_eq!(slots.last().unwrap(), "05:30");
        assert!(slots.contains(&"00:00".to_string()));
    }

    #[test]
    fn consecutive_slots_differ_by_thirty_minutes() {
        let slots = time_slots();
        let to_minutes = |s: &String| {
            let (h, m) = s.split_once(':').unwrap();
            h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
        };
        for pair in slots.windows(2) {
            let a = to_minutes(&pair[0]);
            let b = to_minutes(&pair[1]);
            assert_eq!((b + 24 * 60 - a) % (24 * 60), 30);
        }
    }
}
