use crate::{
    errors::AppError,
    repositories::{basic_schedules, shifts},
    state::AppState,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::HashSet;

/// 由基本排班長出一週的班。week_start 必須是週一;
/// 同一個範本同一天已經有班就跳過,重跑不會長出重複的班。
pub async fn generate_week(state: &AppState, week_start: NaiveDate) -> Result<u64, AppError> {
    if week_start.weekday() != Weekday::Mon {
        return Err(AppError::Validation(
            "week_start must be a Monday".to_string(),
        ));
    }

    let week_end = week_start + Days::new(6);

    let templates = basic_schedules::get_active(state).await?;
    let existing: HashSet<(uuid::Uuid, NaiveDate)> =
        shifts::template_dates_in_range(state, week_start, week_end)
            .await?
            .into_iter()
            .collect();

    let mut created = 0u64;

    for template in &templates {
        let Some(date) = template_date(week_start, template.weekday) else {
            tracing::warn!(
                "basic schedule {} has weekday {} outside 0..7, skipped",
                template.id,
                template.weekday
            );
            continue;
        };

        if existing.contains(&(template.id, date)) {
            continue;
        }

        shifts::insert_from_template(state, template, date).await?;
        created += 1;
    }

    tracing::info!(
        "generated {} shifts for week starting {}",
        created,
        week_start
    );

    Ok(created)
}

/// 範本的 weekday 轉成該週的日期,0 = 週一;範圍外的值不產生日期
fn template_date(week_start: NaiveDate, weekday: i16) -> Option<NaiveDate> {
    if !(0..7).contains(&weekday) {
        return None;
    }

    Some(week_start + Days::new(weekday as u64))
}

/// 下一個週一(今天是週一就是下週一)
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - today.weekday().num_days_from_monday() as u64;
    today + Days::new(days_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_date_rejects_out_of_range_weekdays() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        assert_eq!(template_date(monday, 0), Some(monday));
        assert_eq!(
            template_date(monday, 6),
            NaiveDate::from_ymd_opt(2025, 6, 8)
        );
        assert_eq!(template_date(monday, -1), None);
        assert_eq!(template_date(monday, 7), None);
    }

    #[test]
    fn next_monday_from_each_weekday() {
        // 2025-06-02 是週一
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(
            next_monday(monday),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );

        let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        assert_eq!(
            next_monday(sunday),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );

        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(
            next_monday(wednesday),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );
    }
}
