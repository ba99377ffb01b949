use crate::{services::shift_generation, state::AppState, structs::jobs::AppJob};
use async_trait::async_trait;
use chrono::Local;

/// 每週日晚上先把下週的班從基本排班長出來
#[derive(Clone)]
pub struct GenerateShiftsJob;

#[async_trait]
impl AppJob for GenerateShiftsJob {
    fn cron_expression(&self) -> &str {
        "0 0 18 * * Sun" // 每週日 18:00
    }

    async fn run(&self, state: AppState) {
        let today = Local::now().date_naive();
        let week_start = shift_generation::next_monday(today);

        match shift_generation::generate_week(&state, week_start).await {
            Ok(count) => {
                tracing::info!("weekly generation done, created {} shifts", count);
            }
            Err(e) => {
                tracing::error!("weekly generation failed: {}", e);
            }
        }
    }
}
