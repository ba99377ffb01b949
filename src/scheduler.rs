use crate::{jobs::generate_shifts::GenerateShiftsJob, state::AppState, structs::jobs::AppJob};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

pub async fn initialize_scheduler(state: AppState) -> Arc<Mutex<JobScheduler>> {
    let scheduler = Arc::new(Mutex::new(JobScheduler::new().await.unwrap()));

    let scheduler_clone = scheduler.clone();

    tokio::spawn(async move {
        let jobs: Vec<Arc<dyn AppJob + Send + Sync>> = vec![Arc::new(GenerateShiftsJob)];

        for app_job in jobs {
            if !app_job.enabled() {
                continue;
            }

            let job_state = state.clone();
            let job_handle = app_job.clone();

            let job = Job::new_async(app_job.cron_expression(), move |_uuid, _l| {
                let job_state = job_state.clone();
                let job_handle = job_handle.clone();
                Box::pin(async move {
                    job_handle.run(job_state).await;
                })
            })
            .unwrap();

            scheduler_clone.lock().await.add(job).await.unwrap();
        }

        scheduler_clone.lock().await.start().await.unwrap();
    });

    scheduler
}
