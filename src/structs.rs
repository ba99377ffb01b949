pub mod action_result;
pub mod auth;
pub mod basic_schedules;
pub mod jobs;
pub mod service_users;
pub mod shifts;
pub mod staffs;
