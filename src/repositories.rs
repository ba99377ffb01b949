pub mod basic_schedules;
pub mod service_users;
pub mod shifts;
pub mod staffs;
