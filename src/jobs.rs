pub mod generate_shifts;
