pub mod shift_generation;
