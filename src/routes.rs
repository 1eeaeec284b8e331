pub mod cohort;
pub mod course_card;
pub mod health;
pub mod program;
