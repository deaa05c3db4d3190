pub mod blog;
pub mod enroll;
pub mod homepage;
pub mod quiz;
