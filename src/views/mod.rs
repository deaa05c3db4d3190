pub mod blog;
pub mod components;
pub mod courses;
pub mod enroll;
pub mod homepage;
pub mod layout;
pub mod quiz;
pub mod syllabus;

// Re-export commonly used functions from layout
pub use layout::{page, titled};
