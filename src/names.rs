use crate::catalog::Level;

pub const COURSES_URL: &str = "/courses";
pub const SYLLABUS_URL: &str = "/syllabus";
pub const QUIZ_URL: &str = "/quiz";
pub const BLOG_URL: &str = "/blog";
pub const QUIZ_START_URL: &str = "/quiz/start";
pub const QUIZ_ANSWER_URL: &str = "/quiz/answer";
pub const QUIZ_RETRY_URL: &str = "/quiz/retry";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";
// Cookie Max-Age and store eviction use the same clock.
pub const QUIZ_SESSION_TTL_SECS: u64 = 3600;

pub fn quiz_open_url(level: Level) -> String {
    format!("/quiz/open/{}", level.as_str())
}

pub fn quiz_advance_url(level: Level) -> String {
    format!("/quiz/advance/{}", level.as_str())
}

pub fn syllabus_url(level: Level) -> String {
    format!("/syllabus/{}", level.as_str())
}

pub fn blog_post_url(id: u32) -> String {
    format!("/blog/{id}")
}

pub fn enroll_url(course_id: &str) -> String {
    format!("/enroll/{course_id}")
}

pub fn enroll_details_url(course_id: &str) -> String {
    format!("/enroll/{course_id}/details")
}

pub fn enroll_commit_url(course_id: &str) -> String {
    format!("/enroll/{course_id}/commit")
}

// Product rules. The pass threshold and the expert fallback are business
// decisions, kept as named constants so the quiz logic stays reusable.
pub const PASS_THRESHOLD_PERCENT: u32 = 80;
pub const PHONE_DIGITS: usize = 10;
pub const TRANSACTION_ID_PREFIX: &str = "PGM";
pub const TRANSACTION_ID_LEN: usize = 8;

pub const DEFAULT_WHATSAPP_ADMIN: &str = "918019753301";
