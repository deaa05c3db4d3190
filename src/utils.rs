use crate::names;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure_flag = if secure { " Secure;" } else { "" };
    format!(
        "{name}={value}; HttpOnly; Max-Age={};{secure_flag} Path=/; SameSite=Strict",
        names::QUIZ_SESSION_TTL_SECS
    )
}
