pub(super) fn log_level() -> String {
    String::from("info")
}

pub(super) fn admin_password() -> String {
    String::from("admin123")
}

pub(super) fn enable() -> bool {
    true
}

pub(super) fn session_timeout_secs() -> u64 {
    1800
}
