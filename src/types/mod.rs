pub mod course;
pub mod notification;
pub mod user;
