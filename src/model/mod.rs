pub mod progress;
pub mod question;
pub mod summary;
