pub mod constants;
pub mod question;
