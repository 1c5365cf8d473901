pub mod email;
pub mod job;
