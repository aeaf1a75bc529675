//! Small stateless helpers shared by services.

pub mod password;
pub mod token;
