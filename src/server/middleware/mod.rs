//! Request guards composed at the start of handlers.

pub mod auth;

#[cfg(test)]
mod test;
