//! Federated cloud credentials and the fixed login used to obtain them.

pub mod credentials;
pub mod login;
