pub mod config;
pub mod countdown;
pub mod date;
pub mod hooks;
pub mod routes;
