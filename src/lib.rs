//! userdb - An in-memory user store served over HTTP

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod users;
