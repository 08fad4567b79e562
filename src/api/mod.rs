pub mod payload;
pub mod server;
pub mod users;
