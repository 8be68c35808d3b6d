pub mod client;
pub mod database;
mod record;
