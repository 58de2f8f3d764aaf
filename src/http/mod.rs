pub mod admin;
pub mod health;
pub mod players;
pub mod routes;
