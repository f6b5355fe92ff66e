// HTTP handlers, one module per resource

pub mod assets;
pub mod auth;
pub mod payments;
pub mod teams;
pub mod users;
