pub mod models;

pub use models::{Name, Picture, QueryParams, ResponseInfo, User, UsersResponse};
