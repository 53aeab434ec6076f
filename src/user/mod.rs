pub mod model;
pub mod repo;

pub use model::{NewUser, User, CREATE_TABLE_SQL};
pub use repo::{new_user_repo, PgUserRepository, UserRepository};
