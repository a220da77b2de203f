pub mod movie;
pub mod tweet;
pub mod user;

pub use movie::*;
pub use tweet::*;
pub use user::*;
