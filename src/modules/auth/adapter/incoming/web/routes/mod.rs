mod login_user;
mod verify_token;

pub use login_user::*;
pub use verify_token::*;
