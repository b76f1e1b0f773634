pub mod login_user;
