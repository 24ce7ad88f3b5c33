pub mod admin;
pub mod health;
pub mod root;
pub mod signup;
