pub mod list_signups;
pub mod submit_signup;
