pub mod add_policy;
pub mod login;
pub mod not_found;
pub mod policy_detail;
pub mod policy_list;
pub mod signup;
