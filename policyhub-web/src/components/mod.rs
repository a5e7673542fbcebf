pub mod field;
pub mod filter_bar;
pub mod notice;
pub mod page_layout;
pub mod pager;
pub mod policy_card;
