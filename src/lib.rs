pub mod api;
pub mod assignments;
pub mod compiler;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod fsutil;
pub mod keys;
pub mod modifier;
pub mod profiles;
pub mod store;
// cmd and reports are binary modules (declared in main.rs).
