pub mod add;
pub mod check;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod session;
pub mod stats;
