pub mod add;
pub mod del;
pub mod edit;
pub mod export;
pub mod stats;
pub mod store;
pub mod validator;
