pub mod client;
pub mod dto;
pub mod errors;
pub mod gateway;
pub mod store;
