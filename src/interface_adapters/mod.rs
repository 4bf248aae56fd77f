pub mod client;
pub mod navigation;
pub mod presenter;
