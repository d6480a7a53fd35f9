pub mod components;
pub mod context;
pub mod hooks;
pub mod pages;
