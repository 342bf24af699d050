pub mod anchor;
pub mod hooks;
