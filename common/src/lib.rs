pub mod machikoro;
pub mod messages;

pub use machikoro::*;
