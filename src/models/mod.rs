pub mod channel;
pub mod visit;
