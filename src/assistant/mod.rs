pub mod engine;
pub mod matcher;
pub mod message;
pub mod persona;
pub mod templates;

pub use engine::{Assistant, PendingReply};
pub use message::Message;
pub use persona::Persona;
