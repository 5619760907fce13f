pub mod message;
pub mod store;

pub use message::MessageKey;
pub use store::{MessageStore, StoreError};
