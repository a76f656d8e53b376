//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `Message`)
//! - `stage`: Processing stage (`Stage`)
//! - `event`: Events published on state changes (`SessionEvent`)
//! - `snapshot`: Read-only session view (`SessionSnapshot`)
//!
//! The state machine that drives these types lives in `shiori-interaction`.

mod event;
mod message;
mod snapshot;
mod stage;

pub use event::SessionEvent;
pub use message::{Message, MessageRole};
pub use snapshot::SessionSnapshot;
pub use stage::Stage;
