//! Domain ports for the waitlist boundary.
//!
//! [`WaitlistCommand`] is the driving port inbound adapters call;
//! [`ContactRegistry`] is the driven port outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_registry;
mod waitlist_command;

#[cfg(test)]
pub use contact_registry::MockContactRegistry;
pub use contact_registry::{ContactRegistry, ContactRegistryError};
#[cfg(test)]
pub use waitlist_command::MockWaitlistCommand;
pub use waitlist_command::{JoinWaitlistRequest, WaitlistCommand, WaitlistOutcome};
