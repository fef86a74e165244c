//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and external wire formats and
//! hold no business rules.
//!
//! - **resend**: Resend contacts API backing the contact registry port.

pub mod resend;
