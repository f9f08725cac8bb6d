//! `fieldsales-core` — shared primitives for the field-sales client.
//!
//! Identifier newtypes, money rounding, and pagination helpers. This crate
//! contains **pure** building blocks only (no IO, no HTTP, no storage).

pub mod id;
pub mod money;
pub mod page;

pub use id::{DocEntry, DocNum, InvalidId, RequestId, SalesPersonCode};
pub use money::round_money;
pub use page::{PageCursor, Paginated};
