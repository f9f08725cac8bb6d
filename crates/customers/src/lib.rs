//! Customer (business partner) domain: wire types and the selection state
//! that parameterizes pricing and delivery.
//!
//! The cart never copies customer data; checkout reads the selection at
//! submission time.

pub mod customer;

pub use customer::{Customer, CustomerAddress, CustomerSelection};
