//! Checkout orchestration: turn the cart plus the customer selection into a
//! single remote create-or-update call, with confirmation, an in-flight
//! guard, and all-or-nothing state resets.
//!
//! The state machine itself is pure (decide, then apply); the only async
//! piece is the [`submit_order`] driver that runs a prepared submission
//! through an [`OrderGateway`].

pub mod orchestrator;
pub mod payload;
pub mod staging;
pub mod totals;

pub use orchestrator::{
    Checkout, CheckoutError, CheckoutPhase, GatewayError, OrderGateway, PreconditionError,
    SubmissionResult, SubmitError, submit_order,
};
pub use payload::{OrderPayload, OrderPayloadLine, SubmissionRequest};
pub use staging::{StageError, StagedLine, stage_line};
pub use totals::{OrderTotals, isv_rate, order_totals};
