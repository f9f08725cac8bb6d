//! The submission state machine.
//!
//! ```text
//! Idle -> request_submit -> [precondition error] -> Idle (no network call)
//!                        -> AwaitingConfirmation
//! AwaitingConfirmation -> cancel_confirmation -> Idle
//!                      -> confirm -> Submitting
//! Submitting -> complete(Accepted) -> Idle (cart, selection, comments reset)
//!            -> complete(Failed)   -> Idle (error surfaced, state preserved)
//! ```
//!
//! Decision and application are split so the machine stays pure: `confirm`
//! returns the [`SubmissionRequest`] to send, `complete` applies the result.
//! The `Submitting` phase doubles as the in-flight guard: a second submit
//! while one is outstanding is ignored, not queued.

use thiserror::Error;

use fieldsales_cart::{Cart, CartStore};
use fieldsales_core::DocEntry;
use fieldsales_customers::CustomerSelection;
use fieldsales_storage::SnapshotStore;

use crate::payload::{SubmissionRequest, build_submission};

/// Shown when the remote API fails without a usable message of its own.
pub const GENERIC_SUBMIT_ERROR: &str = "The order could not be processed. Please try again.";

/// Where a submission attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    AwaitingConfirmation,
    Submitting,
}

/// Client-side problems detected before any network call. Never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("no customer selected")]
    MissingCustomer,
    #[error("no delivery address selected")]
    MissingAddress,
    #[error("the cart is empty")]
    EmptyCart,
    #[error("editing an order without a document id")]
    MissingDocEntry,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    /// A submission is already outstanding; this attempt is ignored.
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("nothing is awaiting confirmation")]
    NotAwaitingConfirmation,
}

/// What came back from the remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Accepted { doc_entry: DocEntry },
    Failed { message: String },
}

/// Error from an [`OrderGateway`]; carries the server-provided message when
/// one was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub message: Option<String>,
}

impl GatewayError {
    pub fn user_message(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_SUBMIT_ERROR)
    }
}

/// The one outbound seam of the checkout flow. Implemented by the HTTP
/// client; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait OrderGateway {
    async fn submit(&self, request: &SubmissionRequest) -> Result<DocEntry, GatewayError>;
}

/// The checkout orchestrator.
#[derive(Debug, Default)]
pub struct Checkout {
    phase: CheckoutPhase,
    comments: String,
    last_error: Option<String>,
    last_doc_entry: Option<DocEntry>,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    /// The message to surface for the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Document id returned by the most recent successful submission.
    pub fn last_doc_entry(&self) -> Option<DocEntry> {
        self.last_doc_entry
    }

    /// The user asked to submit. Validates preconditions; on success the
    /// confirmation dialog is owed to the user (`AwaitingConfirmation`).
    pub fn request_submit(
        &mut self,
        cart: &Cart,
        selection: &CustomerSelection,
    ) -> Result<(), CheckoutError> {
        if self.phase == CheckoutPhase::Submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }
        if let Err(err) = validate(cart, selection) {
            self.last_error = Some(err.to_string());
            self.phase = CheckoutPhase::Idle;
            return Err(err.into());
        }
        self.last_error = None;
        self.phase = CheckoutPhase::AwaitingConfirmation;
        Ok(())
    }

    /// The user dismissed the confirmation dialog.
    pub fn cancel_confirmation(&mut self) {
        if self.phase == CheckoutPhase::AwaitingConfirmation {
            self.phase = CheckoutPhase::Idle;
        }
    }

    /// The user confirmed. Revalidates (the drawer may have changed state
    /// while the dialog was open), assembles the payload, and enters
    /// `Submitting` — from here on further attempts are ignored until
    /// [`complete`](Self::complete) is called.
    pub fn confirm(
        &mut self,
        cart: &Cart,
        selection: &CustomerSelection,
    ) -> Result<SubmissionRequest, CheckoutError> {
        match self.phase {
            CheckoutPhase::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutPhase::Idle => return Err(CheckoutError::NotAwaitingConfirmation),
            CheckoutPhase::AwaitingConfirmation => {}
        }

        match validate(cart, selection) {
            Ok(()) => {}
            Err(err) => {
                self.last_error = Some(err.to_string());
                self.phase = CheckoutPhase::Idle;
                return Err(err.into());
            }
        }

        // validate() guarantees customer and address are present.
        let customer = selection.customer().cloned().unwrap_or_else(|| {
            unreachable!("validated selection lost its customer")
        });
        let address = selection.address().cloned().unwrap_or_else(|| {
            unreachable!("validated selection lost its address")
        });
        let doc_entry_for_edit = cart.edit_mode().then(|| cart.doc_entry()).flatten();

        let request =
            build_submission(cart, &customer, &address, &self.comments, doc_entry_for_edit);
        self.phase = CheckoutPhase::Submitting;
        tracing::info!(
            update = request.is_update(),
            lines = request.payload().lines.len(),
            "order submission confirmed"
        );
        Ok(request)
    }

    /// Apply the result of the in-flight submission. If the submission is no
    /// longer active (the drawer was torn down), the result is discarded.
    ///
    /// Success resets cart, customer selection, and comments together —
    /// partial reset is not a valid terminal state. Failure preserves all
    /// state for a manual retry.
    pub fn complete<S: SnapshotStore<Cart>>(
        &mut self,
        store: &mut CartStore<S>,
        selection: &mut CustomerSelection,
        result: SubmissionResult,
    ) {
        if self.phase != CheckoutPhase::Submitting {
            tracing::debug!("submission result arrived after state was abandoned; discarding");
            return;
        }
        match result {
            SubmissionResult::Accepted { doc_entry } => {
                store.clear();
                selection.clear();
                self.comments.clear();
                self.last_error = None;
                self.last_doc_entry = Some(doc_entry);
                tracing::info!(doc_entry = %doc_entry, "order accepted by the ERP");
            }
            SubmissionResult::Failed { message } => {
                tracing::warn!(error = %message, "order submission failed; state preserved");
                self.last_error = Some(message);
            }
        }
        self.phase = CheckoutPhase::Idle;
    }

    /// Abandon an in-progress edit: staged changes are discarded and the
    /// cart returns to the empty/new-order state. No network call.
    pub fn cancel_editing<S: SnapshotStore<Cart>>(&mut self, store: &mut CartStore<S>) {
        store.clear();
        self.comments.clear();
        self.last_error = None;
        self.phase = CheckoutPhase::Idle;
    }
}

fn validate(cart: &Cart, selection: &CustomerSelection) -> Result<(), PreconditionError> {
    if selection.customer().is_none() {
        return Err(PreconditionError::MissingCustomer);
    }
    if selection.address().is_none() {
        return Err(PreconditionError::MissingAddress);
    }
    if cart.is_empty() {
        return Err(PreconditionError::EmptyCart);
    }
    if cart.edit_mode() && cart.doc_entry().is_none() {
        return Err(PreconditionError::MissingDocEntry);
    }
    Ok(())
}

/// Full-cycle error for [`submit_order`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    /// The remote API rejected or failed the submission; the message is
    /// already user-facing.
    #[error("{0}")]
    Remote(String),
}

/// Drive one confirmed submission through the gateway and apply the result.
pub async fn submit_order<S, G>(
    checkout: &mut Checkout,
    store: &mut CartStore<S>,
    selection: &mut CustomerSelection,
    gateway: &G,
) -> Result<DocEntry, SubmitError>
where
    S: SnapshotStore<Cart>,
    G: OrderGateway,
{
    let request = checkout.confirm(store.cart(), selection)?;
    match gateway.submit(&request).await {
        Ok(doc_entry) => {
            checkout.complete(store, selection, SubmissionResult::Accepted { doc_entry });
            Ok(doc_entry)
        }
        Err(err) => {
            let message = err.user_message().to_string();
            checkout.complete(
                store,
                selection,
                SubmissionResult::Failed {
                    message: message.clone(),
                },
            );
            Err(SubmitError::Remote(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsales_cart::CartLine;
    use fieldsales_customers::{Customer, CustomerAddress};
    use fieldsales_storage::InMemoryStore;

    fn cart_line(item_code: &str, quantity: i64) -> CartLine {
        CartLine {
            item_code: item_code.into(),
            item_name: format!("Item {item_code}"),
            bar_code: item_code.into(),
            quantity,
            price_list: "100".parse().unwrap(),
            unit_price: "90".parse().unwrap(),
            tax_code: "ISV15".into(),
        }
    }

    fn full_selection() -> CustomerSelection {
        let mut selection = CustomerSelection::new();
        selection.select_customer(Customer {
            card_code: "C0205".into(),
            card_name: "Comercial La Ceiba".into(),
            federal_tax_id: None,
            price_list_num: 1,
        });
        selection.select_address(CustomerAddress {
            row_num: 0,
            address_name: "ENTREGA 1".into(),
            address_type: None,
            street: None,
            country: None,
            state: None,
            state_name: None,
            city_name: None,
            latitude: None,
            longitude: None,
        });
        selection
    }

    fn store_with_line() -> CartStore<InMemoryStore<Cart>> {
        let mut store = CartStore::open(InMemoryStore::new());
        store.add_line(cart_line("100234", 5));
        store
    }

    #[test]
    fn missing_customer_is_a_precondition_error() {
        let mut checkout = Checkout::new();
        let store = store_with_line();
        let err = checkout
            .request_submit(store.cart(), &CustomerSelection::new())
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Precondition(PreconditionError::MissingCustomer)
        );
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert!(checkout.last_error().is_some());
    }

    #[test]
    fn missing_address_is_a_precondition_error() {
        let mut checkout = Checkout::new();
        let store = store_with_line();
        let mut selection = CustomerSelection::new();
        selection.select_customer(Customer {
            card_code: "C0205".into(),
            card_name: "x".into(),
            federal_tax_id: None,
            price_list_num: 1,
        });
        let err = checkout.request_submit(store.cart(), &selection).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Precondition(PreconditionError::MissingAddress)
        );
    }

    #[test]
    fn empty_cart_is_a_precondition_error() {
        let mut checkout = Checkout::new();
        let store = CartStore::open(InMemoryStore::<Cart>::new());
        let err = checkout
            .request_submit(store.cart(), &full_selection())
            .unwrap_err();
        assert_eq!(err, CheckoutError::Precondition(PreconditionError::EmptyCart));
    }

    #[test]
    fn cancel_confirmation_returns_to_idle() {
        let mut checkout = Checkout::new();
        let store = store_with_line();
        let selection = full_selection();
        checkout.request_submit(store.cart(), &selection).unwrap();
        assert_eq!(checkout.phase(), CheckoutPhase::AwaitingConfirmation);
        checkout.cancel_confirmation();
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        // The cart is untouched by a cancelled confirmation.
        assert_eq!(store.cart().line_count(), 1);
    }

    #[test]
    fn confirm_builds_a_create_request_with_the_draft_token() {
        let mut checkout = Checkout::new();
        let store = store_with_line();
        let selection = full_selection();
        checkout.request_submit(store.cart(), &selection).unwrap();
        let request = checkout.confirm(store.cart(), &selection).unwrap();

        assert!(!request.is_update());
        let payload = request.payload();
        assert_eq!(payload.request_id, store.cart().request_id());
        assert!(payload.request_id.is_some());
        assert_eq!(payload.card_code, "C0205");
        assert_eq!(payload.pay_to_code, "ENTREGA 1");
        assert_eq!(payload.lines.len(), 1);
        assert_eq!(checkout.phase(), CheckoutPhase::Submitting);
    }

    #[test]
    fn edit_mode_builds_an_update_without_a_token() {
        let mut checkout = Checkout::new();
        let mut store = CartStore::open(InMemoryStore::<Cart>::new());
        store.begin_edit(DocEntry::new(500), vec![cart_line("100234", 2)]);
        store.update_quantity("100234", 3, "90".parse().unwrap());
        let selection = full_selection();

        checkout.request_submit(store.cart(), &selection).unwrap();
        let request = checkout.confirm(store.cart(), &selection).unwrap();
        match &request {
            SubmissionRequest::Update { doc_entry, payload } => {
                assert_eq!(*doc_entry, DocEntry::new(500));
                assert!(payload.request_id.is_none());
                assert_eq!(payload.lines[0].quantity, 3);
            }
            SubmissionRequest::Create { .. } => panic!("expected an update request"),
        }
    }

    #[test]
    fn in_flight_guard_ignores_a_second_attempt() {
        let mut checkout = Checkout::new();
        let store = store_with_line();
        let selection = full_selection();

        checkout.request_submit(store.cart(), &selection).unwrap();
        let _request = checkout.confirm(store.cart(), &selection).unwrap();

        // While the first submission is outstanding, both entry points are
        // ignored; no second request is ever produced.
        assert_eq!(
            checkout.request_submit(store.cart(), &selection),
            Err(CheckoutError::SubmissionInFlight)
        );
        assert_eq!(
            checkout.confirm(store.cart(), &selection).unwrap_err(),
            CheckoutError::SubmissionInFlight
        );
    }

    #[test]
    fn success_resets_cart_selection_and_comments_together() {
        let mut checkout = Checkout::new();
        let mut store = store_with_line();
        let mut selection = full_selection();
        checkout.set_comments("entregar por la mañana");

        checkout.request_submit(store.cart(), &selection).unwrap();
        checkout.confirm(store.cart(), &selection).unwrap();
        checkout.complete(
            &mut store,
            &mut selection,
            SubmissionResult::Accepted {
                doc_entry: DocEntry::new(3439),
            },
        );

        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert_eq!(checkout.last_doc_entry(), Some(DocEntry::new(3439)));
        assert!(store.cart().is_empty());
        assert!(!store.cart().edit_mode());
        assert!(selection.customer().is_none());
        assert!(selection.address().is_none());
        assert!(checkout.comments().is_empty());
    }

    #[test]
    fn failure_preserves_state_for_retry() {
        let mut checkout = Checkout::new();
        let mut store = store_with_line();
        let mut selection = full_selection();

        checkout.request_submit(store.cart(), &selection).unwrap();
        checkout.confirm(store.cart(), &selection).unwrap();
        checkout.complete(
            &mut store,
            &mut selection,
            SubmissionResult::Failed {
                message: "Stock agotado".into(),
            },
        );

        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert_eq!(checkout.last_error(), Some("Stock agotado"));
        assert_eq!(store.cart().line_count(), 1);
        assert!(selection.customer().is_some());

        // And the retry path is open again.
        assert!(checkout.request_submit(store.cart(), &selection).is_ok());
    }

    #[test]
    fn late_result_after_abandonment_is_discarded() {
        let mut checkout = Checkout::new();
        let mut store = store_with_line();
        let mut selection = full_selection();

        // Result arrives while nothing is submitting (drawer torn down).
        checkout.complete(
            &mut store,
            &mut selection,
            SubmissionResult::Accepted {
                doc_entry: DocEntry::new(1),
            },
        );
        assert!(checkout.last_doc_entry().is_none());
        assert_eq!(store.cart().line_count(), 1);
    }

    #[test]
    fn cancel_editing_discards_without_network() {
        let mut checkout = Checkout::new();
        let mut store = CartStore::open(InMemoryStore::<Cart>::new());
        store.begin_edit(DocEntry::new(500), vec![cart_line("100234", 2)]);
        checkout.set_comments("editado");

        checkout.cancel_editing(&mut store);
        assert!(store.cart().is_empty());
        assert!(!store.cart().edit_mode());
        assert!(store.cart().doc_entry().is_none());
        assert!(checkout.comments().is_empty());
    }
}
