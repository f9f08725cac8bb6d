//! [`OrderGateway`] implementation: the checkout state machine's one
//! outbound seam, backed by the quotation endpoints.

use fieldsales_checkout::{GatewayError, OrderGateway, SubmissionRequest};
use fieldsales_core::DocEntry;

use crate::error::ApiError;
use crate::http::ApiClient;

impl OrderGateway for ApiClient {
    async fn submit(&self, request: &SubmissionRequest) -> Result<DocEntry, GatewayError> {
        let result = match request {
            SubmissionRequest::Create { payload } => self.create_order(payload).await,
            SubmissionRequest::Update { doc_entry, payload } => {
                self.update_order(*doc_entry, payload).await
            }
        };
        result.map_err(|err| GatewayError {
            // Only server-authored text is surfaced; transport failures get
            // the checkout layer's generic message.
            message: match err {
                ApiError::Remote {
                    message: Some(message),
                    ..
                } => Some(message),
                _ => None,
            },
        })
    }
}
