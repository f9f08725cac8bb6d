//! The authenticated user's session.

use fieldsales_core::SalesPersonCode;

use crate::error::ApiError;

/// Bearer token plus the sales-employee identity the API scopes data by.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
    sales_person_code: SalesPersonCode,
    full_name: String,
}

impl Session {
    pub fn authenticated(
        token: impl Into<String>,
        sales_person_code: SalesPersonCode,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            sales_person_code,
            full_name: full_name.into(),
        }
    }

    /// A session with no token. Every API call fails fast with
    /// [`ApiError::MissingToken`] until a real session replaces it.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            sales_person_code: SalesPersonCode::new(0),
            full_name: String::new(),
        }
    }

    pub fn sales_person_code(&self) -> SalesPersonCode {
        self.sales_person_code
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Install a fresh login.
    pub fn set_auth(
        &mut self,
        token: impl Into<String>,
        sales_person_code: SalesPersonCode,
        full_name: impl Into<String>,
    ) {
        self.token = Some(token.into());
        self.sales_person_code = sales_person_code;
        self.full_name = full_name.into();
    }

    /// Drop the token; subsequent calls fail with [`ApiError::MissingToken`].
    pub fn log_out(&mut self) {
        self.token = None;
    }

    pub(crate) fn bearer(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_has_no_bearer() {
        assert!(matches!(
            Session::anonymous().bearer(),
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn log_out_drops_the_token() {
        let mut session = Session::authenticated("t0ken", SalesPersonCode::new(14), "Ana López");
        session.log_out();
        assert!(matches!(session.bearer(), Err(ApiError::MissingToken)));
        session.set_auth("fresh", SalesPersonCode::new(14), "Ana López");
        assert_eq!(session.bearer().unwrap(), "fresh");
    }

    #[test]
    fn authenticated_session_exposes_its_token() {
        let session = Session::authenticated("t0ken", SalesPersonCode::new(14), "Ana López");
        assert_eq!(session.bearer().unwrap(), "t0ken");
        assert_eq!(session.sales_person_code(), SalesPersonCode::new(14));
    }
}
