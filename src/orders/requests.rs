//! Request DTOs for placing melon orders.

use serde::Deserialize;

use crate::error::OrderError;

use super::models::{CategoryKind, MelonOrder, OrderCategory};

/// Request to place a melon order
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderRequest {
    pub species: String,
    pub quantity: u32,
    pub kind: CategoryKind,
    /// Required for international orders, ignored otherwise
    #[serde(default)]
    pub country_code: Option<String>,
}

impl TryFrom<NewOrderRequest> for MelonOrder {
    type Error = OrderError;

    fn try_from(req: NewOrderRequest) -> Result<Self, Self::Error> {
        let category = match req.kind {
            CategoryKind::Domestic => OrderCategory::Domestic,
            CategoryKind::Government => OrderCategory::government(),
            CategoryKind::International => {
                let code = req.country_code.as_deref().ok_or(OrderError::MissingCountryCode)?;
                OrderCategory::international(code)
            }
        };

        if req.kind != CategoryKind::International {
            if let Some(code) = &req.country_code {
                tracing::warn!(kind = %req.kind, country_code = %code, "Ignoring country code on non-international order");
            }
        }

        MelonOrder::new(req.species, req.quantity, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<MelonOrder, OrderError> {
        let req: NewOrderRequest = serde_json::from_str(json).unwrap();
        MelonOrder::try_from(req)
    }

    #[test]
    fn test_domestic_request() {
        let order = parse(r#"{"species":"Crimson Sweet","quantity":5,"kind":"domestic"}"#).unwrap();
        assert_eq!(order.kind(), CategoryKind::Domestic);
        assert_eq!(order.quantity(), 5);
    }

    #[test]
    fn test_international_request() {
        let order =
            parse(r#"{"species":"Watermelon","quantity":8,"kind":"international","country_code":" JP "}"#)
                .unwrap();
        assert_eq!(order.country_code(), Ok("JP"));
    }

    #[test]
    fn test_international_request_requires_country() {
        let err = parse(r#"{"species":"Watermelon","quantity":8,"kind":"international"}"#).unwrap_err();
        assert_eq!(err, OrderError::MissingCountryCode);
        assert!(err.is_validation());

        let err =
            parse(r#"{"species":"Watermelon","quantity":8,"kind":"international","country_code":""}"#)
                .unwrap_err();
        assert_eq!(err, OrderError::MissingCountryCode);
    }

    #[test]
    fn test_government_request_ignores_country() {
        let order =
            parse(r#"{"species":"Casaba","quantity":2,"kind":"government","country_code":"US"}"#).unwrap();
        assert_eq!(order.kind(), CategoryKind::Government);
        assert!(order.country_code().is_err());
    }

    #[test]
    fn test_request_quantity_limit() {
        let err = parse(r#"{"species":"Casaba","quantity":101,"kind":"domestic"}"#).unwrap_err();
        assert!(matches!(err, OrderError::TooManyMelons { requested: 101, .. }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let res: Result<NewOrderRequest, _> =
            serde_json::from_str(r#"{"species":"Casaba","quantity":2,"kind":"martian"}"#);
        assert!(res.is_err());
    }
}
