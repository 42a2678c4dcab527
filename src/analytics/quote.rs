// src/analytics/quote.rs
//! Pricing service output, consumed as-is.
//!
//! Fair value, Greeks and risk scores come from the external pricing
//! service. This module decodes and sanity-checks them; nothing in the
//! crate recomputes them, and the illustrative payoff curve never stands
//! in for `fair_value`.

use crate::error::{validation::validate_range, SimError, SimResult};
use crate::products::{ProductKind, ProductSpec};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    /// Display label chosen by the service, e.g. "Autocall/Phoenix"
    pub product: String,
    pub fair_value: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub max_gain: f64,
    pub max_loss: f64,
    pub risk_level: u8,
    pub probability_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_price: Option<f64>,
}

impl PricingQuote {
    /// Decode and validate a service response body.
    pub fn from_json(body: &str) -> SimResult<Self> {
        let quote: PricingQuote =
            serde_json::from_str(body).map_err(|e| SimError::QuoteParse(e.to_string()))?;
        quote.validate()?;
        Ok(quote)
    }

    pub fn validate(&self) -> SimResult<()> {
        let numbers = [
            ("fair_value", self.fair_value),
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("theta", self.theta),
            ("max_gain", self.max_gain),
            ("max_loss", self.max_loss),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(SimError::InvalidQuote {
                    field: field.to_string(),
                    reason: format!("{} is not finite", value),
                });
            }
        }
        if self.risk_level > 100 {
            return Err(SimError::InvalidQuote {
                field: "risk_level".to_string(),
                reason: format!("{} is outside 0-100", self.risk_level),
            });
        }
        validate_range("probability_profit", self.probability_profit, 0.0, 100.0).map_err(
            |_| SimError::InvalidQuote {
                field: "probability_profit".to_string(),
                reason: format!("{} is outside 0-100%", self.probability_profit),
            },
        )?;
        Ok(())
    }

    /// Product family named by the service label, if recognized.
    pub fn kind(&self) -> Option<ProductKind> {
        let label = self.product.to_ascii_lowercase();
        if label.starts_with("autocall") || label.starts_with("phoenix") {
            Some(ProductKind::Autocall)
        } else if label.starts_with("reverse") {
            Some(ProductKind::ReverseConvertible)
        } else if label.starts_with("capital") {
            Some(ProductKind::CapitalProtected)
        } else if label.starts_with("warrant") || label.starts_with("turbo") {
            Some(ProductKind::Warrant)
        } else {
            None
        }
    }

    /// True when the quote was produced for the same product family.
    pub fn matches(&self, product: &ProductSpec) -> bool {
        self.kind() == Some(product.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTOCALL_BODY: &str = r#"{
        "product": "Autocall/Phoenix",
        "fair_value": 9712.45,
        "coupon_value": 800.0,
        "autocall_barrier_price": 150.0,
        "protection_barrier_price": 90.0,
        "max_gain": 800.0,
        "max_loss": 4000.0,
        "risk_level": 37,
        "probability_profit": 91.42,
        "delta": 0.1123,
        "gamma": 0.001873,
        "vega": 12.5,
        "theta": -3.1
    }"#;

    #[test]
    fn test_decodes_service_payload_ignoring_extra_fields() {
        let quote = PricingQuote::from_json(AUTOCALL_BODY).unwrap();
        assert_eq!(quote.fair_value, 9712.45);
        assert_eq!(quote.risk_level, 37);
        assert_eq!(quote.kind(), Some(ProductKind::Autocall));
        assert_eq!(quote.break_even_price, None);

        let product = ProductSpec::Autocall {
            autocall_barrier_pct: 100.0,
            coupon_rate_pct: 8.0,
            protection_barrier_pct: 60.0,
        };
        assert!(quote.matches(&product));
        let warrant = ProductSpec::Warrant {
            strike_price: 160.0,
            option_type: crate::products::OptionType::Call,
            leverage: 5.0,
        };
        assert!(!quote.matches(&warrant));
    }

    #[test]
    fn test_service_labels() {
        let mut quote = PricingQuote::from_json(AUTOCALL_BODY).unwrap();
        for (label, kind) in [
            ("Reverse Convertible", ProductKind::ReverseConvertible),
            ("Capital Garanti", ProductKind::CapitalProtected),
            ("Warrant CALL", ProductKind::Warrant),
        ] {
            quote.product = label.to_string();
            assert_eq!(quote.kind(), Some(kind));
        }
        quote.product = "Digital".to_string();
        assert_eq!(quote.kind(), None);
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        let body = AUTOCALL_BODY.replace("91.42", "120.0");
        assert!(matches!(
            PricingQuote::from_json(&body),
            Err(SimError::InvalidQuote { ref field, .. }) if field == "probability_profit"
        ));

        let body = AUTOCALL_BODY.replace("\"risk_level\": 37", "\"risk_level\": 101");
        assert!(matches!(
            PricingQuote::from_json(&body),
            Err(SimError::InvalidQuote { ref field, .. }) if field == "risk_level"
        ));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            PricingQuote::from_json("{\"product\": \"Autocall\"}"),
            Err(SimError::QuoteParse(_))
        ));
    }
}
