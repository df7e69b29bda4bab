//! Sale payload types.
//!
//! Provides the request bodies for creating, updating and deleting sales.

use serde::{Deserialize, Serialize};

/// Payload for creating a sale.
///
/// `total_earned` is the only required field; everything else is attached
/// through the `with_*` builders and omitted from the request body when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    /// Total amount earned on the sale.
    pub total_earned: f64,

    /// Referral the sale is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,

    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Promo code used at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    /// Customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Caller-supplied identifier for the sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Caller-supplied invoice identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_invoice_id: Option<String>,

    /// Commission rate override for this sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
}

impl NewSale {
    /// Creates a sale payload with the given earned amount.
    #[must_use]
    pub fn new(total_earned: f64) -> Self {
        Self {
            total_earned,
            referral_id: None,
            email: None,
            promo_code: None,
            name: None,
            external_id: None,
            external_invoice_id: None,
            commission_rate: None,
        }
    }

    /// Sets the referral identifier.
    #[must_use]
    pub fn with_referral_id(mut self, referral_id: impl Into<String>) -> Self {
        self.referral_id = Some(referral_id.into());
        self
    }

    /// Sets the customer email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the promo code.
    #[must_use]
    pub fn with_promo_code(mut self, promo_code: impl Into<String>) -> Self {
        self.promo_code = Some(promo_code.into());
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the caller-supplied sale identifier.
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Sets the caller-supplied invoice identifier.
    #[must_use]
    pub fn with_external_invoice_id(mut self, external_invoice_id: impl Into<String>) -> Self {
        self.external_invoice_id = Some(external_invoice_id.into());
        self
    }

    /// Sets the commission rate.
    #[must_use]
    pub fn with_commission_rate(mut self, commission_rate: f64) -> Self {
        self.commission_rate = Some(commission_rate);
        self
    }
}

/// Payload for updating an existing sale.
///
/// Every field is optional; only set fields appear in the request body.
/// The sale is addressed by `sale_id`, which the by-external-id convenience
/// operation fills in after resolving the external identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdate {
    /// Internal numeric identifier of the sale to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<i64>,

    /// New customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New earned amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_earned: Option<f64>,

    /// New commission rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
}

impl SaleUpdate {
    /// Creates an empty update payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the update addressed to the given sale identifier.
    #[must_use]
    pub fn with_sale_id(mut self, sale_id: i64) -> Self {
        self.sale_id = Some(sale_id);
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the customer email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the earned amount.
    #[must_use]
    pub fn with_total_earned(mut self, total_earned: f64) -> Self {
        self.total_earned = Some(total_earned);
        self
    }

    /// Sets the commission rate.
    #[must_use]
    pub fn with_commission_rate(mut self, commission_rate: f64) -> Self {
        self.commission_rate = Some(commission_rate);
        self
    }
}
