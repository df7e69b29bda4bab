//! Referral payload types.

use serde::{Deserialize, Serialize};

/// Payload for creating a referral.
///
/// `name`, `email` and `referred_user_external_id` are required; the rest is
/// attached through the `with_*` builders and omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReferral {
    /// Referred user's name.
    pub name: String,

    /// Referred user's email.
    pub email: String,

    /// Caller-supplied identifier for the referred user.
    pub referred_user_external_id: String,

    /// Affiliate the referral is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<String>,

    /// Affiliate email, used for attribution when no affiliate id is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_email: Option<String>,

    /// Promo code used at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    /// Plan the referred user signed up for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Referral status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NewReferral {
    /// Creates a referral payload for the given user.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        referred_user_external_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            referred_user_external_id: referred_user_external_id.into(),
            affiliate_id: None,
            affiliate_email: None,
            promo_code: None,
            plan: None,
            status: None,
        }
    }

    /// Sets the affiliate identifier.
    #[must_use]
    pub fn with_affiliate_id(mut self, affiliate_id: impl Into<String>) -> Self {
        self.affiliate_id = Some(affiliate_id.into());
        self
    }

    /// Sets the affiliate email.
    #[must_use]
    pub fn with_affiliate_email(mut self, affiliate_email: impl Into<String>) -> Self {
        self.affiliate_email = Some(affiliate_email.into());
        self
    }

    /// Sets the promo code.
    #[must_use]
    pub fn with_promo_code(mut self, promo_code: impl Into<String>) -> Self {
        self.promo_code = Some(promo_code.into());
        self
    }

    /// Sets the plan.
    #[must_use]
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    /// Sets the referral status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
