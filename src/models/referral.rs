use serde::{Deserialize, Serialize};

/// Incoming referral submission.
///
/// Required string fields default to empty when absent, so missing fields
/// reach the handler's own validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    #[serde(default)]
    pub referer_name: String,
    #[serde(default)]
    pub referer_email: String,
    #[serde(default)]
    pub referer_phone: Option<String>,
    #[serde(default)]
    pub friend_name: String,
    #[serde(default)]
    pub friend_phone: String,
}

impl ReferralRequest {
    /// True when every required field is present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.referer_name.is_empty()
            && !self.referer_email.is_empty()
            && !self.friend_name.is_empty()
            && !self.friend_phone.is_empty()
    }
}

/// Response after a referral submission
#[derive(Debug, Serialize)]
pub struct ReferralResponse {
    pub status: String,
    pub message: String,
}

impl ReferralResponse {
    pub fn submitted() -> Self {
        Self {
            status: "success".to_string(),
            message: "Referral submitted successfully! We will contact your friend soon."
                .to_string(),
        }
    }
}
