pub mod referral;

pub use referral::{ReferralRequest, ReferralResponse};
