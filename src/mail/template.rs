use crate::config::Config;
use crate::mail::OutboundEmail;
use crate::models::ReferralRequest;

/// Rendered in place of a referrer phone that was omitted or left empty.
const PHONE_PLACEHOLDER: &str = "Not provided";

/// Compose the referral notification for the organization mailbox.
///
/// Reply-to is the referrer so the organization can answer them directly.
pub fn referral_email(config: &Config, request: &ReferralRequest) -> OutboundEmail {
    let referer_phone = request
        .referer_phone
        .as_deref()
        .filter(|phone| !phone.is_empty())
        .unwrap_or(PHONE_PLACEHOLDER);

    OutboundEmail {
        from: format!("{} Referral <{}>", config.brand_name, config.email_user),
        to: config.org_email.clone(),
        reply_to: Some(request.referer_email.clone()),
        subject: format!("🎉 New Referral from {}", request.referer_name),
        html: referral_html(&config.brand_name, request, referer_phone),
    }
}

fn referral_html(brand: &str, request: &ReferralRequest, referer_phone: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: linear-gradient(135deg, #007AFF 0%, #0056b3 100%); padding: 30px; border-radius: 12px 12px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 24px;">New Friend Referral</h1>
  </div>

  <div style="background: #f8fafc; padding: 30px; border: 1px solid #e2e8f0; border-top: none;">
    <h2 style="color: #1e293b; font-size: 18px; margin-top: 0;">Referrer Information</h2>
    <table style="width: 100%; border-collapse: collapse;">
      <tr>
        <td style="padding: 8px 0; color: #64748b; width: 120px;">Name:</td>
        <td style="padding: 8px 0; color: #1e293b; font-weight: 600;">{referer_name}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; color: #64748b;">Email:</td>
        <td style="padding: 8px 0; color: #1e293b;">{referer_email}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; color: #64748b;">Phone:</td>
        <td style="padding: 8px 0; color: #1e293b;">{referer_phone}</td>
      </tr>
    </table>

    <hr style="border: none; border-top: 1px solid #e2e8f0; margin: 20px 0;">

    <h2 style="color: #1e293b; font-size: 18px;">Friend Being Referred</h2>
    <table style="width: 100%; border-collapse: collapse;">
      <tr>
        <td style="padding: 8px 0; color: #64748b; width: 120px;">Name:</td>
        <td style="padding: 8px 0; color: #1e293b; font-weight: 600;">{friend_name}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; color: #64748b;">Phone:</td>
        <td style="padding: 8px 0; color: #1e293b;">{friend_phone}</td>
      </tr>
    </table>
  </div>

  <div style="background: #1e293b; padding: 20px; border-radius: 0 0 12px 12px; text-align: center;">
    <p style="color: #94a3b8; margin: 0; font-size: 14px;">
      {brand} Subscriber Portal
    </p>
  </div>
</div>"#,
        referer_name = escape_html(&request.referer_name),
        referer_email = escape_html(&request.referer_email),
        referer_phone = escape_html(referer_phone),
        friend_name = escape_html(&request.friend_name),
        friend_phone = escape_html(&request.friend_phone),
        brand = escape_html(brand),
    )
}

/// Escape text for embedding in HTML markup.
fn escape_html(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }

    result
}
