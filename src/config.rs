// Contact constants for the WhatsApp call-to-action. wa.me wants the phone
// as bare digits, country code included, no leading plus.
pub const WHATSAPP_PHONE: &str = "573208738174";

pub const WHATSAPP_GREETING: &str =
    "Hola, me interesa conocer más sobre tus servicios como DIT";

/// Deep link that opens a chat with the greeting pre-filled.
pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_matches_wa_me_contract() {
        let url = whatsapp_url();
        assert_eq!(
            url,
            format!(
                "https://wa.me/{}?text={}",
                WHATSAPP_PHONE,
                urlencoding::encode(WHATSAPP_GREETING)
            )
        );
        assert!(url.starts_with("https://wa.me/573208738174?text="));
    }

    #[test]
    fn query_text_is_fully_percent_encoded() {
        let url = whatsapp_url();
        let text = url.split("?text=").nth(1).unwrap();
        assert!(!text.contains(' '));
        assert!(text.contains("%20"));
        assert!(!text.contains('á'));
    }

    #[test]
    fn decoding_the_query_round_trips_the_greeting() {
        let url = whatsapp_url();
        let text = url.split("?text=").nth(1).unwrap();
        let decoded = urlencoding::decode(text).unwrap();
        assert_eq!(decoded, WHATSAPP_GREETING);
    }

    #[test]
    fn phone_constant_is_digits_only() {
        assert!(WHATSAPP_PHONE.chars().all(|digit| digit.is_ascii_digit()));
    }
}
