//! Canned reply templates.
//!
//! Presentation content only: nothing here validates the values it
//! interpolates. Formatting uses WhatsApp markdown (`*bold*`, `_italic_`).

/// Fixed acknowledgment for "thanks" / "thank you".
pub const THANKS_REPLY: &str = "You're welcome! 😊";

/// Reply when the text-generation backend failed outright.
pub const UNAVAILABLE_REPLY: &str =
    "⚠️ I'm having trouble responding right now. Please try again shortly.";

const EXAMPLE_QUERIES: &str = "Try:\n\
• Next bus from Majestic to Hebbal\n\
• Route 500D\n\
• Fare from BTM to Silk Board";

/// Welcome message for greetings.
pub fn greeting() -> String {
    "👋 Hello! I'm your BMTC assistant.\n\n\
     Ask me about:\n\
     • Next bus\n\
     • Routes\n\
     • Fares\n\n\
     Type *help* to see examples."
        .to_string()
}

/// Usage examples.
pub fn help() -> String {
    format!("🚌 *BMTC Bot Help*\n\n{EXAMPLE_QUERIES}")
}

/// Reply for input we could not make sense of.
pub fn unknown() -> String {
    format!("🤔 I didn't quite understand that.\n\n{EXAMPLE_QUERIES}")
}

/// Fixed acknowledgment for thanks.
pub fn thanks() -> String {
    THANKS_REPLY.to_string()
}

/// Fallback when the text-generation backend failed.
pub fn unavailable() -> String {
    UNAVAILABLE_REPLY.to_string()
}

/// Next-bus reply for either a stop pair or a single stop.
///
/// A complete `from_stop`/`to_stop` pair takes precedence over `stop_name`.
/// Empty strings count as missing. With neither shape supplied the reply
/// is [`unknown`].
pub fn next_bus(
    from_stop: Option<&str>,
    to_stop: Option<&str>,
    stop_name: Option<&str>,
) -> String {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    if let (Some(from), Some(to)) = (present(from_stop), present(to_stop)) {
        return format!(
            "🚌 Next buses from *{from}* to *{to}*:\n\
             • 500D – arriving in 6 mins\n\
             • G-4 – arriving in 12 mins\n\n\
             _(Demo data)_"
        );
    }

    if let Some(stop) = present(stop_name) {
        return format!(
            "🚌 Next buses at *{stop}*:\n\
             • 500K – 5 mins\n\
             • 335E – 11 mins\n\n\
             _(Demo data)_"
        );
    }

    unknown()
}

/// Route description for a route number.
pub fn route_info(route_number: &str) -> String {
    format!(
        "🚌 *Route {route_number}*\n\
         Majestic → Hebbal → Yelahanka\n\n\
         _(Demo route info)_"
    )
}

/// Fare estimate between two stops.
pub fn fare(from_stop: &str, to_stop: &str) -> String {
    format!("💰 Fare from *{from_stop}* to *{to_stop}*: ₹25\n\n_(Estimated)_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_replies_are_distinct_and_non_empty() {
        let replies = [greeting(), help(), unknown(), thanks(), unavailable()];
        for (i, a) in replies.iter().enumerate() {
            assert!(!a.trim().is_empty());
            for b in &replies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_greeting_and_help_text() {
        assert!(greeting().starts_with("👋 Hello! I'm your BMTC assistant."));
        assert!(greeting().ends_with("Type *help* to see examples."));
        assert!(help().contains("• Route 500D"));
        assert!(unknown().contains("• Fare from BTM to Silk Board"));
    }

    #[test]
    fn test_next_bus_pair() {
        let reply = next_bus(Some("Majestic"), Some("Hebbal"), None);
        assert!(reply.starts_with("🚌 Next buses from *Majestic* to *Hebbal*:"));
        assert!(reply.contains("G-4"));
    }

    #[test]
    fn test_next_bus_pair_wins_over_stop() {
        let reply = next_bus(Some("Majestic"), Some("Hebbal"), Some("BTM Layout"));
        assert!(reply.contains("*Majestic* to *Hebbal*"));
        assert!(!reply.contains("BTM Layout"));
    }

    #[test]
    fn test_next_bus_single_stop() {
        let reply = next_bus(None, None, Some("Silk Board"));
        assert!(reply.starts_with("🚌 Next buses at *Silk Board*:"));

        // An incomplete pair falls through to the single stop.
        let reply = next_bus(Some("Majestic"), Some(""), Some("Hebbal"));
        assert!(reply.starts_with("🚌 Next buses at *Hebbal*:"));
    }

    #[test]
    fn test_next_bus_nothing_supplied() {
        assert_eq!(next_bus(None, None, None), unknown());
        assert_eq!(next_bus(Some("Majestic"), None, Some("")), unknown());
    }

    #[test]
    fn test_route_and_fare_interpolation() {
        assert!(route_info("500D").starts_with("🚌 *Route 500D*\n"));
        assert_eq!(
            fare("BTM", "Silk Board"),
            "💰 Fare from *BTM* to *Silk Board*: ₹25\n\n_(Estimated)_"
        );
    }
}
