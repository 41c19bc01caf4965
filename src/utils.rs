//! Form and display helpers kept out of the components so they can be tested
//! without rendering anything.

use crate::models::Transaction;

/// Parses a form amount, accepting only values strictly greater than zero.
/// Both money forms go through this before any network call happens.
pub fn parse_amount(input: &str) -> Option<f64> {
    let amount = input.trim().parse::<f64>().ok()?;
    if amount.is_finite() && amount > 0.0 {
        Some(amount)
    } else {
        None
    }
}

/// Exact text shown in the confirmation modal before a transfer fires.
pub fn confirm_prompt(amount: f64, recipient_email: &str) -> String {
    format!("Send ${amount:.2} to {recipient_email}?")
}

pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// "Sent to ..." / "Received from ..." line for a history entry, from the
/// viewer's side of the transfer.
pub fn counterparty_line(tx: &Transaction, viewer_id: i64) -> String {
    if tx.sender_id == viewer_id {
        format!("Sent to {}", tx.recipient_email)
    } else {
        format!("Received from {}", tx.sender_email)
    }
}

/// Signed amount for a history entry: outgoing transfers are negative.
pub fn signed_amount(tx: &Transaction, viewer_id: i64) -> String {
    if tx.sender_id == viewer_id {
        format!("-${:.2}", tx.amount)
    } else {
        format!("+${:.2}", tx.amount)
    }
}

/// Date part of a backend timestamp; falls back to the raw string when the
/// backend sends something unparsable.
pub fn format_date(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(sender_id: i64, recipient_id: i64) -> Transaction {
        Transaction {
            id: 7,
            sender_id,
            recipient_id,
            sender_email: "a@x.com".to_string(),
            recipient_email: "b@x.com".to_string(),
            amount: 12.5,
            status: "completed".to_string(),
            timestamp: "2024-05-01T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("0.00"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn positive_amounts_parse() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" 0.01 "), Some(0.01));
    }

    #[test]
    fn confirm_prompt_matches_the_modal_text_exactly() {
        assert_eq!(
            confirm_prompt(12.5, "bob@x.com"),
            "Send $12.50 to bob@x.com?"
        );
    }

    #[test]
    fn history_lines_follow_the_viewer_side() {
        let outgoing = tx(1, 2);
        assert_eq!(counterparty_line(&outgoing, 1), "Sent to b@x.com");
        assert_eq!(signed_amount(&outgoing, 1), "-$12.50");

        let incoming = tx(2, 1);
        assert_eq!(counterparty_line(&incoming, 1), "Received from a@x.com");
        assert_eq!(signed_amount(&incoming, 1), "+$12.50");
    }

    #[test]
    fn timestamps_render_as_dates() {
        assert_eq!(format_date("2024-05-01T10:30:00Z"), "2024-05-01");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
