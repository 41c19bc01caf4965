//! Wire shapes shared with the wallet backend.
//!
//! Field names are camelCase on the wire; the backend owns every mutation,
//! so these are plain data carriers with no balance arithmetic on them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub sender_email: String,
    pub recipient_email: String,
    pub amount: f64,
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_through_json() {
        let user = User {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn wallet_uses_camel_case_on_the_wire() {
        let wallet: Wallet =
            serde_json::from_str(r#"{"id":10,"userId":1,"balance":0.0}"#).unwrap();
        assert_eq!(wallet.id, 10);
        assert_eq!(wallet.user_id, 1);
        assert_eq!(wallet.balance, 0.0);
    }

    #[test]
    fn transaction_deserializes_backend_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": 7,
                "senderId": 1,
                "recipientId": 2,
                "senderEmail": "a@x.com",
                "recipientEmail": "b@x.com",
                "amount": 12.5,
                "status": "completed",
                "timestamp": "2024-05-01T10:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(tx.sender_id, 1);
        assert_eq!(tx.recipient_email, "b@x.com");
        assert_eq!(tx.amount, 12.5);
    }
}
