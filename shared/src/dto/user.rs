use serde::{Deserialize, Serialize};

/// Logged-in user record.
///
/// Created at login, persisted to the browser's local storage, removed on
/// logout. There is no server-side counterpart; presence of this record is
/// what the session manager trusts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Minecraft in-game name.
    pub ign: String,
    pub email: String,
    pub is_logged_in: bool,
}

impl User {
    pub fn logged_in(ign: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            ign: ign.into(),
            email: email.into(),
            is_logged_in: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_mirror_wire_names() {
        let user = User::logged_in("ArifGamer_HD", "arif@gmail.com");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"isLoggedIn\":true"));
        assert!(json.contains("\"ign\":\"ArifGamer_HD\""));
    }

    #[test]
    fn test_user_roundtrip_from_saved_mirror_entry() {
        let raw = r#"{"ign":"Steve","email":"steve@gmail.com","isLoggedIn":true}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.ign, "Steve");
        assert!(user.is_logged_in);
    }
}
