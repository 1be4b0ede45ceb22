//! Session-related types.

use serde::{Deserialize, Serialize};

use namenest_core::{Email, ProfileId};

/// Session-stored identity of the subscriber who completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: ProfileId,
    pub email: Email,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_current_user_serializes_flat() {
        let user = CurrentUser {
            id: ProfileId::new(Uuid::nil()),
            email: Email::parse("jane@example.com").unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["email"], "jane@example.com");

        let back: CurrentUser = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
