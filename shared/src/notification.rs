use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notifications of this type are informational only and must not be
/// navigable in the UI.
pub const NOTIFICATION_TYPE_SYSTEM: &str = "system";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id_notification: String,
    pub title: String,
    pub message: String,
    pub author: NotificationAuthor,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
}

/// Denormalized summary of the user a notification originates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAuthor {
    pub id_user: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Optional payload attached to a notification; `data` holds an
/// application path the notification links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Notification {
    pub fn is_system(&self) -> bool {
        self.kind == NOTIFICATION_TYPE_SYSTEM
    }

    /// Path the notification navigates to when clicked, if any. System
    /// notifications never navigate.
    pub fn navigation_path(&self) -> Option<&str> {
        if self.is_system() {
            return None;
        }
        self.data.as_ref()?.data.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: &str, data: Option<&str>) -> Notification {
        Notification {
            id_notification: "n1".into(),
            title: "New author".into(),
            message: "Tolkien was added".into(),
            author: NotificationAuthor {
                id_user: "u1".into(),
                email: "admin@libris.dev".into(),
                image_url: None,
            },
            created_at: "2026-01-02T03:04:05Z".parse().unwrap(),
            read: false,
            kind: kind.into(),
            data: data.map(|d| NotificationData {
                data: Some(d.into()),
            }),
        }
    }

    #[test]
    fn decodes_wire_shape() {
        let body = r#"{
            "idNotification": "n1",
            "title": "New author",
            "message": "Tolkien was added",
            "author": {"idUser": "u1", "email": "admin@libris.dev"},
            "createdAt": "2026-01-02T03:04:05Z",
            "read": false,
            "type": "entity",
            "data": {"data": "/authors/a1"}
        }"#;

        let n: Notification = serde_json::from_str(body).unwrap();
        assert_eq!(n.kind, "entity");
        assert!(!n.is_system());
        assert_eq!(n.navigation_path(), Some("/authors/a1"));
    }

    #[test]
    fn system_notifications_never_navigate() {
        let n = sample(NOTIFICATION_TYPE_SYSTEM, Some("/authors/a1"));
        assert!(n.is_system());
        assert_eq!(n.navigation_path(), None);
    }

    #[test]
    fn notifications_without_data_do_not_navigate() {
        let n = sample("entity", None);
        assert_eq!(n.navigation_path(), None);
    }
}
