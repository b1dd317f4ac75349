use crate::types::{roles, User};
use serde_json::json;

fn server_user_payload() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "jdoe",
        "email": "jdoe@example.edu",
        "first_name": "Jane",
        "last_name": "Doe",
        "phone": "555-0100",
        "is_active": true,
        "date_joined": "2024-09-01T08:30:00Z",
        "profile": {
            "id": 7,
            "user": 1,
            "address": "12 College Way",
            "date_of_birth": "2001-04-15"
        }
    })
}

#[test]
fn user_deserializes_from_server_payload() {
    let user: User = serde_json::from_value(server_user_payload()).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "jdoe");
    assert!(user.is_active);
    let profile = user.profile.expect("profile sub-record");
    assert_eq!(profile.user, 1);
    assert_eq!(profile.address.as_deref(), Some("12 College Way"));
    assert_eq!(profile.profile_picture, None);
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_value(json!({
        "id": 2,
        "username": "guest",
        "email": "guest@example.edu",
        "first_name": "Guest",
        "last_name": "Account",
        "is_active": false,
        "date_joined": "2025-01-20T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.phone, None);
    assert_eq!(user.profile, None);
    assert_eq!(user.full_name(), "Guest Account");
}

#[test]
fn default_role_names() {
    assert_eq!(roles::ADMIN, "admin");
    assert_eq!(roles::FACULTY, "faculty");
    assert_eq!(roles::STUDENT, "student");
    assert_eq!(roles::GUEST, "guest");
}
