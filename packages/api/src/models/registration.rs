//! # Registration payloads and the stored document
//!
//! Defines the two representations of a registration:
//!
//! ## [`RegisterRequest`]
//!
//! The five-field payload exactly as the form posts it. It crosses the wire
//! unmodified, so it derives both `Serialize` (client) and `Deserialize`
//! (server); every field is a plain string and a payload with a missing or
//! non-string field fails deserialization, which the endpoint reports as
//! invalid input.
//!
//! ## [`Registration`] (server only)
//!
//! The document inserted into the `users` collection. The id is optional and
//! skipped when unset so the driver generates it, and `created_at` is renamed
//! to `createdAt` to match the collection's historical field name.
//! [`Registration::new`] is the only constructor and is where normalization
//! happens: username and phone are trimmed, email is trimmed and lower-cased,
//! and the creation time is stamped.
//!
//! The response bodies ([`RegisterSuccess`], [`ErrorBody`],
//! [`TestConnectionBody`]) are shared so the client parses the same shapes
//! the handlers produce.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use mongodb::bson::{oid::ObjectId, DateTime};

/// The payload posted by the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub college: String,
}

/// One stored registration document.
#[cfg(feature = "server")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub college: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

#[cfg(feature = "server")]
impl Registration {
    /// Build the document to insert from a validated request.
    ///
    /// Normalization lives here: username and phone are trimmed, email is
    /// trimmed and lower-cased. The id stays `None` so the driver assigns
    /// one on insert.
    pub fn new(request: &RegisterRequest) -> Self {
        Self {
            id: None,
            username: request.username.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            phone: request.phone.trim().to_string(),
            branch: request.branch.clone(),
            college: request.college.clone(),
            created_at: DateTime::now(),
        }
    }
}

/// Body of a 201 response from the registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSuccess {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a successful connectivity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConnectionBody {
    pub message: String,
    pub collections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            phone: "9876543210".to_string(),
            branch: "Chemical".to_string(),
            college: "Terna Engineering College".to_string(),
        }
    }

    #[test]
    fn test_insert_normalization() {
        let mut req = request();
        req.username = "  alice  ".to_string();
        req.email = " Foo@Bar.COM ".to_string();
        req.phone = " 1234567890 ".to_string();

        let doc = Registration::new(&req);
        assert_eq!(doc.username, "alice");
        assert_eq!(doc.email, "foo@bar.com");
        assert_eq!(doc.phone, "1234567890");
        assert_eq!(doc.branch, "Chemical");
        assert!(doc.id.is_none());
    }

    #[test]
    fn test_document_field_names() {
        let doc = Registration::new(&request());
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        // Unset ids are omitted entirely; the timestamp keeps the
        // collection's historical camelCase name.
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("id"));
        assert!(object.contains_key("createdAt"));
        assert_eq!(object["username"], json!("alice"));
    }

    #[test]
    fn test_success_body_uses_user_id_key() {
        let body = RegisterSuccess {
            message: "User registered successfully.".to_string(),
            user_id: "507f1f77bcf86cd799439011".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["userId"], json!("507f1f77bcf86cd799439011"));
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn test_request_rejects_missing_or_non_string_fields() {
        let missing = json!({
            "username": "alice",
            "email": "alice@x.com",
            "phone": "9876543210",
            "branch": "Chemical"
        });
        assert!(serde_json::from_value::<RegisterRequest>(missing).is_err());

        let non_string = json!({
            "username": "alice",
            "email": "alice@x.com",
            "phone": 9876543210u64,
            "branch": "Chemical",
            "college": "Terna Engineering College"
        });
        assert!(serde_json::from_value::<RegisterRequest>(non_string).is_err());
    }
}
