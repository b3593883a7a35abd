//! Request and response payloads of the member REST API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::validation::{
    FormValidation, validate_indian_phone, validate_server_email, validate_strong_password,
    validate_username,
};

/// Credentials for `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// New member, for self-registration and admin creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
}

impl UserRequest {
    /// Apply the server's field rules before sending
    pub fn validate(&self) -> FormValidation {
        let mut errors = BTreeMap::new();
        let checks = [
            ("username", validate_username(&self.username)),
            ("password", validate_strong_password(&self.password)),
            ("email", validate_server_email(&self.email)),
            ("phone", validate_indian_phone(&self.phone)),
        ];
        for (field, result) in checks {
            if let Some(message) = result.error() {
                errors.insert(field.to_string(), message);
            }
        }
        FormValidation { errors }
    }
}

/// Partial update of a member; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Member as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

/// Paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

/// Which member attribute a search matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Email,
    Name,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Email => "email",
            SearchField::Name => "name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_from_spring_payload() {
        let page: Page<UserResponse> = serde_json::from_value(json!({
            "content": [{"id": "1", "name": "Jane", "email": "jane@example.com", "phone": "9876543210"}],
            "totalElements": 11,
            "totalPages": 2,
            "number": 0,
            "size": 10,
            "first": true,
            "last": false,
            "pageable": {"pageNumber": 0}
        }))
        .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Jane");
        assert_eq!(page.total_elements, 11);
        assert_eq!(page.total_pages, 2);
        assert!(page.first);
        assert!(!page.empty);
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let update = UserUpdateRequest {
            phone: Some("9876543210".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"phone": "9876543210"})
        );
    }

    #[test]
    fn test_login_response_type_field() {
        let resp: LoginResponse =
            serde_json::from_value(json!({"token": "abc", "type": "Bearer"})).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
    }

    #[test]
    fn test_user_request_validate() {
        let valid = UserRequest {
            username: "John_Doe".to_string(),
            password: "P@ssw0rd123".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "9876543210".to_string(),
        };
        assert!(valid.validate().is_valid());

        let invalid = UserRequest {
            username: "1john".to_string(),
            password: "weak".to_string(),
            email: "john".to_string(),
            phone: "1234567890".to_string(),
        };
        let result = invalid.validate();
        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            result.error("email"),
            Some("Invalid email format. Allowed domains: .com, .co.in, .org, .net, .in")
        );
    }

    #[test]
    fn test_user_request_rejects_domain_outside_server_list() {
        let request = UserRequest {
            username: "Jane_Doe".to_string(),
            password: "P@ssw0rd123".to_string(),
            email: "jane@example.io".to_string(),
            phone: "9876543210".to_string(),
        };
        let result = request.validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert!(result.error("email").is_some());
    }

    #[test]
    fn test_user_response_requires_identity_fields() {
        assert!(serde_json::from_value::<UserResponse>(json!({})).is_err());
        assert!(serde_json::from_value::<UserResponse>(json!({"id": "1", "name": "A"})).is_err());

        let user: UserResponse =
            serde_json::from_value(json!({"id": "1", "name": "A", "email": "a@x.com"})).unwrap();
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_search_field_names() {
        assert_eq!(SearchField::Email.as_str(), "email");
        assert_eq!(SearchField::Name.as_str(), "name");
        assert_eq!(SearchField::default(), SearchField::Email);
    }
}
