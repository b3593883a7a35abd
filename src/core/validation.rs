//! Validation module for member forms (login, registration, profile edits)
//!
//! Single-field validators return a [`ValidationResult`]; [`validate_form`]
//! runs a [`FormRules`] set over a whole record and keeps the first failing
//! message per field. Nothing here touches the network.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted by the client-side check
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum length of a registration password on the server
pub const MIN_STRONG_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static SERVER_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.(com|co\.in|org|net|in)$")
        .expect("valid server email pattern")
});

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z_ ]{2,49}$").expect("valid username pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid phone pattern"));

const STRONG_PASSWORD_SPECIALS: &str = "@$!%*?&_";
const STRONG_PASSWORD_ALLOWED: &str = "@$!%*?&";

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty after trimming
    Required { label: String },
    /// Email field is empty
    EmailRequired,
    /// Email does not look like `local@domain.tld`
    InvalidEmail,
    /// Email outside the domains the server accepts
    InvalidServerEmail,
    /// Value is shorter than the rule allows
    TooShort { label: String, min: usize },
    /// Password is empty
    PasswordRequired,
    /// Password is shorter than [`MIN_PASSWORD_LENGTH`]
    PasswordTooShort { min: usize },
    /// Password and confirmation differ
    PasswordMismatch,
    /// Password misses one of the character classes the server demands
    WeakPassword,
    /// Username breaks the naming rule
    InvalidUsername,
    /// Not a valid Indian mobile number
    InvalidPhone,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required { label } => write!(f, "{} is required", label),
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::InvalidServerEmail => write!(
                f,
                "Invalid email format. Allowed domains: .com, .co.in, .org, .net, .in"
            ),
            ValidationError::TooShort { label, min } => {
                write!(f, "{} must be at least {} characters", label, min)
            }
            ValidationError::PasswordRequired => write!(f, "Password is required"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::WeakPassword => write!(
                f,
                "Password must be at least 8 characters long, with at least 1 uppercase, 1 lowercase, 1 digit, and 1 special character"
            ),
            ValidationError::InvalidUsername => write!(
                f,
                "Username must start with a letter, can contain only letters, spaces, and underscores, and be 3-50 characters long"
            ),
            ValidationError::InvalidPhone => write!(
                f,
                "Invalid Indian phone number. Must start with 6-9, be 10 digits, and not be all zeros after the first digit"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of a single-field check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// First error message, if any
    pub fn error(&self) -> Option<String> {
        self.errors.first().map(|e| e.to_string())
    }

    /// All error messages in order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Convert to Result, returning first error if any
    pub fn to_result(&self) -> Result<(), ValidationError> {
        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Non-empty after trimming
pub fn validate_required(value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::from_error(ValidationError::Required {
            label: label.to_string(),
        })
    } else {
        ValidationResult::new()
    }
}

/// `local@domain.tld`
pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::from_error(ValidationError::EmailRequired)
    } else if !EMAIL_RE.is_match(value) {
        ValidationResult::from_error(ValidationError::InvalidEmail)
    } else {
        ValidationResult::new()
    }
}

/// The registration email rule: restricted local part and a fixed set of domains
pub fn validate_server_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::from_error(ValidationError::EmailRequired)
    } else if !SERVER_EMAIL_RE.is_match(value) {
        ValidationResult::from_error(ValidationError::InvalidServerEmail)
    } else {
        ValidationResult::new()
    }
}

/// Password presence, length and optional confirmation.
///
/// A confirmation of `Some("")` counts as supplied; only `None` skips the
/// comparison.
pub fn validate_password(password: &str, confirmation: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.is_empty() {
        result.add_error(ValidationError::PasswordRequired);
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        result.add_error(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if let Some(confirmation) = confirmation
        && confirmation != password
    {
        result.add_error(ValidationError::PasswordMismatch);
    }

    result
}

/// Registration password rule enforced by the server
pub fn validate_strong_password(password: &str) -> ValidationResult {
    let long_enough = password.chars().count() >= MIN_STRONG_PASSWORD_LENGTH;
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || STRONG_PASSWORD_ALLOWED.contains(c));
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| STRONG_PASSWORD_SPECIALS.contains(c));

    if password.is_empty() {
        ValidationResult::from_error(ValidationError::PasswordRequired)
    } else if long_enough && allowed && has_lower && has_upper && has_digit && has_special {
        ValidationResult::new()
    } else {
        ValidationResult::from_error(ValidationError::WeakPassword)
    }
}

/// Letter first, then letters, spaces or underscores; 3-50 characters
pub fn validate_username(value: &str) -> ValidationResult {
    if USERNAME_RE.is_match(value) {
        ValidationResult::new()
    } else {
        ValidationResult::from_error(ValidationError::InvalidUsername)
    }
}

/// Ten digits starting with 6-9, not followed by nine zeros
pub fn validate_indian_phone(value: &str) -> ValidationResult {
    let all_zero_tail = value.len() == 10 && value.bytes().skip(1).all(|b| b == b'0');
    if PHONE_RE.is_match(value) && !all_zero_tail {
        ValidationResult::new()
    } else {
        ValidationResult::from_error(ValidationError::InvalidPhone)
    }
}

/// Checks applied to one form field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRule {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
    /// Compare the value against `confirmation` as a password
    pub password: bool,
    /// Confirmation value for password fields; `None` skips the comparison
    pub confirmation: Option<String>,
    /// Human-readable field name used in messages
    pub label: Option<String>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn password(mut self, confirmation: Option<&str>) -> Self {
        self.password = true;
        self.confirmation = confirmation.map(String::from);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn label_or<'a>(&'a self, field: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(field)
    }

    /// First failing check for `value`
    fn check(&self, field: &str, value: &str) -> Option<ValidationError> {
        let label = self.label_or(field);

        if self.required
            && let Err(e) = validate_required(value, label).to_result()
        {
            return Some(e);
        }

        if self.email
            && !value.is_empty()
            && let Err(e) = validate_email(value).to_result()
        {
            return Some(e);
        }

        if let Some(min) = self.min_length
            && !value.is_empty()
            && value.chars().count() < min
        {
            return Some(ValidationError::TooShort {
                label: label.to_string(),
                min,
            });
        }

        if self.password
            && let Some(confirmation) = self.confirmation.as_deref()
            && let Err(e) = validate_password(value, Some(confirmation)).to_result()
        {
            return Some(e);
        }

        None
    }
}

/// Ordered rule set keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRules {
    rules: Vec<(String, FieldRule)>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

/// Outcome of [`validate_form`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValidation {
    /// First failing message per field
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Run `rules` over `data`. Missing fields are validated as empty strings.
pub fn validate_form(data: &HashMap<String, String>, rules: &FormRules) -> FormValidation {
    let mut result = FormValidation::default();

    for (field, rule) in rules.iter() {
        let value = data.get(field).map(String::as_str).unwrap_or("");
        if let Some(error) = rule.check(field, value) {
            result.errors.insert(field.to_string(), error.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("x", "Name").is_valid());

        let result = validate_required("   ", "Name");
        assert!(!result.is_valid());
        assert_eq!(result.error(), Some("Name is required".to_string()));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_valid());
        assert!(validate_email("john.doe@example.com").is_valid());

        let bad = validate_email("bad");
        assert!(!bad.is_valid());
        assert_eq!(
            bad.error(),
            Some("Please enter a valid email address".to_string())
        );

        assert!(!validate_email("a b@c.d").is_valid());
        assert!(!validate_email("a@b").is_valid());
        assert!(!validate_email("a@@b.c").is_valid());

        assert_eq!(
            validate_email("").error(),
            Some("Email is required".to_string())
        );
    }

    #[test]
    fn test_validate_server_email() {
        assert!(validate_server_email("john.doe@example.com").is_valid());
        assert!(validate_server_email("a+b@mail.co.in").is_valid());
        assert!(validate_server_email("x@y.org").is_valid());

        let rejected = validate_server_email("jane@example.io");
        assert_eq!(
            rejected.error(),
            Some("Invalid email format. Allowed domains: .com, .co.in, .org, .net, .in".to_string())
        );
        // the client rule alone would accept it
        assert!(validate_email("jane@example.io").is_valid());

        assert!(!validate_server_email("jo hn@example.com").is_valid());
        assert_eq!(
            validate_server_email("").errors,
            vec![ValidationError::EmailRequired]
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1", None).is_valid());
        assert!(validate_password("secret1", Some("secret1")).is_valid());

        assert_eq!(
            validate_password("", None).error(),
            Some("Password is required".to_string())
        );
        assert_eq!(
            validate_password("abc", None).error(),
            Some("Password must be at least 6 characters long".to_string())
        );
        assert_eq!(
            validate_password("secret1", Some("secret2")).error(),
            Some("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_empty_confirmation_counts_as_supplied() {
        let result = validate_password("secret1", Some(""));
        assert_eq!(result.errors, vec![ValidationError::PasswordMismatch]);
    }

    #[test]
    fn test_password_reports_both_failures() {
        let result = validate_password("abc", Some("abd"));
        assert_eq!(result.messages().len(), 2);
    }

    #[test]
    fn test_validate_strong_password() {
        assert!(validate_strong_password("P@ssw0rd123").is_valid());
        assert!(!validate_strong_password("password").is_valid());
        assert!(!validate_strong_password("Passw0rd").is_valid());
        assert!(!validate_strong_password("P@ss0r").is_valid());
        assert!(!validate_strong_password("P@ssw0rd#").is_valid());
        assert_eq!(
            validate_strong_password("").errors,
            vec![ValidationError::PasswordRequired]
        );
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("Al_ice").is_valid());
        assert!(validate_username("John Doe").is_valid());
        assert!(validate_username(&format!("A{}", "b".repeat(49))).is_valid());

        assert!(!validate_username("1abc").is_valid());
        assert!(!validate_username("_abc").is_valid());
        assert!(!validate_username("Al").is_valid());
        assert!(!validate_username("Al1ce").is_valid());
        assert!(!validate_username(&format!("A{}", "b".repeat(50))).is_valid());
        assert_eq!(
            validate_username("").errors,
            vec![ValidationError::InvalidUsername]
        );
    }

    #[test]
    fn test_validate_indian_phone() {
        assert!(validate_indian_phone("9876543210").is_valid());
        assert!(validate_indian_phone("6000000001").is_valid());

        assert!(!validate_indian_phone("0000000000").is_valid());
        assert!(!validate_indian_phone("1234567890").is_valid());
        assert!(!validate_indian_phone("9000000000").is_valid());
        assert!(!validate_indian_phone("987654321").is_valid());
        assert!(!validate_indian_phone("98765432100").is_valid());
        assert!(!validate_indian_phone("98765x3210").is_valid());
        assert!(!validate_indian_phone("९८७६५४३२१०").is_valid());
    }

    #[test]
    fn test_validate_form_required_precedes_email() {
        let rules = FormRules::new().field("email", FieldRule::new().required().email());
        let result = validate_form(&form(&[("email", "")]), &rules);

        assert!(!result.is_valid());
        assert_eq!(result.error("email"), Some("email is required"));
    }

    #[test]
    fn test_validate_form_uses_label() {
        let rules = FormRules::new().field(
            "email",
            FieldRule::new().required().email().label("Email"),
        );
        let result = validate_form(&HashMap::new(), &rules);
        assert_eq!(result.error("email"), Some("Email is required"));
    }

    #[test]
    fn test_validate_form_email_format() {
        let rules = FormRules::new().field("email", FieldRule::new().required().email());
        let result = validate_form(&form(&[("email", "nope")]), &rules);
        assert_eq!(
            result.error("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_validate_form_min_length() {
        let rules = FormRules::new().field("name", FieldRule::new().min_length(3).label("Name"));

        let short = validate_form(&form(&[("name", "Al")]), &rules);
        assert_eq!(short.error("name"), Some("Name must be at least 3 characters"));

        // optional fields are not length-checked when empty
        let empty = validate_form(&form(&[("name", "")]), &rules);
        assert!(empty.is_valid());
    }

    #[test]
    fn test_validate_form_password_confirmation() {
        let rules = FormRules::new().field(
            "password",
            FieldRule::new()
                .required()
                .password(Some("different"))
                .label("Password"),
        );
        let result = validate_form(&form(&[("password", "secret1")]), &rules);
        assert_eq!(result.error("password"), Some("Passwords do not match"));

        let matching = FormRules::new().field(
            "password",
            FieldRule::new().required().password(Some("secret1")),
        );
        assert!(validate_form(&form(&[("password", "secret1")]), &matching).is_valid());
    }

    #[test]
    fn test_validate_form_password_without_confirmation_is_skipped() {
        let rules = FormRules::new().field("password", FieldRule::new().password(None));
        assert!(validate_form(&form(&[("password", "x")]), &rules).is_valid());
    }

    #[test]
    fn test_validate_form_keeps_first_error_per_field() {
        let rules = FormRules::new().field(
            "password",
            FieldRule::new().min_length(10).password(Some("other")),
        );
        let result = validate_form(&form(&[("password", "short")]), &rules);
        assert_eq!(
            result.error("password"),
            Some("password must be at least 10 characters")
        );
    }

    #[test]
    fn test_validate_form_aggregates_fields() {
        let rules = FormRules::new()
            .field("email", FieldRule::new().required().email().label("Email"))
            .field("name", FieldRule::new().required().label("Name"))
            .field("phone", FieldRule::new().label("Phone"));
        let result = validate_form(&form(&[("email", "a@b.co"), ("name", " ")]), &rules);

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error("name"), Some("Name is required"));
        assert!(result.error("email").is_none());
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Required {
                label: "Phone".to_string()
            }
            .to_string(),
            "Phone is required"
        );
        assert_eq!(
            ValidationError::TooShort {
                label: "Name".to_string(),
                min: 3
            }
            .to_string(),
            "Name must be at least 3 characters"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
