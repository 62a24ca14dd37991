use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::present;
use super::required;
use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::NameError;
use crate::user::errors::PasswordPolicyError;

pub async fn register<US: UserServicePort>(
    State(state): State<AppState<US>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|session| {
            ApiSuccess::new(
                StatusCode::CREATED,
                AuthResponseData {
                    user: (&session.user).into(),
                    token: session.token,
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let password = present(self.password, "password")?;
        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let command = Self::parse(name, email, password, phone)?;
        Ok(command)
    }

    fn parse(
        name: String,
        email: String,
        password: String,
        phone: Option<String>,
    ) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let name = PersonName::new(name)?;
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        Ok(RegisterCommand::new(name, email, password, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
            phone: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let command = request(Some("Ana"), Some("ana@x.com"), Some("secret1"))
            .try_into_command()
            .unwrap();

        assert_eq!(command.name.as_str(), "Ana");
        assert_eq!(command.email.as_str(), "ana@x.com");
        assert_eq!(command.password.expose(), "secret1");
        assert!(command.phone.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            (request(None, Some("ana@x.com"), Some("secret1")), "name is required"),
            (request(Some("Ana"), None, Some("secret1")), "email is required"),
            (request(Some("Ana"), Some("ana@x.com"), Some("")), "password is required"),
        ];

        for (request, message) in cases {
            assert_eq!(
                request.try_into_command().unwrap_err(),
                ApiError::BadRequest(message.to_string())
            );
        }
    }

    #[test]
    fn test_policy_violations() {
        let short_password = request(Some("Ana"), Some("ana@x.com"), Some("12345"))
            .try_into_command()
            .unwrap_err();
        assert!(matches!(short_password, ApiError::BadRequest(msg) if msg.contains("minimum 6")));

        let bad_email = request(Some("Ana"), Some("not-an-email"), Some("secret1"))
            .try_into_command()
            .unwrap_err();
        assert!(matches!(bad_email, ApiError::BadRequest(msg) if msg.starts_with("Invalid email")));

        let short_name = request(Some("A"), Some("ana@x.com"), Some("secret1"))
            .try_into_command()
            .unwrap_err();
        assert!(matches!(short_name, ApiError::BadRequest(msg) if msg.starts_with("Invalid name")));
    }

    #[test]
    fn test_whitespace_password_accepted() {
        let command = request(Some("Ana"), Some("ana@x.com"), Some("       "))
            .try_into_command()
            .unwrap();

        assert_eq!(command.password.expose(), "       ");
    }

    #[test]
    fn test_blank_phone_is_dropped() {
        let mut body = request(Some("Ana"), Some("ana@x.com"), Some("secret1"));
        body.phone = Some("  ".to_string());

        assert!(body.try_into_command().unwrap().phone.is_none());
    }
}
