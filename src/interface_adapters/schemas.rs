use serde_json::{Map, Value};

use crate::domain::entities::{AuthTokens, Profile};
use crate::domain::errors::FieldIssue;
use crate::domain::ports::ResponseSchema;

// Expected shape of sign-in and sign-up replies.
pub struct TokenSchema;

impl ResponseSchema for TokenSchema {
    type Output = AuthTokens;

    fn validate(&self, body: &Value) -> Result<AuthTokens, Vec<FieldIssue>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldIssue::new("", "expected an object")]);
        };

        let mut issues = Vec::new();
        let access_token = require_non_empty_string(object, "access_token", &mut issues);

        match access_token {
            Some(access_token) if issues.is_empty() => Ok(AuthTokens { access_token }),
            _ => Err(issues),
        }
    }
}

// Expected shape of `/user/me` replies.
pub struct ProfileSchema;

impl ResponseSchema for ProfileSchema {
    type Output = Profile;

    fn validate(&self, body: &Value) -> Result<Profile, Vec<FieldIssue>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldIssue::new("", "expected an object")]);
        };

        let mut issues = Vec::new();
        let id = require_string(object, "_id", &mut issues);
        let email = require_string(object, "email", &mut issues);
        let name = require_string(object, "name", &mut issues);
        let roles = require_string_array(object, "roles", &mut issues);
        let verification_token = require_string(object, "verificationToken", &mut issues);
        let is_verified = require_bool(object, "isVerified", &mut issues);
        let created_at = require_string(object, "createdAt", &mut issues);
        let updated_at = require_string(object, "updatedAt", &mut issues);

        match (
            id,
            email,
            name,
            roles,
            verification_token,
            is_verified,
            created_at,
            updated_at,
        ) {
            (
                Some(id),
                Some(email),
                Some(name),
                Some(roles),
                Some(verification_token),
                Some(is_verified),
                Some(created_at),
                Some(updated_at),
            ) if issues.is_empty() => Ok(Profile {
                id,
                email,
                name,
                roles,
                verification_token,
                is_verified,
                created_at,
                updated_at,
            }),
            _ => Err(issues),
        }
    }
}

// Passthrough for endpoints where the reply is only a success indicator.
pub struct AnyBodySchema;

impl ResponseSchema for AnyBodySchema {
    type Output = Value;

    fn validate(&self, body: &Value) -> Result<Value, Vec<FieldIssue>> {
        Ok(body.clone())
    }
}

fn require_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field) {
        None => {
            issues.push(FieldIssue::new(field, "required field is missing"));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            issues.push(FieldIssue::new(field, "expected a string"));
            None
        }
    }
}

fn require_non_empty_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match require_string(object, field, issues) {
        Some(value) if value.is_empty() => {
            issues.push(FieldIssue::new(field, "expected a non-empty string"));
            None
        }
        other => other,
    }
}

fn require_bool(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<bool> {
    match object.get(field) {
        None => {
            issues.push(FieldIssue::new(field, "required field is missing"));
            None
        }
        Some(Value::Bool(value)) => Some(*value),
        Some(_) => {
            issues.push(FieldIssue::new(field, "expected a boolean"));
            None
        }
    }
}

fn require_string_array(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Vec<String>> {
    let entries = match object.get(field) {
        None => {
            issues.push(FieldIssue::new(field, "required field is missing"));
            return None;
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            issues.push(FieldIssue::new(field, "expected an array"));
            return None;
        }
    };

    let mut values = Vec::with_capacity(entries.len());
    let mut valid = true;
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(value) => values.push(value.clone()),
            _ => {
                issues.push(FieldIssue::new(
                    format!("{field}[{index}]"),
                    "expected a string",
                ));
                valid = false;
            }
        }
    }

    valid.then_some(values)
}
