use http::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ApiError;

/// Failures raised while servicing SCIM resource requests
///
/// Each variant fixes its own status code and message code. New failure
/// kinds are added here as variants, not as conditional branches at the
/// reporting boundary.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No user resource with the given id
    #[error("user {user_id} does not exist")]
    UserNotFound { user_id: String },

    /// No group resource with the given id
    #[error("group {group_id} does not exist")]
    GroupNotFound { group_id: String },

    /// A user with the same unique attribute already exists
    #[error("user {user_name} conflicts with existing resource {conflicting_id}")]
    UserConflict {
        user_name: String,
        conflicting_id: String,
    },

    /// A group with the same display name already exists
    #[error("group {display_name} conflicts with existing resource {conflicting_id}")]
    GroupConflict {
        display_name: String,
        conflicting_id: String,
    },

    /// Attribute value failed schema validation
    #[error("invalid value for attribute {attribute}: {reason}")]
    InvalidValue { attribute: String, reason: String },

    /// Query filter could not be parsed
    #[error("invalid filter: {filter}")]
    InvalidFilter { filter: String },

    /// Patch path does not address a known attribute
    #[error("invalid attribute path: {path}")]
    InvalidPath { path: String },

    /// Attempt to modify a read-only attribute
    #[error("attribute {attribute} is read-only")]
    Mutability { attribute: String },

    /// Query matched more results than the server is willing to return
    #[error("query matched {count} results, limit is {limit}")]
    TooManyResults { count: usize, limit: usize },

    /// Request lacks valid authentication credentials
    #[error("authentication required")]
    Unauthorized,

    /// Authenticated client may not access the resource
    #[error("access to {resource} is forbidden")]
    Forbidden { resource: String },
}

impl ApiError for ResourceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound { .. } | Self::GroupNotFound { .. } => StatusCode::NOT_FOUND,
            Self::UserConflict { .. } | Self::GroupConflict { .. } => StatusCode::CONFLICT,
            Self::InvalidValue { .. }
            | Self::InvalidFilter { .. }
            | Self::InvalidPath { .. }
            | Self::Mutability { .. }
            | Self::TooManyResults { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }

    fn error_name(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "UserNotFoundException",
            Self::GroupNotFound { .. } => "GroupNotFoundException",
            Self::UserConflict { .. } => "UserConflictException",
            Self::GroupConflict { .. } => "GroupConflictException",
            Self::InvalidValue { .. } => "InvalidValueException",
            Self::InvalidFilter { .. } => "InvalidFilterException",
            Self::InvalidPath { .. } => "InvalidPathException",
            Self::Mutability { .. } => "MutabilityException",
            Self::TooManyResults { .. } => "TooManyResultsException",
            Self::Unauthorized => "UnauthorizedException",
            Self::Forbidden { .. } => "ForbiddenException",
        }
    }

    fn message_code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "user.not_found",
            Self::GroupNotFound { .. } => "group.not_found",
            Self::UserConflict { .. } => "user.conflict",
            Self::GroupConflict { .. } => "group.conflict",
            Self::InvalidValue { .. } => "value.invalid",
            Self::InvalidFilter { .. } => "filter.invalid",
            Self::InvalidPath { .. } => "path.invalid",
            Self::Mutability { .. } => "attribute.read_only",
            Self::TooManyResults { .. } => "query.too_many_results",
            Self::Unauthorized => "auth.required",
            Self::Forbidden { .. } => "auth.forbidden",
        }
    }

    fn message_args(&self) -> Vec<String> {
        match self {
            Self::UserNotFound { user_id } => vec![user_id.clone()],
            Self::GroupNotFound { group_id } => vec![group_id.clone()],
            Self::UserConflict { user_name, .. } => vec![user_name.clone()],
            Self::GroupConflict { display_name, .. } => vec![display_name.clone()],
            Self::InvalidValue { attribute, reason } => vec![attribute.clone(), reason.clone()],
            Self::InvalidFilter { filter } => vec![filter.clone()],
            Self::InvalidPath { path } => vec![path.clone()],
            Self::Mutability { attribute } => vec![attribute.clone()],
            Self::TooManyResults { count, limit } => vec![count.to_string(), limit.to_string()],
            Self::Unauthorized => Vec::new(),
            Self::Forbidden { resource } => vec![resource.clone()],
        }
    }

    fn user_info(&self) -> Option<Map<String, Value>> {
        match self {
            Self::UserConflict { conflicting_id, .. } | Self::GroupConflict { conflicting_id, .. } => {
                let mut info = Map::new();
                info.insert("conflictingId".to_owned(), Value::String(conflicting_id.clone()));
                Some(info)
            }
            Self::TooManyResults { count, limit } => {
                let mut info = Map::new();
                info.insert("count".to_owned(), Value::from(*count));
                info.insert("limit".to_owned(), Value::from(*limit));
                Some(info)
            }
            _ => None,
        }
    }
}
