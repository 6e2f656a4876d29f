//! Row models for the remote JSON API.
//!
//! # Design
//! These are the target types callers hand to `JsonClient::fetch`; the
//! client itself is generic over any `DeserializeOwned` type. The
//! mock-server crate defines its own mirrors independently, and the
//! integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub completed: bool,
}

/// A single user row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}
