//! Wire types returned by the identity gateway.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// OpenID Connect userinfo subset rendered by the navbar.
///
/// Every field is optional; the gateway may omit claims the provider did not
/// release.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,
    /// First name, preferred for greetings.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub picture: Option<String>,
}
