//! User records and their SCIM2 wire representation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use ustr::Ustr;

/// Store name assumed when a username carries no `store/` prefix.
pub const PRIMARY_USER_STORE: &str = "PRIMARY";

/// Where a user record came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserOrigin {
    /// Created in one of this deployment's user stores.
    #[default]
    Local,

    /// Provisioned by an external identity source.
    Provisioned { source_id: String },
}

/// A user row as the presentation policy sees it.
///
/// Immutable from the policy's perspective; the page owns the collection and
/// supplies fresh records on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserRecord {
    pub id: String,
    /// May encode a compound `store/name` path.
    pub username: Ustr,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub emails: Vec<String>,
    pub profile_url: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    /// Identity-provider type from the vendor extension, when present.
    pub idp_type: Option<String>,
    /// Source user-store name from the vendor extension, when present.
    pub user_source: Option<String>,
    pub origin: UserOrigin,
}

impl UserRecord {
    /// The username without its `store/` prefix, or the whole username when
    /// it is not a compound path.
    pub fn short_username(&self) -> &str {
        self.username
            .as_str()
            .split_once('/')
            .map_or(self.username.as_str(), |(_, name)| name)
    }

    /// The user-store name encoded in the username, defaulting to `PRIMARY`.
    pub fn resolved_store(&self) -> &str {
        self.username
            .as_str()
            .split_once('/')
            .map_or(PRIMARY_USER_STORE, |(store, _)| store)
    }

    pub fn is_provisioned(&self) -> bool {
        matches!(self.origin, UserOrigin::Provisioned { .. })
    }

    /// Generic attribute lookup for caller-selected dynamic columns.
    pub fn attribute(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "userName" => Some(self.username.to_string()),
            "emails" => self.emails.first().cloned(),
            _ => None,
        }
    }
}

/// SCIM2 list response for `GET /Users`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    #[serde(rename = "Resources", default)]
    pub resources: Vec<ScimUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScimUser {
    pub id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default)]
    pub name: Option<ScimName>,
    #[serde(default)]
    pub emails: Vec<ScimEmail>,
    #[serde(rename = "profileUrl", default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub meta: Option<ScimMeta>,
    #[serde(rename = "urn:scim:wso2:schema", default)]
    pub extension: Option<ScimSystemExtension>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScimName {
    #[serde(rename = "givenName", default)]
    pub given_name: Option<String>,
    #[serde(rename = "familyName", default)]
    pub family_name: Option<String>,
}

/// SCIM emails appear both as bare strings and as `{ "value": ... }` objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScimEmail {
    Plain(String),
    Typed { value: String },
}

impl ScimEmail {
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Typed { value } => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScimMeta {
    #[serde(rename = "lastModified", default)]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Vendor extension block carrying provisioning metadata.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScimSystemExtension {
    #[serde(rename = "idpType", default)]
    pub idp_type: Option<String>,
    #[serde(rename = "userSource", default)]
    pub user_source: Option<String>,
    #[serde(rename = "userSourceId", default)]
    pub user_source_id: Option<String>,
}

impl From<ScimUser> for UserRecord {
    fn from(user: ScimUser) -> Self {
        let extension = user.extension.unwrap_or_default();
        let origin = match extension.user_source_id {
            Some(source_id) => UserOrigin::Provisioned { source_id },
            None => UserOrigin::Local,
        };
        let name = user.name.unwrap_or_default();

        Self {
            id: user.id,
            username: Ustr::from(&user.user_name),
            given_name: name.given_name,
            family_name: name.family_name,
            emails: user.emails.iter().map(|e| e.value().to_owned()).collect(),
            profile_url: user.profile_url,
            last_modified: user.meta.and_then(|meta| meta.last_modified),
            idp_type: extension.idp_type,
            user_source: extension.user_source,
            origin,
        }
    }
}
