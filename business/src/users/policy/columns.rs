//! Column derivation for the users table.
//!
//! Two modes: without a meta-content selection the table shows a fixed
//! four-column baseline; with one, the caller-selected columns replace the
//! user-store and actions columns. That trade is contractual, not a bug.

use chrono::{DateTime, Utc};
use console_utils::humanize_date_difference;
use ustr::Ustr;

use crate::users::model::UserRecord;

/// Meta key whose column renders a humanized relative time.
pub const LAST_MODIFIED_KEY: &str = "meta.lastModified";

/// Meta key whose column renders the username without its store prefix.
pub const USERNAME_KEY: &str = "userName";

// Keys that duplicate the identity column and are never turned into
// dynamic columns.
const EXCLUDED_KEYS: [&str; 3] = ["name", "emails", "profileUrl"];

/// Caller-chosen optional columns, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaContentSelection {
    entries: Vec<(Ustr, String)>,
}

impl MetaContentSelection {
    pub fn new(entries: Vec<(Ustr, String)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Ustr, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a cell derives its content from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRule {
    Identity,
    IdentityProviderType,
    UserStoreSource,
    Actions,
    LastModified,
    UsernameTail,
    Attribute(Ustr),
}

/// Rendered cell content, ready for the table widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Identity {
        header: String,
        subtitle: String,
        avatar_key: String,
        avatar_url: Option<String>,
    },
    Text(String),
    /// Populated by the action renderer, not by this rule.
    Actions,
}

impl CellRule {
    pub fn cell(&self, user: &UserRecord, now: DateTime<Utc>) -> CellContent {
        match self {
            Self::Identity => identity_cell(user),
            Self::IdentityProviderType => {
                CellContent::Text(user.idp_type.clone().unwrap_or_else(|| "N/A".to_owned()))
            }
            Self::UserStoreSource => {
                CellContent::Text(user.user_source.clone().unwrap_or_else(|| "N/A".to_owned()))
            }
            Self::Actions => CellContent::Actions,
            Self::LastModified => CellContent::Text(
                user.last_modified
                    .map(|at| humanize_date_difference(at, now))
                    .unwrap_or_default(),
            ),
            Self::UsernameTail => CellContent::Text(user.short_username().to_owned()),
            Self::Attribute(key) => {
                CellContent::Text(user.attribute(key.as_str()).unwrap_or_default())
            }
        }
    }
}

/// One table column. Order within the derived sequence is the left-to-right
/// presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: Ustr,
    pub data_key: Ustr,
    pub title: String,
    pub rule: CellRule,
    /// Whether the column picker may toggle this column.
    pub allow_toggle_visibility: bool,
}

/// Derives the ordered column sequence.
///
/// A selection containing only excluded or unlabeled entries counts as
/// empty and yields the baseline.
pub fn derive_columns(selection: Option<&MetaContentSelection>) -> Vec<ColumnSpec> {
    let dynamic = selection.map(dynamic_columns).unwrap_or_default();
    if dynamic.is_empty() {
        return baseline_columns();
    }

    let mut columns = Vec::with_capacity(dynamic.len() + 2);
    columns.push(identity_column());
    columns.extend(dynamic);
    columns.push(idp_type_column());
    columns
}

fn baseline_columns() -> Vec<ColumnSpec> {
    vec![
        identity_column(),
        idp_type_column(),
        ColumnSpec {
            id: Ustr::from("userStore"),
            data_key: Ustr::from("userStore"),
            title: "User store".to_owned(),
            rule: CellRule::UserStoreSource,
            allow_toggle_visibility: false,
        },
        ColumnSpec {
            id: Ustr::from("actions"),
            data_key: Ustr::from("action"),
            title: String::new(),
            rule: CellRule::Actions,
            allow_toggle_visibility: false,
        },
    ]
}

fn identity_column() -> ColumnSpec {
    ColumnSpec {
        id: Ustr::from("name"),
        data_key: Ustr::from("name"),
        title: "User".to_owned(),
        rule: CellRule::Identity,
        allow_toggle_visibility: false,
    }
}

fn idp_type_column() -> ColumnSpec {
    ColumnSpec {
        id: Ustr::from("idpType"),
        data_key: Ustr::from("idpType"),
        title: "Identity provider type".to_owned(),
        rule: CellRule::IdentityProviderType,
        allow_toggle_visibility: false,
    }
}

fn dynamic_columns(selection: &MetaContentSelection) -> Vec<ColumnSpec> {
    selection
        .entries()
        .iter()
        .filter(|(key, label)| !EXCLUDED_KEYS.contains(&key.as_str()) && !label.is_empty())
        .map(|(key, label)| ColumnSpec {
            id: *key,
            data_key: *key,
            title: label.clone(),
            rule: match key.as_str() {
                LAST_MODIFIED_KEY => CellRule::LastModified,
                USERNAME_KEY => CellRule::UsernameTail,
                _ => CellRule::Attribute(*key),
            },
            allow_toggle_visibility: true,
        })
        .collect()
}

/// Identity cell: avatar plus a header/subtitle pair.
///
/// Provisioned records fall back to their first email (else the record id)
/// for the subtitle; local records use the store-stripped username. The
/// header concatenates given and family name verbatim, so a missing family
/// name leaves a trailing space.
fn identity_cell(user: &UserRecord) -> CellContent {
    let subtitle = if user.is_provisioned() {
        user.emails
            .first()
            .cloned()
            .unwrap_or_else(|| user.id.clone())
    } else {
        user.short_username().to_owned()
    };

    let header = match &user.given_name {
        Some(given) => format!("{given} {}", user.family_name.as_deref().unwrap_or_default()),
        None => subtitle.clone(),
    };

    CellContent::Identity {
        header,
        subtitle,
        avatar_key: user.short_username().to_owned(),
        avatar_url: user.profile_url.clone(),
    }
}
