//! Presentation policy for the users table.
//!
//! Pure derivations: given the fetched records and explicit configuration
//! (granted scopes, feature toggles, read-only stores), decide which columns
//! the table shows, which row actions exist, and which placeholder replaces
//! an empty table. Nothing here touches the network or ambient state; every
//! input arrives as an argument and everything is recomputed per render.

pub mod actions;
pub mod columns;
pub mod placeholder;

use ustr::Ustr;

pub use actions::{ActionIcon, ActionIntent, ActionSpec, EditAffordance, derive_actions};
pub use columns::{
    CellContent, CellRule, ColumnSpec, LAST_MODIFIED_KEY, MetaContentSelection, USERNAME_KEY,
    derive_columns,
};
pub use placeholder::{PlaceholderKind, select_placeholder};

/// Scopes granted to the signed-in operator, plus who they are.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationContext {
    pub allowed_scopes: Vec<Ustr>,
    pub authenticated_user: Ustr,
}

impl AuthorizationContext {
    /// True when every scope in `required` is granted. An empty requirement
    /// is trivially granted.
    pub fn has_scopes(&self, required: &[Ustr]) -> bool {
        required.iter().all(|scope| self.allowed_scopes.contains(scope))
    }
}

/// Feature toggles and scope requirements for the users feature.
#[derive(Debug, Clone)]
pub struct UsersFeature {
    pub read_enabled: bool,
    pub update_enabled: bool,
    pub delete_enabled: bool,
    pub update_scopes: Vec<Ustr>,
    pub delete_scopes: Vec<Ustr>,
}

impl Default for UsersFeature {
    fn default() -> Self {
        Self {
            read_enabled: true,
            update_enabled: true,
            delete_enabled: true,
            update_scopes: vec![Ustr::from("internal_user_mgt_update")],
            delete_scopes: vec![Ustr::from("internal_user_mgt_delete")],
        }
    }
}

/// Realm-level settings the action policy needs.
#[derive(Debug, Clone)]
pub struct RealmSettings {
    pub admin_username: Ustr,
    pub read_only_user_stores: Vec<Ustr>,
}

impl Default for RealmSettings {
    fn default() -> Self {
        Self {
            admin_username: Ustr::from("admin"),
            read_only_user_stores: Vec::new(),
        }
    }
}

impl RealmSettings {
    pub fn is_read_only_store(&self, store: &str) -> bool {
        self.read_only_user_stores
            .iter()
            .any(|name| name.as_str() == store)
    }
}

/// Everything row-action derivation needs, passed explicitly per render.
#[derive(Debug, Clone, Default)]
pub struct ActionPolicyContext {
    pub feature: UsersFeature,
    pub auth: AuthorizationContext,
    pub realm: RealmSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_scopes_requires_every_listed_scope() {
        let auth = AuthorizationContext {
            allowed_scopes: vec![Ustr::from("internal_user_mgt_update")],
            authenticated_user: Ustr::from("admin"),
        };

        assert!(auth.has_scopes(&[Ustr::from("internal_user_mgt_update")]));
        assert!(auth.has_scopes(&[]));
        assert!(!auth.has_scopes(&[
            Ustr::from("internal_user_mgt_update"),
            Ustr::from("internal_user_mgt_delete"),
        ]));
    }

    #[test]
    fn read_only_store_match_is_exact() {
        let realm = RealmSettings {
            admin_username: Ustr::from("admin"),
            read_only_user_stores: vec![Ustr::from("LDAP-RO")],
        };

        assert!(realm.is_read_only_store("LDAP-RO"));
        assert!(!realm.is_read_only_store("ldap-ro"));
        assert!(!realm.is_read_only_store("PRIMARY"));
    }
}
