//! Row action derivation for the users table.

use std::sync::Arc;

use crate::users::model::UserRecord;

use super::ActionPolicyContext;

/// Icon the table renders for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionIcon {
    Pencil,
    Eye,
    Trash,
}

/// What clicking an action means. The view layer owns the follow-up
/// (navigation, confirmation modal); the policy only names the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionIntent {
    /// Open the user's edit page, templated with the record id.
    NavigateToEdit,
    /// Open the delete confirmation flow for the record.
    RequestDelete,
}

/// What the operator may do with a row's edit action.
///
/// Resolved once per row and consumed by the hide decision, the icon choice
/// and the label choice together, so the three can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAffordance {
    /// The action is not rendered at all.
    Hidden,
    /// Rendered, but as a read-only view affordance.
    ViewOnly,
    Editable,
}

impl EditAffordance {
    pub fn resolve(ctx: &ActionPolicyContext, user: &UserRecord) -> Self {
        if !ctx.feature.read_enabled {
            return Self::Hidden;
        }

        let degraded = !ctx.auth.has_scopes(&ctx.feature.update_scopes)
            || !ctx.feature.update_enabled
            || ctx.realm.is_read_only_store(user.resolved_store());

        if degraded { Self::ViewOnly } else { Self::Editable }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn is_view_only(self) -> bool {
        matches!(self, Self::ViewOnly)
    }
}

/// One row-level action: a visibility predicate plus icon/label selectors
/// evaluated per record.
pub struct ActionSpec {
    pub id: &'static str,
    pub intent: ActionIntent,
    hidden: Box<dyn Fn(&UserRecord) -> bool>,
    icon: Box<dyn Fn(&UserRecord) -> ActionIcon>,
    label: Box<dyn Fn(&UserRecord) -> &'static str>,
}

impl ActionSpec {
    pub fn is_hidden(&self, user: &UserRecord) -> bool {
        (self.hidden)(user)
    }

    pub fn icon(&self, user: &UserRecord) -> ActionIcon {
        (self.icon)(user)
    }

    pub fn label(&self, user: &UserRecord) -> &'static str {
        (self.label)(user)
    }
}

fn delete_hidden(ctx: &ActionPolicyContext, user: &UserRecord) -> bool {
    !ctx.feature.delete_enabled
        || !ctx.auth.has_scopes(&ctx.feature.delete_scopes)
        || ctx.realm.is_read_only_store(user.resolved_store())
        || user.username == ctx.realm.admin_username
        || user.username == ctx.auth.authenticated_user
}

/// Builds the ordered row actions, or `None` when the table hides its
/// actions column entirely.
pub fn derive_actions(
    show_actions: bool,
    ctx: &Arc<ActionPolicyContext>,
) -> Option<Vec<ActionSpec>> {
    if !show_actions {
        return None;
    }

    Some(vec![
        ActionSpec {
            id: "edit",
            intent: ActionIntent::NavigateToEdit,
            hidden: Box::new({
                let ctx = Arc::clone(ctx);
                move |user| EditAffordance::resolve(&ctx, user).is_hidden()
            }),
            icon: Box::new({
                let ctx = Arc::clone(ctx);
                move |user| {
                    if EditAffordance::resolve(&ctx, user).is_view_only() {
                        ActionIcon::Eye
                    } else {
                        ActionIcon::Pencil
                    }
                }
            }),
            label: Box::new({
                let ctx = Arc::clone(ctx);
                move |user| {
                    if EditAffordance::resolve(&ctx, user).is_view_only() {
                        "View"
                    } else {
                        "Edit"
                    }
                }
            }),
        },
        ActionSpec {
            id: "delete",
            intent: ActionIntent::RequestDelete,
            hidden: Box::new({
                let ctx = Arc::clone(ctx);
                move |user| delete_hidden(&ctx, user)
            }),
            icon: Box::new(|_| ActionIcon::Trash),
            label: Box::new(|_| "Delete"),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::policy::{AuthorizationContext, RealmSettings, UsersFeature};
    use ustr::Ustr;

    fn permissive_ctx() -> ActionPolicyContext {
        ActionPolicyContext {
            feature: UsersFeature::default(),
            auth: AuthorizationContext {
                allowed_scopes: vec![
                    Ustr::from("internal_user_mgt_update"),
                    Ustr::from("internal_user_mgt_delete"),
                ],
                authenticated_user: Ustr::from("admin"),
            },
            realm: RealmSettings::default(),
        }
    }

    fn user(name: &str) -> UserRecord {
        UserRecord {
            id: "u-1".to_owned(),
            username: Ustr::from(name),
            ..Default::default()
        }
    }

    #[test]
    fn hidden_actions_column_yields_none() {
        let ctx = Arc::new(permissive_ctx());
        assert!(derive_actions(false, &ctx).is_none());
    }

    #[test]
    fn actions_come_in_edit_then_delete_order() {
        let ctx = Arc::new(permissive_ctx());
        let actions = derive_actions(true, &ctx).unwrap();

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].id, "edit");
        assert_eq!(actions[0].intent, ActionIntent::NavigateToEdit);
        assert_eq!(actions[1].id, "delete");
        assert_eq!(actions[1].intent, ActionIntent::RequestDelete);
    }

    #[test]
    fn full_permissions_render_an_editable_pencil() {
        let ctx = Arc::new(permissive_ctx());
        let actions = derive_actions(true, &ctx).unwrap();
        let jdoe = user("PRIMARY/jdoe");

        assert!(!actions[0].is_hidden(&jdoe));
        assert_eq!(actions[0].icon(&jdoe), ActionIcon::Pencil);
        assert_eq!(actions[0].label(&jdoe), "Edit");
    }

    #[test]
    fn missing_update_scope_degrades_edit_to_view() {
        let mut ctx = permissive_ctx();
        ctx.auth.allowed_scopes = vec![Ustr::from("internal_user_mgt_delete")];
        let ctx = Arc::new(ctx);
        let actions = derive_actions(true, &ctx).unwrap();
        let jdoe = user("PRIMARY/jdoe");

        assert!(!actions[0].is_hidden(&jdoe));
        assert_eq!(actions[0].icon(&jdoe), ActionIcon::Eye);
        assert_eq!(actions[0].label(&jdoe), "View");
    }

    #[test]
    fn read_only_store_degrades_edit_to_view() {
        let mut ctx = permissive_ctx();
        ctx.realm.read_only_user_stores = vec![Ustr::from("LDAP-RO")];
        let ctx = Arc::new(ctx);
        let actions = derive_actions(true, &ctx).unwrap();

        assert_eq!(actions[0].icon(&user("LDAP-RO/jdoe")), ActionIcon::Eye);
        assert_eq!(actions[0].icon(&user("PRIMARY/jdoe")), ActionIcon::Pencil);
    }

    #[test]
    fn disabled_read_feature_hides_the_edit_action() {
        let mut ctx = permissive_ctx();
        ctx.feature.read_enabled = false;
        let ctx = Arc::new(ctx);
        let actions = derive_actions(true, &ctx).unwrap();

        assert!(actions[0].is_hidden(&user("PRIMARY/jdoe")));
    }

    #[test]
    fn delete_is_hidden_without_the_delete_feature_or_scope() {
        let mut no_feature = permissive_ctx();
        no_feature.feature.delete_enabled = false;
        let actions = derive_actions(true, &Arc::new(no_feature)).unwrap();
        assert!(actions[1].is_hidden(&user("PRIMARY/jdoe")));

        let mut no_scope = permissive_ctx();
        no_scope.auth.allowed_scopes = vec![Ustr::from("internal_user_mgt_update")];
        let actions = derive_actions(true, &Arc::new(no_scope)).unwrap();
        assert!(actions[1].is_hidden(&user("PRIMARY/jdoe")));
    }

    #[test]
    fn delete_is_hidden_for_read_only_stores_and_the_realm_admin() {
        let mut ctx = permissive_ctx();
        ctx.realm.read_only_user_stores = vec![Ustr::from("LDAP-RO")];
        let actions = derive_actions(true, &Arc::new(ctx)).unwrap();

        assert!(actions[1].is_hidden(&user("LDAP-RO/jdoe")));
        assert!(actions[1].is_hidden(&user("admin")));
        assert!(!actions[1].is_hidden(&user("PRIMARY/jdoe")));
    }

    #[test]
    fn self_delete_is_hidden_even_with_every_permission() {
        let mut ctx = permissive_ctx();
        ctx.auth.authenticated_user = Ustr::from("PRIMARY/jdoe");
        let actions = derive_actions(true, &Arc::new(ctx)).unwrap();

        assert!(actions[1].is_hidden(&user("PRIMARY/jdoe")));
        assert!(!actions[1].is_hidden(&user("PRIMARY/other")));
    }

    // The hide decision and the icon/label degrade decision historically
    // re-derived the same condition in two places. They now share one
    // affordance; this guards against reintroducing the split.
    #[test]
    fn edit_hide_and_degrade_decisions_always_agree() {
        let jdoe = user("LDAP-RO/jdoe");

        for has_scope in [false, true] {
            for update_enabled in [false, true] {
                for store_read_only in [false, true] {
                    let mut ctx = permissive_ctx();
                    if !has_scope {
                        ctx.auth.allowed_scopes.clear();
                    }
                    ctx.feature.update_enabled = update_enabled;
                    if store_read_only {
                        ctx.realm.read_only_user_stores = vec![Ustr::from("LDAP-RO")];
                    }

                    let degraded = !has_scope || !update_enabled || store_read_only;
                    let affordance = EditAffordance::resolve(&ctx, &jdoe);
                    assert_eq!(affordance.is_view_only(), degraded);

                    let actions = derive_actions(true, &Arc::new(ctx)).unwrap();
                    let eye = actions[0].icon(&jdoe) == ActionIcon::Eye;
                    let view = actions[0].label(&jdoe) == "View";
                    assert_eq!(eye, view, "icon and label must derive together");
                    assert_eq!(eye, degraded);
                }
            }
        }
    }
}
