//! Session-scoped authorization and realm settings.

use std::any::Any;

use console_states::State;

use crate::users::policy::{ActionPolicyContext, AuthorizationContext, RealmSettings, UsersFeature};

/// The signed-in operator's authorization data plus realm settings.
///
/// Stored once in the `StateCtx` and turned into an explicit
/// [`ActionPolicyContext`] per render, so the policy functions themselves
/// never read ambient state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub auth: AuthorizationContext,
    pub feature: UsersFeature,
    pub realm: RealmSettings,
}

impl SessionState {
    pub fn policy_context(&self) -> ActionPolicyContext {
        ActionPolicyContext {
            feature: self.feature.clone(),
            auth: self.auth.clone(),
            realm: self.realm.clone(),
        }
    }
}

impl State for SessionState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
