//! Browsing session: identity slot plus cart.
//!
//! The identity collaborator supplies an opaque authenticated user (or "no
//! user" for guest browsing). The cart does not condition its behavior on
//! identity: the snapshot is keyed per client storage instance, not per
//! user, so signing out and back in as someone else on a shared device
//! surfaces the previous user's cart. That is a known defect inherited
//! from the storage keying, kept deliberately until stakeholders decide on
//! per-user scoping; it is not silently "fixed" here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use paper_lantern_core::{Email, UserId};

use crate::persist::SnapshotStore;
use crate::store::CartStore;

/// Session-stored user identity.
///
/// Minimal data to identify the signed-in user; the identity provider is
/// the authority on everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Stable user identifier.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// One browsing session: an optional signed-in user and the session's cart.
#[derive(Debug)]
pub struct Session<S> {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    user: Option<CurrentUser>,
    cart: CartStore<S>,
}

impl<S: SnapshotStore> Session<S> {
    /// Begin a guest session, restoring the cart from the given store.
    pub fn begin(persistence: S) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            user: None,
            cart: CartStore::restore(persistence),
        }
    }

    /// Record a signed-in user. The cart is intentionally left untouched
    /// (see the module docs on cross-user leakage).
    pub fn sign_in(&mut self, user: CurrentUser) {
        info!(user_id = %user.id, "user signed in");
        self.user = Some(user);
    }

    /// Drop the signed-in user, returning to guest browsing. The cart
    /// survives sign-out.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "user signed out");
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Unique id of this session.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// When this session began.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The session's cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable access to the session's cart.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }
}
