//! The acting principal and the rules for what it may touch.

use crate::error::Error;

/// Which user ids a view or total request should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Records belonging to one user.
    User(i64),
    /// Records across every user. Admin only.
    AllUsers,
}

/// One authenticated console session.
///
/// Ordinary users are bound to their own records; the administrator may act
/// on any user and may target user id 0 as the "all users" sentinel.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    user_id: i64,
    is_admin: bool,
}

impl Session {
    pub fn new(user_id: i64, admin_id: i64) -> Self {
        Self {
            user_id,
            is_admin: user_id == admin_id,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Gate for update/delete/reset. Checked before any store call so a
    /// denied request never leaks or mutates anything.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.is_admin {
            Ok(())
        } else {
            Err(Error::AdminRequired)
        }
    }

    /// Resolves the scope a view or total request is allowed to cover.
    ///
    /// Ordinary users always see their own records, whatever target they
    /// asked for. Admins get the requested user, or every user when the
    /// target is the 0 sentinel.
    pub fn view_scope(&self, target_user_id: i64) -> Scope {
        if !self.is_admin {
            Scope::User(self.user_id)
        } else if target_user_id == 0 {
            Scope::AllUsers
        } else {
            Scope::User(target_user_id)
        }
    }
}
