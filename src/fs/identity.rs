//! Owner and group name resolution

use nix::unistd::{Gid, Group, Uid, User};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;

/// Name shown when an id has no entry in the identity database
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Maps numeric owner and group ids to names
pub trait IdentityResolver {
    /// Returns the user name for `uid`, or `None` if it cannot be resolved
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Returns the group name for `gid`, or `None` if it cannot be resolved
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Resolver backed by the system user and group databases
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(user) => user.map(|u| u.name),
            Err(e) => {
                debug!(uid, error = %e, "User lookup failed");
                None
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        match Group::from_gid(Gid::from_raw(gid)) {
            Ok(group) => group.map(|g| g.name),
            Err(e) => {
                debug!(gid, error = %e, "Group lookup failed");
                None
            }
        }
    }
}

/// Memoizes another resolver for the lifetime of one listing.
///
/// Misses are cached as well, so an unmapped id is looked up once.
#[derive(Debug, Default)]
pub struct CachedIdentity<R> {
    inner: R,
    users: RefCell<HashMap<u32, Option<String>>>,
    groups: RefCell<HashMap<u32, Option<String>>>,
}

impl<R: IdentityResolver> CachedIdentity<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            users: RefCell::new(HashMap::new()),
            groups: RefCell::new(HashMap::new()),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: IdentityResolver> IdentityResolver for CachedIdentity<R> {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| self.inner.user_name(uid))
            .clone()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| self.inner.group_name(gid))
            .clone()
    }
}
