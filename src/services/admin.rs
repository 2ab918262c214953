use poise::serenity_prelude::UserId;
use std::collections::HashSet;

/// Decides who may run the mutating admin commands.
pub trait AdminCheck: Send + Sync {
    fn is_admin(&self, user_id: UserId) -> bool;
}

/// Allow-list loaded once from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticAdminList {
    ids: HashSet<UserId>,
}

impl StaticAdminList {
    pub fn new(ids: HashSet<UserId>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl AdminCheck for StaticAdminList {
    fn is_admin(&self, user_id: UserId) -> bool {
        self.ids.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_ids_are_admins() {
        let admins = StaticAdminList::new([UserId::new(1), UserId::new(2)].into_iter().collect());
        assert!(admins.is_admin(UserId::new(1)));
        assert!(!admins.is_admin(UserId::new(3)));
        assert!(!StaticAdminList::default().is_admin(UserId::new(1)));
    }
}
