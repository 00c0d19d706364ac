use std::collections::{BTreeSet, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// `extends` value of a career segment that does not continue another one.
pub const ROOT_EXTENDS: i32 = -1;

pub struct CareerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CareerRepository<'a, C> {
    /// Creates a new instance of [`CareerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every career segment ordered by ID
    pub async fn all(&self) -> Result<Vec<entity::career::Model>, DbErr> {
        entity::prelude::Career::find()
            .order_by_asc(entity::career::Column::Id)
            .all(self.db)
            .await
    }

    /// First career segment played by the given pilot
    pub async fn find_by_player_id(
        &self,
        player_id: i32,
    ) -> Result<Option<entity::career::Model>, DbErr> {
        entity::prelude::Career::find()
            .filter(entity::career::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::career::Column::Id)
            .one(self.db)
            .await
    }
}

/// The career segments linked to one starting segment through `extends`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerChain {
    /// Ancestors from the root down to the starting segment, then every transitive descendant
    /// ordered by ID
    pub career_ids: Vec<i32>,
    /// The newest segment of the chain
    pub tip: i32,
}

impl CareerChain {
    /// Walks the career graph up and down from `start`.
    ///
    /// The tip is the last chain member no segment extends, or the first member when every
    /// member is extended (a cycle).
    pub fn resolve(careers: &[entity::career::Model], start: i32) -> Self {
        let mut ancestors = vec![start];
        let mut seen: HashSet<i32> = HashSet::from([start]);

        let mut current = start;
        while let Some(parent) = careers
            .iter()
            .find(|career| career.id == current)
            .map(|career| career.extends)
            .filter(|extends| *extends != ROOT_EXTENDS)
        {
            if !seen.insert(parent) {
                break;
            }
            ancestors.push(parent);
            current = parent;
        }
        ancestors.reverse();

        let mut descendants = BTreeSet::new();
        loop {
            let found: Vec<i32> = careers
                .iter()
                .filter(|career| seen.contains(&career.extends) && !seen.contains(&career.id))
                .map(|career| career.id)
                .collect();

            if found.is_empty() {
                break;
            }

            for id in found {
                seen.insert(id);
                descendants.insert(id);
            }
        }

        let mut career_ids = ancestors;
        career_ids.extend(descendants);

        let extended: HashSet<i32> = careers
            .iter()
            .map(|career| career.extends)
            .filter(|extends| *extends != ROOT_EXTENDS)
            .collect();

        let tip = career_ids
            .iter()
            .rev()
            .find(|id| !extended.contains(id))
            .or_else(|| career_ids.first())
            .copied()
            .unwrap_or(start);

        Self { career_ids, tip }
    }

    /// Player (pilot) IDs of the chain's segments in chain order
    pub fn pilot_ids(&self, careers: &[entity::career::Model]) -> Vec<i32> {
        self.career_ids
            .iter()
            .filter_map(|id| careers.iter().find(|career| career.id == *id))
            .map(|career| career.player_id)
            .collect()
    }

    /// Player ID of the tip segment
    pub fn tip_pilot_id(&self, careers: &[entity::career::Model]) -> Option<i32> {
        careers
            .iter()
            .find(|career| career.id == self.tip)
            .map(|career| career.player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(id: i32, player_id: i32, extends: i32) -> entity::career::Model {
        entity::career::Model {
            id,
            player_id,
            extends,
        }
    }

    mod resolve {
        use super::*;

        /// Expect a lone root segment to be its own tip
        #[test]
        fn single_segment() {
            let careers = vec![career(1, 10, -1)];

            let chain = CareerChain::resolve(&careers, 1);

            assert_eq!(chain.career_ids, vec![1]);
            assert_eq!(chain.tip, 1);
            assert_eq!(chain.pilot_ids(&careers), vec![10]);
        }

        /// Expect the same chain whether resolved from the root or from the middle
        #[test]
        fn walks_up_and_down() {
            let careers = vec![
                career(1, 10, -1),
                career(2, 20, 1),
                career(3, 30, 2),
                career(4, 40, -1),
            ];

            let from_root = CareerChain::resolve(&careers, 1);
            let from_middle = CareerChain::resolve(&careers, 2);

            assert_eq!(from_root.career_ids, vec![1, 2, 3]);
            assert_eq!(from_root.tip, 3);
            assert_eq!(from_middle.career_ids, vec![1, 2, 3]);
            assert_eq!(from_middle.tip, 3);
            assert_eq!(from_root.tip_pilot_id(&careers), Some(30));
        }

        /// Expect the later branch to be the tip when a segment is continued twice
        #[test]
        fn branching_picks_last_tip() {
            let careers = vec![career(1, 10, -1), career(5, 50, 1), career(3, 30, 1)];

            let chain = CareerChain::resolve(&careers, 1);

            assert_eq!(chain.career_ids, vec![1, 3, 5]);
            assert_eq!(chain.tip, 5);
        }

        /// Expect a cycle to terminate and fall back to the first member
        #[test]
        fn cycle_terminates() {
            let careers = vec![career(1, 10, 2), career(2, 20, 1)];

            let chain = CareerChain::resolve(&careers, 1);

            assert_eq!(chain.career_ids, vec![2, 1]);
            assert_eq!(chain.tip, 2);
        }
    }
}
