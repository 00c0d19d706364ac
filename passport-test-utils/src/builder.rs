//! Declarative test builder.
//!
//! Fixtures are queued by the `with_*` methods and written in one pass by `build()`: the career
//! tables are created first, then rows are inserted, then artwork files are written.

use entity::{event, pilot, sortie};
use sea_orm::Schema;

use crate::{error::TestError, setup::TestSetup};

/// Rank artwork fixture: `(folder, name, files)`
type RankFixture = (i32, String, Vec<String>);

fn rank_fixture(folder: i32, name: &str, files: &[&str]) -> RankFixture {
    (
        folder,
        name.to_string(),
        files.iter().map(|file| file.to_string()).collect(),
    )
}

/// Builder for a temporary game installation.
///
/// Every build creates all career tables, so even `TestBuilder::new().build()` yields a valid
/// installation the passport accepts.
#[derive(Default)]
pub struct TestBuilder {
    // Database fixtures
    careers: Vec<(i32, i32, i32)>, // (career_id, player_id, extends)
    pilots: Vec<pilot::Model>,
    events: Vec<event::Model>,
    sorties: Vec<sortie::Model>,
    missions: Vec<(i32, String)>,
    squadrons: Vec<(i32, i32)>, // (squadron_id, config_id)

    // Filesystem fixtures
    squadron_infos: Vec<(i32, String)>,
    award_infos: Vec<(i64, String)>,
    standard_ranks: Vec<RankFixture>,
    mirrored_ranks: Vec<RankFixture>,
    modded_ranks: Vec<RankFixture>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a career segment; root segments use `extends = -1`.
    pub fn with_career(mut self, career_id: i32, player_id: i32, extends: i32) -> Self {
        self.careers.push((career_id, player_id, extends));
        self
    }

    /// Insert a pilot row, see [`factory::pilot`](crate::fixtures::factory::pilot).
    pub fn with_pilot(mut self, pilot: pilot::Model) -> Self {
        self.pilots.push(pilot);
        self
    }

    /// Insert a career event such as a promotion or award.
    pub fn with_event(mut self, event: event::Model) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_sortie(mut self, sortie: sortie::Model) -> Self {
        self.sorties.push(sortie);
        self
    }

    /// Insert a mission with its template name.
    pub fn with_mission(mut self, mission_id: i32, template: &str) -> Self {
        self.missions.push((mission_id, template.to_string()));
        self
    }

    /// Insert a squadron pointing at the artwork folder `config_id`.
    pub fn with_squadron(mut self, squadron_id: i32, config_id: i32) -> Self {
        self.squadrons.push((squadron_id, config_id));
        self
    }

    /// Write a squadron's locale file with raw `contents`.
    ///
    /// The game's format is a `*`-prefixed CSV record ending in the short name, for example
    /// `*12,"Jagdgeschwader 52","JG 52"`.
    pub fn with_squadron_info(mut self, config_id: i32, contents: &str) -> Self {
        self.squadron_infos.push((config_id, contents.to_string()));
        self
    }

    /// Write an award's locale file naming it `name`.
    pub fn with_award_info(mut self, key: i64, name: &str) -> Self {
        self.award_infos.push((key, name.to_string()));
        self
    }

    /// Write stock rank artwork under the static root.
    ///
    /// # Arguments
    /// - `folder` - Rank folder, `country * 1000 + rank`
    /// - `name` - English rank name
    /// - `files` - Image files to create, e.g. `big.png`
    pub fn with_standard_rank(mut self, folder: i32, name: &str, files: &[&str]) -> Self {
        self.standard_ranks.push(rank_fixture(folder, name, files));
        self
    }

    /// Write rank artwork into the mirror of the game's modded ranks.
    pub fn with_mirrored_rank(mut self, folder: i32, name: &str, files: &[&str]) -> Self {
        self.mirrored_ranks.push(rank_fixture(folder, name, files));
        self
    }

    /// Write rank artwork into the game installation's mod folder.
    pub fn with_modded_rank(mut self, folder: i32, name: &str, files: &[&str]) -> Self {
        self.modded_ranks.push(rank_fixture(folder, name, files));
        self
    }

    /// Build the installation and return the [`TestSetup`].
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - The database is open and every fixture is written
    /// - `Err(TestError)` - Creating a table, inserting a row or writing a file failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        setup
            .with_tables(vec![
                schema.create_table_from_entity(entity::prelude::Career),
                schema.create_table_from_entity(entity::prelude::Pilot),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::Sortie),
                schema.create_table_from_entity(entity::prelude::Mission),
                schema.create_table_from_entity(entity::prelude::Squadron),
            ])
            .await?;

        // 2. Insert database fixtures
        let career = setup.career();

        for (career_id, player_id, extends) in self.careers {
            career.insert_career(career_id, player_id, extends).await?;
        }

        for pilot in self.pilots {
            career.insert_pilot(pilot).await?;
        }

        for event in self.events {
            career.insert_event(event).await?;
        }

        for (mission_id, template) in self.missions {
            career.insert_mission(mission_id, &template).await?;
        }

        for sortie in self.sorties {
            career.insert_sortie(sortie).await?;
        }

        for (squadron_id, config_id) in self.squadrons {
            career.insert_squadron(squadron_id, config_id).await?;
        }

        // 3. Write artwork
        let assets = setup.assets();

        for (config_id, contents) in self.squadron_infos {
            assets.write_squadron_info(config_id, &contents).await?;
        }

        for (key, name) in self.award_infos {
            assets.write_award_info(key, &name).await?;
        }

        for (folder, name, files) in self.standard_ranks {
            let files: Vec<&str> = files.iter().map(String::as_str).collect();
            assets.write_standard_rank(folder, &name, &files).await?;
        }

        for (folder, name, files) in self.mirrored_ranks {
            let files: Vec<&str> = files.iter().map(String::as_str).collect();
            assets.write_mirrored_rank(folder, &name, &files).await?;
        }

        for (folder, name, files) in self.modded_ranks {
            let files: Vec<&str> = files.iter().map(String::as_str).collect();
            assets.write_modded_rank(folder, &name, &files).await?;
        }

        Ok(setup)
    }
}
