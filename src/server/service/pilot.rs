use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::pilot::{
        AwardDto, PilotDto, PilotInfoDto, PilotStatsDto, PromotionDto, ServiceRecordDto,
        SortieDto,
    },
    server::{
        config::Config,
        data::{
            assets::AssetCatalog,
            career::{CareerChain, CareerRepository, ROOT_EXTENDS},
            event::EventRepository,
            mission::MissionRepository,
            pilot::PilotRepository,
            sortie::SortieRepository,
            squadron::SquadronRepository,
        },
        error::{pilot::PilotError, Error},
        service::photo::PhotoService,
        util::{
            date::event_date,
            description::{PilotDescription, UNKNOWN},
            sortie, stats,
        },
    },
};

/// A pilot description resolved to its career chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPilot {
    pub chain: CareerChain,
    /// Pilots of every chain segment in chain order
    pub pilot_ids: Vec<i32>,
    /// Pilot of the newest segment
    pub tip_pilot_id: i32,
}

pub struct PilotService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
    assets: AssetCatalog,
}

impl<'a> PilotService<'a> {
    /// Creates a new instance of [`PilotService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self {
            db,
            config,
            assets: AssetCatalog::new(&config.static_root, &config.charactersranks_dir),
        }
    }

    async fn squadron_name(&self, squadron_id: Option<i32>) -> Result<String, Error> {
        let Some(squadron_id) = squadron_id else {
            return Ok(UNKNOWN.to_string());
        };

        match SquadronRepository::new(self.db)
            .find_config_id(squadron_id)
            .await?
        {
            Some(config_id) => Ok(self.assets.squadron_name(config_id).await),
            None => Ok(UNKNOWN.to_string()),
        }
    }

    /// Lists one roster entry per career, describing the pilot of the career's newest segment.
    ///
    /// Careers whose newest segment has no pilot row are skipped.
    pub async fn list_pilots(&self) -> Result<Vec<PilotDto>, Error> {
        let pilot_repository = PilotRepository::new(self.db);
        let careers = CareerRepository::new(self.db).all().await?;

        let mut pilots = Vec::new();
        for root in careers.iter().filter(|c| c.extends == ROOT_EXTENDS) {
            let chain = CareerChain::resolve(&careers, root.id);
            let Some(tip_pilot_id) = chain.tip_pilot_id(&careers) else {
                continue;
            };
            let Some(pilot) = pilot_repository.find_identity(tip_pilot_id).await? else {
                tracing::debug!(
                    career_id = root.id,
                    pilot_id = tip_pilot_id,
                    "Skipping career without a pilot row"
                );
                continue;
            };

            let description = PilotDescription(&pilot.description);

            pilots.push(PilotDto {
                display: description.full_name(),
                country: description.country_name().to_string(),
                squadron: self.squadron_name(pilot.squadron_id).await?,
                pilot_id: Some(i64::from(pilot.id)),
                root_career_id: Some(i64::from(root.id)),
                desc: pilot.description,
            });
        }

        Ok(pilots)
    }

    /// Resolves a pilot description to its career chain.
    ///
    /// # Returns
    /// - `Ok(ResolvedPilot)` - The chain and its pilots
    /// - `Err(Error::PilotError(PilotError::MissingDesc))` - Empty description
    /// - `Err(Error::PilotError(PilotError::PilotNotFound))` - No pilot row has the description
    /// - `Err(Error::PilotError(PilotError::CareerNotFound))` - The pilot has no career segment
    pub async fn resolve(&self, desc: &str) -> Result<ResolvedPilot, Error> {
        if desc.is_empty() {
            return Err(PilotError::MissingDesc.into());
        }

        let pilot_id = PilotRepository::new(self.db)
            .find_id_by_description(desc)
            .await?
            .ok_or_else(|| PilotError::PilotNotFound(desc.to_string()))?;

        let career_repository = CareerRepository::new(self.db);
        let start = career_repository
            .find_by_player_id(pilot_id)
            .await?
            .ok_or(PilotError::CareerNotFound(pilot_id))?;

        let careers = career_repository.all().await?;
        let chain = CareerChain::resolve(&careers, start.id);
        let tip_pilot_id = chain
            .tip_pilot_id(&careers)
            .ok_or(PilotError::CareerNotFound(pilot_id))?;
        let pilot_ids = chain.pilot_ids(&careers);

        Ok(ResolvedPilot {
            chain,
            pilot_ids,
            tip_pilot_id,
        })
    }

    /// Builds the passport page: identity of the newest pilot plus promotions and awards of the
    /// whole career, oldest first.
    ///
    /// Awards whose name mentions rubles (prize money) are left out.
    pub async fn service_record(&self, desc: &str) -> Result<ServiceRecordDto, Error> {
        let resolved = self.resolve(desc).await?;

        let pilot = PilotRepository::new(self.db)
            .find_identity(resolved.tip_pilot_id)
            .await?
            .ok_or_else(|| PilotError::PilotNotFound(desc.to_string()))?;

        let description = PilotDescription(&pilot.description);
        let country_id = description.country_id();
        let (first_name, last_name) = description.split_name();

        let rank_name = match pilot.rank_id {
            Some(rank_id) => self.assets.rank_name(country_id, rank_id).await,
            None => UNKNOWN.to_string(),
        };

        let mut promotions = Vec::new();
        let mut awards = Vec::new();
        for event in EventRepository::new(self.db)
            .service_events(&resolved.pilot_ids)
            .await?
        {
            let (date, sortable_date) = event_date(event.date.as_deref());

            match event.event_type {
                entity::event::PROMOTION => {
                    let Some(rank_id) = event.rank_id else {
                        continue;
                    };

                    promotions.push(PromotionDto {
                        desc: self.assets.rank_name(country_id, rank_id).await,
                        date,
                        img: Some(
                            self.assets
                                .rank_image(country_id, rank_id, &sortable_date)
                                .await,
                        ),
                    });
                }
                entity::event::AWARD => {
                    let Some(key) = event.tpar2 else {
                        continue;
                    };

                    let name = self.assets.award_name(key).await;
                    if name.to_lowercase().contains("rubles") {
                        continue;
                    }

                    awards.push(AwardDto {
                        desc: name,
                        date,
                        tpar2: Some(key),
                    });
                }
                _ => {}
            }
        }

        let photo_url = PhotoService::new(&self.config.pilot_photo_dir)
            .photo_url(&pilot.description)
            .await;

        Ok(ServiceRecordDto {
            pilot_info: PilotInfoDto {
                full_name: description.full_name(),
                first_name,
                last_name,
                birth_date: description.birth_date(),
                birth_country: description.country_name().to_string(),
                pilot_id: Some(i64::from(pilot.id)),
                squadron: self.squadron_name(pilot.squadron_id).await?,
                rank_name,
                photo_url,
            },
            promotions,
            awards,
        })
    }

    /// Lifetime statistics of the career's newest pilot in display order
    pub async fn stats(&self, desc: &str) -> Result<PilotStatsDto, Error> {
        let resolved = self.resolve(desc).await?;
        let pilot_repository = PilotRepository::new(self.db);

        let row = pilot_repository
            .find_row(resolved.tip_pilot_id)
            .await?
            .ok_or_else(|| PilotError::PilotNotFound(desc.to_string()))?;
        let columns = pilot_repository.column_names().await?;

        Ok(stats::build_stats(&columns, &row))
    }

    /// Every sortie of the career, oldest first.
    ///
    /// A sortie table the query cannot read yields an empty logbook rather than an error.
    pub async fn sorties(&self, desc: &str) -> Result<Vec<SortieDto>, Error> {
        let resolved = self.resolve(desc).await?;

        let rows = match SortieRepository::new(self.db)
            .rows_for_pilots(&resolved.pilot_ids)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Sorties query failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mission_repository = MissionRepository::new(self.db);
        let mut templates: HashMap<i64, Option<String>> = HashMap::new();

        let mut sorties = Vec::with_capacity(rows.len());
        for row in rows {
            let mission_id = row.get("missionId").and_then(serde_json::Value::as_i64);

            let template = match mission_id {
                Some(mission_id) => {
                    if !templates.contains_key(&mission_id) {
                        let template = match i32::try_from(mission_id) {
                            Ok(id) => mission_repository.find_template(id).await?,
                            Err(_) => None,
                        };
                        templates.insert(mission_id, template);
                    }
                    templates.get(&mission_id).cloned().flatten()
                }
                None => None,
            };

            sorties.push(sortie::summarize(&row, template.as_deref()));
        }

        Ok(sorties)
    }
}

#[cfg(test)]
mod tests {
    use passport_test_utils::prelude::*;

    use super::*;

    static IVAN: &str = "fullname=Ivan%20Petrov&birthCountryInfo=101&birthDate=1920.03.15";
    static IVAN_LATER: &str = "fullname=Ivan%20Petrov&birthCountryInfo=101&birthDate=1920.03.15&v=2";
    static HANS: &str = "fullname=Hans%20Weber&birthCountryInfo=201";

    fn config(test: &TestSetup) -> Config {
        Config::from_lookup(|key| test.env(key)).expect("test config")
    }

    /// Two careers: Ivan continued once (careers 1 -> 2), Hans without continuation (career 3)
    async fn setup() -> Result<TestSetup, TestError> {
        TestBuilder::new()
            .with_career(1, 10, -1)
            .with_career(2, 11, 1)
            .with_career(3, 20, -1)
            .with_pilot(entity::pilot::Model {
                squadron_id: Some(5),
                rank_id: Some(2),
                ..factory::pilot(10, IVAN)
            })
            .with_pilot(entity::pilot::Model {
                squadron_id: Some(5),
                rank_id: Some(3),
                sorties: Some(4),
                good_sorties: Some(3),
                flight_time: Some(3661),
                kill_truck: Some(2),
                ..factory::pilot(11, IVAN_LATER)
            })
            .with_pilot(factory::pilot(20, HANS))
            .with_squadron(5, 1005)
            .with_squadron_info(1005, "*1005,\"4th Guards Fighter Regiment\",\"4 GIAP\"")
            .with_standard_rank(101002, "Leytenant", &["big.png"])
            .with_standard_rank(101003, "Starshiy Leytenant", &["big.png", "big.1943.png"])
            .with_award_info(4, "Order of the Red Star")
            .with_award_info(9, "5000 Rubles")
            .with_event(factory::promotion(1, 10, "1942.11.19 06:30:00", 2))
            .with_event(factory::award(2, 10, "1942.12.01 12:00:00", 9))
            .with_event(factory::promotion(3, 11, "1943.02.01 06:30:00", 3))
            .with_event(factory::award(4, 11, "1943.03.08 12:00:00", 4))
            .with_mission(1, "free-hunt_p01@east")
            .with_sortie(entity::sortie::Model {
                kill_light_plane: Some(1),
                mission_id: Some(1),
                flight_time: Some(3900),
                ..factory::sortie(1, 11, "1943.02.02 08:00:00")
            })
            .with_sortie(factory::sortie(2, 10, "1942.11.20 08:00:00"))
            .build()
            .await
    }

    /// Expect one entry per root career describing the newest pilot
    #[tokio::test]
    async fn lists_one_entry_per_career() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);

        let pilots = PilotService::new(&test.db, &config).list_pilots().await?;

        assert_eq!(pilots.len(), 2);
        assert_eq!(pilots[0].desc, IVAN_LATER);
        assert_eq!(pilots[0].display, "Ivan Petrov");
        assert_eq!(pilots[0].country, "Soviet Union");
        assert_eq!(pilots[0].squadron, "4 GIAP");
        assert_eq!(pilots[0].pilot_id, Some(11));
        assert_eq!(pilots[0].root_career_id, Some(1));
        assert_eq!(pilots[1].label(), "Hans Weber - Germany - Unknown");

        Ok(())
    }

    /// Expect the same chain from any segment's description
    #[tokio::test]
    async fn resolves_from_any_segment() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);
        let service = PilotService::new(&test.db, &config);

        let from_first = service.resolve(IVAN).await?;
        let from_latest = service.resolve(IVAN_LATER).await?;

        assert_eq!(from_first, from_latest);
        assert_eq!(from_first.pilot_ids, vec![10, 11]);
        assert_eq!(from_first.tip_pilot_id, 11);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_description_is_not_found() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);
        let service = PilotService::new(&test.db, &config);

        assert!(matches!(
            service.resolve("fullname=Nobody").await,
            Err(Error::PilotError(PilotError::PilotNotFound(_)))
        ));
        assert!(matches!(
            service.resolve("").await,
            Err(Error::PilotError(PilotError::MissingDesc))
        ));

        Ok(())
    }

    /// Expect promotions and awards across the chain, minus prize money
    #[tokio::test]
    async fn builds_service_record() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);

        let record = PilotService::new(&test.db, &config)
            .service_record(IVAN)
            .await?;

        let info = &record.pilot_info;
        assert_eq!(info.full_name, "Ivan Petrov");
        assert_eq!(info.first_name, "Ivan");
        assert_eq!(info.last_name, "Petrov");
        assert_eq!(info.birth_date, "15.03.1920");
        assert_eq!(info.birth_country, "Soviet Union");
        assert_eq!(info.pilot_id, Some(11));
        assert_eq!(info.squadron, "4 GIAP");
        assert_eq!(info.rank_name, "Starshiy Leytenant");
        assert_eq!(info.photo_url, None);

        assert_eq!(
            record.promotions,
            vec![
                PromotionDto {
                    desc: "Leytenant".to_string(),
                    date: "19.11.1942".to_string(),
                    img: Some("/static/standard_charactersranks/101002/big.png".to_string()),
                },
                PromotionDto {
                    desc: "Starshiy Leytenant".to_string(),
                    date: "01.02.1943".to_string(),
                    img: Some("/static/standard_charactersranks/101003/big.1943.png".to_string()),
                },
            ]
        );
        assert_eq!(
            record.awards,
            vec![AwardDto {
                desc: "Order of the Red Star".to_string(),
                date: "08.03.1943".to_string(),
                tpar2: Some(4),
            }]
        );

        Ok(())
    }

    /// Expect the stored photo of the newest pilot to be linked
    #[tokio::test]
    async fn links_uploaded_photo() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);

        let url = PhotoService::new(&config.pilot_photo_dir)
            .save(IVAN_LATER, "data:image/png;base64,iVBORw0KGgo=")
            .await
            .expect("photo saved");

        let record = PilotService::new(&test.db, &config)
            .service_record(IVAN)
            .await?;

        assert_eq!(record.pilot_info.photo_url, Some(url));

        Ok(())
    }

    /// Expect the newest pilot's counters with the header entries first
    #[tokio::test]
    async fn builds_stats() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);

        let stats = PilotService::new(&test.db, &config).stats(IVAN).await?;

        let keys: Vec<&str> = stats.0.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["Flight Time", "Good Sorties", "Sorties", "Success Rate", "Truck"]
        );
        assert_eq!(stats.0["Flight Time"], serde_json::json!(3661));
        assert_eq!(stats.0["Success Rate"], serde_json::json!("75.0%"));

        Ok(())
    }

    /// Expect every sortie of the chain, oldest first
    #[tokio::test]
    async fn lists_sorties() -> Result<(), Error> {
        let test = setup().await?;
        let config = config(&test);

        let sorties = PilotService::new(&test.db, &config)
            .sorties(IVAN_LATER)
            .await?;

        assert_eq!(sorties.len(), 2);
        assert_eq!(sorties[0].date, "1942.11.20 08:00:00");
        assert_eq!(sorties[0].mission_type, "");
        assert_eq!(sorties[1].aircraft, "YAK1S69");
        assert_eq!(sorties[1].mission_type, "Free Hunt P01");
        assert_eq!(sorties[1].air_kills, 1);
        assert_eq!(sorties[1].flight_time, "1h 5m");

        let hans = PilotService::new(&test.db, &config).sorties(HANS).await?;
        assert!(hans.is_empty());

        Ok(())
    }
}
