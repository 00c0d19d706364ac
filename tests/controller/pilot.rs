use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use pilot_passport::server::controller::pilot::{
    get_pilot_sorties, get_pilot_stats, get_pilots, get_service_record, DescQuery,
};

use super::*;

static IVAN: &str = "fullname=Ivan%20Petrov&birthCountryInfo=101&birthDate=1920.03.14";

async fn installation() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_career(1, 10, -1)
        .with_pilot(factory::pilot(10, IVAN))
        .with_event(factory::promotion(1, 10, "1942.11.19 06:30:00", 2))
        .with_sortie(factory::sortie(1, 10, "1942.11.20 08:00:00"))
        .build()
        .await
}

fn desc(desc: &str) -> Query<DescQuery> {
    Query(DescQuery {
        desc: Some(desc.to_string()),
    })
}

mod get_pilots {
    use super::*;

    /// Expect 200 OK with the configured installation
    #[tokio::test]
    async fn lists_pilots() -> Result<(), TestError> {
        let test = installation().await?;

        let result = get_pilots(State(test.app_state().await)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 400 Bad Request when no installation is configured
    #[tokio::test]
    async fn bad_request_without_installation() -> Result<(), TestError> {
        let test = installation().await?;

        let result = get_pilots(State(test.unconfigured_state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod pilot_pages {
    use super::*;

    /// Expect 200 OK for the record, stats and logbook of a known pilot
    #[tokio::test]
    async fn serves_known_pilot() -> Result<(), TestError> {
        let test = installation().await?;
        let state = test.app_state().await;

        let record = get_service_record(State(state.clone()), desc(IVAN)).await;
        assert_eq!(record.unwrap().into_response().status(), StatusCode::OK);

        let stats = get_pilot_stats(State(state.clone()), desc(IVAN)).await;
        assert_eq!(stats.unwrap().into_response().status(), StatusCode::OK);

        let sorties = get_pilot_sorties(State(state), desc(IVAN)).await;
        assert_eq!(sorties.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 404 Not Found for a description no pilot carries
    #[tokio::test]
    async fn not_found_for_unknown_pilot() -> Result<(), TestError> {
        let test = installation().await?;

        let result = get_service_record(State(test.app_state().await), desc("nobody")).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 400 Bad Request without a description
    #[tokio::test]
    async fn bad_request_without_desc() -> Result<(), TestError> {
        let test = installation().await?;

        let result = get_pilot_stats(
            State(test.app_state().await),
            Query(DescQuery { desc: None }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
