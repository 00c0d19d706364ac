use std::sync::Arc;

use crate::server::{
    config::Config,
    model::{
        career::{CareerDatabase, CareerHandle},
        liveness::Liveness,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub career: CareerHandle,
    pub liveness: Liveness,
}

impl AppState {
    pub fn new(config: Config, career: Option<CareerDatabase>) -> Self {
        Self {
            config: Arc::new(config),
            career: CareerHandle::new(career),
            liveness: Liveness::new(),
        }
    }
}
