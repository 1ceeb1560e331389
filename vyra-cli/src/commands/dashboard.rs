use anyhow::Result;
use chrono::Local;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vyra::config::Config;

use super::{ensure_onboarded, open_session};
use crate::ui::{App, Dashboard};

#[derive(Args)]
pub struct DashboardCommand {
    /// Seed for workout selection
    #[arg(long)]
    seed: Option<u64>,
}

impl DashboardCommand {
    pub async fn execute(self, config: Config) -> Result<()> {
        let session = open_session()?;
        if !ensure_onboarded(&session) {
            return Ok(());
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let app = App::new(
            session.profile().clone(),
            config.workout_catalog()?,
            Local::now().date_naive(),
            rng,
        );

        let mut dashboard = Dashboard::new(app)?;
        dashboard.run()
    }
}
