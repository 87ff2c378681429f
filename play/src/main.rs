#![cfg_attr(feature = "strict", deny(warnings))]

use crate::collector::Collector;
use brain::{Navigator, Race, RaceSnapshot, WaypointRoute};
use common::{prelude::*, racing};
use log::{info, warn};
use std::{env, error::Error, fs::File};

mod collector;
mod logging;
mod scenarios;

/// Races are called off after this many seconds of race time.
const TIME_LIMIT: f32 = 90.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(logging::format)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "race.csv".to_string());
    let mut collector = Collector::new(File::create(&path)?)?;

    let track = scenarios::track();
    let mut race = Race::from_spawns(
        scenarios::spawn(scenarios::PLAYER_SPAWN),
        scenarios::spawn(scenarios::OPPONENT_SPAWN),
        Navigator::new(WaypointRoute::new(scenarios::opponent_waypoints())),
    )?;
    info!(
        "race start: player at {}, opponent at {}",
        race.player().car().loc().pretty(),
        race.opponent().car().loc().pretty(),
    );

    let outcome = loop {
        let input = scenarios::drive(race.player(), &track);
        let snapshot = race.tick(racing::PHYSICS_DT, &input, &track);
        race.expire_boosts(racing::PHYSICS_DT);
        logging::set_race_time(snapshot.time);
        collector.write(&snapshot)?;

        if let Some(outcome) = check_finish(&snapshot) {
            break Some(outcome);
        }
        if snapshot.time >= TIME_LIMIT {
            break None;
        }
    };
    collector.flush()?;

    match outcome {
        Some(Outcome::Won) => info!("player crossed the finish line first"),
        Some(Outcome::Lost) => info!("opponent crossed the finish line first"),
        None => warn!("nobody finished within {} seconds", TIME_LIMIT),
    }
    info!("{} frames written to {}", race.frame(), path);
    Ok(())
}

/// The player is checked first, so a dead heat goes to the player.
fn check_finish(snapshot: &RaceSnapshot) -> Option<Outcome> {
    if snapshot.player.loc.y < racing::FINISH_LINE_Y {
        Some(Outcome::Won)
    } else if snapshot.opponent.loc.y < racing::FINISH_LINE_Y {
        Some(Outcome::Lost)
    } else {
        None
    }
}
