use crate::{
    race::{Race, RaceSnapshot},
    routing::{Navigator, WaypointRoute},
};
use common::racing;
use nalgebra::Point2;
use simulate::{PlayerInput, PropId, RoadBlock, SpeedBoost, Track};

pub struct TestScenario {
    pub player_loc: Point2<f32>,
    pub opponent_loc: Point2<f32>,
    pub waypoints: Vec<Point2<f32>>,
    pub road_blocks: Vec<Point2<f32>>,
    pub speed_boosts: Vec<Point2<f32>>,
}

impl Default for TestScenario {
    fn default() -> Self {
        TestScenario {
            player_loc: Point2::new(100.0, 1000.0),
            opponent_loc: Point2::new(250.0, 1000.0),
            waypoints: Vec::new(),
            road_blocks: Vec::new(),
            speed_boosts: Vec::new(),
        }
    }
}

impl TestScenario {
    fn track(&self) -> Track {
        Track::new(
            self.road_blocks
                .iter()
                .enumerate()
                .map(|(i, &loc)| RoadBlock::new(PropId(i as u32), loc))
                .collect(),
            self.speed_boosts
                .iter()
                .enumerate()
                .map(|(i, &loc)| SpeedBoost::new(PropId(i as u32), loc))
                .collect(),
        )
    }
}

pub struct TestRunner {
    scenario: TestScenario,
    driver: Box<dyn FnMut(&Race) -> PlayerInput>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            scenario: TestScenario::default(),
            driver: Box::new(|_: &Race| PlayerInput::default()),
        }
    }

    pub fn scenario(mut self, scenario: TestScenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn driver(mut self, driver: impl FnMut(&Race) -> PlayerInput + 'static) -> Self {
        self.driver = Box::new(driver);
        self
    }

    /// Steps the race at the physics rate, running boost timers the way a
    /// game loop would.
    pub fn run_for_millis(mut self, millis: u64) -> FinishedTest {
        let track = self.scenario.track();
        let mut race = Race::from_spawns(
            self.scenario.player_loc,
            self.scenario.opponent_loc,
            Navigator::new(WaypointRoute::new(self.scenario.waypoints.iter().cloned())),
        )
        .unwrap();

        let frames = millis * racing::PHYSICS_TICK_FREQ as u64 / 1000;
        let mut history = Vec::new();
        for _ in 0..frames {
            let input = (self.driver)(&race);
            history.push(race.tick(racing::PHYSICS_DT, &input, &track));
            race.expire_boosts(racing::PHYSICS_DT);
        }
        FinishedTest {
            race,
            track,
            history,
        }
    }
}

pub struct FinishedTest {
    pub race: Race,
    pub track: Track,
    pub history: Vec<RaceSnapshot>,
}

impl FinishedTest {
    pub fn last(&self) -> &RaceSnapshot {
        &self.history[self.history.len() - 1]
    }
}

pub fn full_throttle(_race: &Race) -> PlayerInput {
    PlayerInput {
        forward: true,
        ..Default::default()
    }
}
