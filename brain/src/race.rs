use crate::routing::{Navigator, NavigatorStatus};
use common::{prelude::*, racing};
use log::{debug, info};
use nalgebra::Point2;
use simulate::{
    first_hit, resolve_with, Car, CarConfig, CarSnapshot, ConfigError, OpponentCar, PlayerCar,
    PlayerInput, Prop, SpeedBoost, TieBreak, Track,
};

/// The state of both cars after one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaceSnapshot {
    pub frame: u64,
    /// Seconds of race time elapsed at the end of this frame.
    pub time: f32,
    pub player: CarSnapshot,
    pub opponent: CarSnapshot,
    pub navigator: NavigatorStatus,
}

/// One player car, one AI car, stepped together a frame at a time.
pub struct Race {
    player: PlayerCar,
    opponent: OpponentCar,
    navigator: Navigator,
    tie_break: TieBreak,
    frame: u64,
    time: f32,
}

impl Race {
    pub fn new(
        player: PlayerCar,
        opponent: OpponentCar,
        navigator: Navigator,
    ) -> Result<Self, ConfigError> {
        player.car().config().validate()?;
        opponent.car().config().validate()?;
        navigator.config().validate()?;
        Ok(Self {
            player,
            opponent,
            navigator,
            tie_break: TieBreak::default(),
            frame: 0,
            time: 0.0,
        })
    }

    /// Builds a race from spawn points using the stock car tuning.
    pub fn from_spawns(
        player_loc: Point2<f32>,
        opponent_loc: Point2<f32>,
        navigator: Navigator,
    ) -> Result<Self, ConfigError> {
        Self::new(
            PlayerCar::new(player_loc, CarConfig::default()),
            OpponentCar::new(opponent_loc, CarConfig::opponent()),
            navigator,
        )
    }

    /// Which axis the player is pushed along when a road block overlaps it
    /// equally on both.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn player(&self) -> &PlayerCar {
        &self.player
    }

    pub fn opponent(&self) -> &OpponentCar {
        &self.opponent
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            frame: self.frame,
            time: self.time,
            player: self.player.snapshot(),
            opponent: self.opponent.snapshot(),
            navigator: self.navigator.status(),
        }
    }

    /// Advances the race by `dt` seconds.
    ///
    /// The AI is tested against road blocks where it stands at the start of
    /// the frame, before it moves, so its avoidance reacts a frame late. The
    /// player is tested after moving.
    ///
    /// Boost timers are not touched here; the caller advances them with
    /// [`Race::expire_boosts`] on its own schedule.
    pub fn tick(&mut self, dt: f32, input: &PlayerInput, track: &Track) -> RaceSnapshot {
        self.player.step(dt, input);
        self.navigator
            .step(dt, &mut self.opponent, &track.road_blocks);

        self.collide_player(track);

        pick_up_boost(self.player.car_mut(), &track.speed_boosts, "player");
        pick_up_boost(self.opponent.car_mut(), &track.speed_boosts, "opponent");

        self.frame += 1;
        self.time += dt;
        self.snapshot()
    }

    /// Advances both cars' boost timers by `dt` and ends any boost that has
    /// run its course.
    pub fn expire_boosts(&mut self, dt: f32) {
        expire_boost(self.player.car_mut(), dt, "player");
        expire_boost(self.opponent.car_mut(), dt, "opponent");
    }

    fn collide_player(&mut self, track: &Track) {
        let block = match first_hit(&track.road_blocks, self.player.car().hitbox()) {
            Some(block) => block,
            None => return,
        };
        debug!(
            "player hit road block {} at {}",
            block.id().0,
            self.player.car().loc().pretty(),
        );
        if let Some(correction) =
            resolve_with(self.player.car().hitbox(), block.hitbox(), self.tie_break)
        {
            self.player.bounce_off(&correction);
        }
        let away = self.player.car().loc() - block.loc();
        self.player.knock_back(away, racing::KNOCKBACK_DISTANCE);
    }
}

fn pick_up_boost(car: &mut Car, pads: &[SpeedBoost], who: &str) {
    if let Some(pad) = first_hit(pads, car.hitbox()) {
        if !car.is_boost_active() {
            info!("{} picked up speed boost {}", who, pad.id().0);
        }
        car.activate_boost();
    }
}

fn expire_boost(car: &mut Car, dt: f32, who: &str) {
    car.advance_boost_timer(dt);
    if car.is_boost_expired() {
        debug!("{} boost expired", who);
        car.deactivate_boost();
    }
}
