use brain::RaceSnapshot;
use simulate::{CarMotion, CarSnapshot};
use std::io::Write;

const HEADER: &[&str] = &[
    "frame",
    "time",
    "player_x",
    "player_y",
    "player_rot",
    "player_vx",
    "player_vy",
    "player_boost",
    "player_motion",
    "opponent_x",
    "opponent_y",
    "opponent_rot",
    "opponent_vx",
    "opponent_vy",
    "opponent_boost",
    "opponent_motion",
    "navigator",
];

/// Records one CSV row per frame.
pub struct Collector<W: Write> {
    w: csv::Writer<W>,
}

impl<W: Write> Collector<W> {
    pub fn new(writer: W) -> csv::Result<Self> {
        let mut w = csv::Writer::from_writer(writer);
        w.write_record(HEADER)?;
        Ok(Collector { w })
    }

    pub fn write(&mut self, snapshot: &RaceSnapshot) -> csv::Result<()> {
        self.w.write_record(
            vec![snapshot.frame.to_string(), snapshot.time.to_string()]
                .into_iter()
                .chain(values(&snapshot.player))
                .chain(values(&snapshot.opponent))
                .chain(Some(snapshot.navigator.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    pub fn flush(&mut self) -> csv::Result<()> {
        self.w.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.w.into_inner() {
            Ok(inner) => inner,
            Err(_) => panic!("flush failed"),
        }
    }
}

fn values(car: &CarSnapshot) -> Vec<String> {
    vec![
        car.loc.x.to_string(),
        car.loc.y.to_string(),
        car.rot.to_string(),
        car.vel.x.to_string(),
        car.vel.y.to_string(),
        car.boost_active.to_string(),
        motion_name(car.motion).to_string(),
    ]
}

fn motion_name(motion: CarMotion) -> &'static str {
    match motion {
        CarMotion::Idle => "idle",
        CarMotion::Accelerating => "accelerating",
        CarMotion::Drifting => "drifting",
        CarMotion::Colliding => "colliding",
    }
}
