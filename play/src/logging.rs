use env_logger::fmt::{Color, Formatter};
use lazy_static::lazy_static;
use log::{Level, Record};
use std::{
    io::{self, Write},
    sync::Mutex,
};

pub struct State {
    pub race_time: Option<f32>,
}

lazy_static! {
    pub static ref STATE: Mutex<State> = Mutex::new(State { race_time: None });
}

/// Stamps subsequent log lines with `race_time` instead of the wall clock.
pub fn set_race_time(race_time: f32) {
    if let Ok(mut state) = STATE.lock() {
        state.race_time = Some(race_time);
    }
}

/// env_logger's default layout, stamped with race time once a race is
/// running.
pub fn format(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let level = record.level();
    let mut level_style = buf.style();
    match level {
        Level::Trace => level_style.set_color(Color::White),
        Level::Debug => level_style.set_color(Color::Blue),
        Level::Info => level_style.set_color(Color::Green),
        Level::Warn => level_style.set_color(Color::Yellow),
        Level::Error => level_style.set_color(Color::Red).set_bold(true),
    };
    write!(buf, "{:>5} ", level_style.value(level))?;

    let ts = match STATE.lock().ok().and_then(|state| state.race_time) {
        Some(race_time) => format!("{:7.3}", race_time),
        None => format!("{}", buf.timestamp()),
    };
    write!(buf, "{}: ", ts)?;

    let mut module_style = buf.style();
    module_style.set_color(Color::Yellow);
    if let Some(module_path) = record.module_path() {
        write!(buf, "{}: ", module_style.value(module_path))?;
    }

    writeln!(buf, "{}", record.args())
}
