use std::fmt;

use favor::{fail, pass, primary, secondary, Projection, Validation};

#[derive(Debug)]
enum ReadingError {
    Unreadable(String),
    Implausible(i32),
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(raw) => write!(f, "unreadable input {raw:?}"),
            Self::Implausible(degrees) => write!(f, "{degrees} °C is implausible"),
        }
    }
}

fn read_celsius(raw: &str) -> Projection<i32, ReadingError> {
    match raw.trim().parse() {
        Ok(degrees) => primary(degrees),
        Err(_) => secondary(ReadingError::Unreadable(raw.to_owned())),
    }
}

fn plausible(degrees: &i32) -> Validation<ReadingError> {
    if (-90..=60).contains(degrees) {
        pass()
    } else {
        fail(ReadingError::Implausible(*degrees))
    }
}

fn main() {
    let raw_readings = ["21", "19", "banana", "7500", " 23 ", "-200"];

    let mut accepted = 0usize;
    for raw in raw_readings {
        let reading = read_celsius(raw).filter(plausible);
        reading.for_each(|_| accepted += 1);
        let line = reading.fold(
            |degrees| format!("{degrees} °C"),
            |error| format!("dropped: {error}"),
        );
        println!("{raw:>8} -> {line}");
    }

    let fallback_average: i32 = raw_readings
        .iter()
        .map(|raw| read_celsius(raw).filter(plausible).get_or_else(|| 20))
        .sum::<i32>()
        / raw_readings.len() as i32;

    println!("accepted {accepted} of {}", raw_readings.len());
    println!("average with fallbacks: {fallback_average} °C");
}
