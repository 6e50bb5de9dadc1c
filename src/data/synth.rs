use std::path::Path;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Exp1;
use serde::Serialize;

use crate::error::{DataLoadReason, Result, TrainErr};

pub const MODELS: [&str; 4] = ["911 RSR", "Cayenne Turbo GT", "Taycan Turbo S", "Macan GTS"];

/// One telemetry reading, in the column order of the collected dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarReading {
    pub model: &'static str,
    /// km/h
    pub speed: u32,
    /// km/l
    pub fuel_efficiency: f64,
    /// degrees C
    pub engine_temp: f64,
}

/// Seeded generator of vehicle telemetry.
///
/// Readings follow the same distributions as the live producer: speed uniform
/// in `[0, 300)`, fuel efficiency uniform in `[5, 15)` and engine temperature
/// `70 + 30 * Exp(1)`.
pub struct SyntheticFleet {
    rng: StdRng,
}

impl SyntheticFleet {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reading(&mut self) -> CarReading {
        let model = MODELS[self.rng.random_range(0..MODELS.len())];
        let speed = self.rng.random_range(0..300);
        let fuel_efficiency = self.rng.random::<f64>() * 10.0 + 5.0;
        let engine_temp = self.rng.sample::<f64, _>(Exp1) * 30.0 + 70.0;

        CarReading {
            model,
            speed,
            fuel_efficiency,
            engine_temp,
        }
    }

    /// Draws `n` readings.
    pub fn readings(&mut self, n: usize) -> Vec<CarReading> {
        (0..n).map(|_| self.reading()).collect()
    }

    /// Draws `n` readings whose fuel efficiency is exactly
    /// `w_speed * speed + w_temp * engine_temp + bias`.
    pub fn linear_readings(&mut self, n: usize, w_speed: f64, w_temp: f64, bias: f64) -> Vec<CarReading> {
        (0..n)
            .map(|_| {
                let mut reading = self.reading();
                reading.fuel_efficiency =
                    w_speed * reading.speed as f64 + w_temp * reading.engine_temp + bias;
                reading
            })
            .collect()
    }
}

/// Writes `readings` as a csv table with a header row, replacing whatever is at `path`.
pub fn write_csv<P: AsRef<Path>>(path: P, readings: &[CarReading]) -> Result<()> {
    let path = path.as_ref();
    let csv_err = |e| TrainErr::data_load(path, DataLoadReason::Csv(e));

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for reading in readings {
        writer.serialize(reading).map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| TrainErr::data_load(path, DataLoadReason::Io(e)))?;

    info!("wrote {} synthetic readings to {}", readings.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Table;

    #[test]
    fn readings_stay_in_range() {
        let mut fleet = SyntheticFleet::new(42);
        for r in fleet.readings(500) {
            assert!(MODELS.contains(&r.model));
            assert!(r.speed < 300);
            assert!((5.0..15.0).contains(&r.fuel_efficiency));
            assert!(r.engine_temp >= 70.0);
        }
    }

    #[test]
    fn same_seed_same_readings() {
        let a = SyntheticFleet::new(9).readings(20);
        let b = SyntheticFleet::new(9).readings(20);
        assert_eq!(a, b);
    }

    #[test]
    fn linear_readings_follow_the_rule() {
        let mut fleet = SyntheticFleet::new(1);
        for r in fleet.linear_readings(10, 2.0, 3.0, 5.0) {
            let expected = 2.0 * r.speed as f64 + 3.0 * r.engine_temp + 5.0;
            assert_eq!(r.fuel_efficiency, expected);
        }
    }

    #[test]
    fn written_csv_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.csv");
        let readings = SyntheticFleet::new(3).readings(25);

        write_csv(&path, &readings).unwrap();
        let table = Table::from_csv_path(&path).unwrap();

        assert_eq!(table.len(), 25);
        assert_eq!(
            table.headers(),
            &["model", "speed", "fuel_efficiency", "engine_temp"]
        );
        let temps = table.column("engine_temp").unwrap();
        for (r, t) in readings.iter().zip(temps.iter()) {
            assert_eq!(r.engine_temp, *t);
        }
    }
}
