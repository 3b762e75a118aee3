// src/simulation/config.rs

use crate::error::{SimError, SimResult};
use chrono::{Datelike, Months, NaiveDate};

pub const DEFAULT_PLANNING_LEAD_TIME: u32 = 3;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Strictly ascending calendar years; every month of each is simulated.
    pub simulation_years: Vec<i32>,
    /// Months between a purchasing decision and the demand it plans for.
    pub planning_lead_time_months: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_years: vec![2021],
            planning_lead_time_months: DEFAULT_PLANNING_LEAD_TIME,
        }
    }
}

/// One iteration of the engine: the month we order in and the month we plan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningPeriod {
    pub order_date: NaiveDate,
    pub target_month: NaiveDate,
}

impl PlanningPeriod {
    pub fn year(&self) -> i32 {
        self.order_date.year()
    }

    pub fn month(&self) -> u32 {
        self.order_date.month()
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.simulation_years.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one simulation year is required".to_string(),
            ));
        }
        if self.simulation_years.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SimError::InvalidConfig(format!(
                "simulation years must be strictly ascending, got {:?}",
                self.simulation_years
            )));
        }
        if self.planning_lead_time_months == 0 {
            return Err(SimError::InvalidConfig(
                "planning lead time must be at least one month".to_string(),
            ));
        }
        Ok(())
    }

    /// Every `(year, month)` of the run in chronological order, each paired with
    /// the month `planning_lead_time_months` later.
    pub fn schedule(&self) -> SimResult<Vec<PlanningPeriod>> {
        self.validate()?;

        let mut periods = Vec::with_capacity(self.simulation_years.len() * 12);
        for &year in &self.simulation_years {
            for month in 1..=12 {
                let order_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
                    SimError::InvalidConfig(format!("year {} is out of range", year))
                })?;
                let target_month = order_date
                    .checked_add_months(Months::new(self.planning_lead_time_months))
                    .ok_or_else(|| {
                        SimError::InvalidConfig(format!(
                            "lead time of {} months from {} is out of range",
                            self.planning_lead_time_months, order_date
                        ))
                    })?;
                periods.push(PlanningPeriod {
                    order_date,
                    target_month,
                });
            }
        }
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn schedule_projects_lead_time_across_year_end() {
        let config = SimulationConfig {
            simulation_years: vec![2021, 2022],
            planning_lead_time_months: 3,
        };
        let schedule = config.schedule().unwrap();

        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule[0].order_date, date(2021, 1));
        assert_eq!(schedule[0].target_month, date(2021, 4));
        assert_eq!(schedule[10].target_month, date(2022, 2));
        assert_eq!(schedule[23].order_date, date(2022, 12));
        assert_eq!(schedule[23].target_month, date(2023, 3));
    }

    #[test]
    fn rejects_bad_configs() {
        let empty = SimulationConfig {
            simulation_years: vec![],
            ..SimulationConfig::default()
        };
        let unordered = SimulationConfig {
            simulation_years: vec![2022, 2021],
            ..SimulationConfig::default()
        };
        let repeated = SimulationConfig {
            simulation_years: vec![2021, 2021],
            ..SimulationConfig::default()
        };
        let no_lead = SimulationConfig {
            planning_lead_time_months: 0,
            ..SimulationConfig::default()
        };

        for config in [empty, unordered, repeated, no_lead] {
            assert!(matches!(
                config.schedule(),
                Err(SimError::InvalidConfig(_))
            ));
        }
    }
}
