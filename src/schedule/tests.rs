//! Tests for the program rotation

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use super::ProgramSchedule;
use crate::model::{Difficulty, ExercisePlan, SetPlan, WorkoutPlan};

fn plan(name: &str) -> WorkoutPlan {
    WorkoutPlan {
        name: name.to_string(),
        exercises: vec![ExercisePlan {
            name: "Squat".to_string(),
            rest_duration: 120,
            sets: vec![SetPlan {
                difficulty: Difficulty::WeightReps {
                    weight: 80.0,
                    reps: 5,
                },
            }],
        }],
    }
}

/// Four-day rotation: push, pull, rest, legs
fn four_day_schedule() -> ProgramSchedule {
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    ProgramSchedule::new(
        origin,
        vec![
            vec![plan("Push Day")],
            vec![plan("Pull Day")],
            vec![],
            vec![plan("Leg Day")],
        ],
    )
}

#[test]
fn test_origin_date_resolves_to_first_entry() {
    let schedule = four_day_schedule();
    let plans = schedule.workout_plans_for(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Push Day");
}

#[test]
fn test_rotation_cycles_with_its_period() {
    let schedule = four_day_schedule();
    let date = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();

    let today: Vec<_> = schedule.workout_plans_for(date).to_vec();
    let next_cycle: Vec<_> = schedule
        .workout_plans_for(date + Duration::days(4))
        .to_vec();
    assert_eq!(today, next_cycle);
}

#[test]
fn test_repeated_lookups_are_stable() {
    let schedule = four_day_schedule();
    let date = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();

    let first: Vec<_> = schedule.workout_plans_for(date).to_vec();
    let second: Vec<_> = schedule.workout_plans_for(date).to_vec();
    assert_eq!(first, second);
    assert_eq!(first[0].name, "Pull Day");
}

#[test]
fn test_time_of_day_never_shifts_the_entry() {
    let schedule = four_day_schedule();
    let morning = schedule.workout_plans_for(Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 1).unwrap());
    let night = schedule.workout_plans_for(Utc.with_ymd_and_hms(2024, 1, 4, 23, 59, 59).unwrap());
    assert_eq!(morning, night);
    assert_eq!(morning[0].name, "Leg Day");
}

#[test]
fn test_dates_before_origin_wrap_around() {
    let schedule = four_day_schedule();

    // One day before the origin must land on the last rotation entry,
    // exactly like origin + (N - 1) days.
    let before = schedule.workout_plans_for(Utc.with_ymd_and_hms(2023, 12, 31, 9, 0, 0).unwrap());
    let wrapped = schedule.workout_plans_for(Utc.with_ymd_and_hms(2024, 1, 4, 9, 0, 0).unwrap());
    assert_eq!(before, wrapped);
    assert_eq!(before[0].name, "Leg Day");
}

#[test]
fn test_rest_days_are_empty_entries() {
    let schedule = four_day_schedule();
    let plans = schedule.workout_plans_for(Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap());
    assert!(plans.is_empty());
}

#[test]
fn test_empty_rotation_always_yields_nothing() {
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let schedule = ProgramSchedule::new(origin, Vec::new());
    assert!(schedule.is_empty());
    assert!(schedule
        .workout_plans_for(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
        .is_empty());
}
