//! Spaceship inertia.
//!
//! Speeds fade on every step and accelerate along the pressed direction with
//! a cosine curve, so the ship picks up speed quickly from rest and slowly
//! near the limit.

use crate::types::{SPEED_FADING, SPEED_LIMIT};

const ACCELERATION: f64 = 0.75;
const STOP_THRESHOLD: f64 = 0.1;

fn apply_acceleration(speed: f64, limit: f64, forward: bool) -> f64 {
    let limit = limit.abs();
    let delta = (speed / limit).cos() * ACCELERATION;
    let result = if forward { speed + delta } else { speed - delta };
    let result = result.clamp(-limit, limit);
    if result.abs() < STOP_THRESHOLD {
        0.0
    } else {
        result
    }
}

/// Next (row_speed, column_speed) for the given directions.
///
/// Directions are taken by sign only.
pub fn update_speed(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
) -> (f64, f64) {
    update_speed_with(
        row_speed,
        column_speed,
        rows_direction,
        columns_direction,
        SPEED_LIMIT,
        SPEED_FADING,
    )
}

pub fn update_speed_with(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
    limit: f64,
    fading: f64,
) -> (f64, f64) {
    let fading = fading.clamp(0.0, 1.0);
    let mut row_speed = row_speed * fading;
    let mut column_speed = column_speed * fading;

    if rows_direction != 0 {
        row_speed = apply_acceleration(row_speed, limit, rows_direction > 0);
    }
    if columns_direction != 0 {
        column_speed = apply_acceleration(column_speed, limit, columns_direction > 0);
    }

    (row_speed, column_speed)
}
