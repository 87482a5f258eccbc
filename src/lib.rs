//! # Simple Sunrise
//!
//! Sunrise and sunset times of day from the classic simplified solar declination formula.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a calendar date and a position, the library derives the day of the year,
//! the solar declination `δ = 23.45° · sin(360/365 · (284 + d))`, the sunshine
//! duration `2/15 · arccos(-tan δ · tan φ)` and a four-minutes-per-degree
//! correction for the longitude's distance from its 15° zone meridian. Sunrise
//! and sunset are placed symmetrically around corrected noon and returned as
//! whole-second clock times.
//!
//! The approximation ignores the equation of time, atmospheric refraction and
//! the sun's disc, so expect results within several minutes of precise
//! algorithms. Times are local mean time of the nominal zone `trunc(λ/15)`,
//! never a political timezone.
//!
//! ## Features
//!
//! - Pure and stateless: every call depends only on its inputs
//! - Explicit errors for invalid input and for polar day/night
//! - `std` or `no_std`, with or without `chrono`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library math and implement `std::error::Error`
//! - `chrono` (default): Accept `chrono` dates and convert results to `NaiveTime`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! simple-sunrise = "0.1"
//!
//! # Minimal std (no chrono)
//! simple-sunrise = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! simple-sunrise = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Intermediate values are emitted through the [`log`] facade at `trace`
//! level, and polar cases at `debug` level. No logger is installed by the library.
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_sunrise::{compute_sun_times, time::CalendarDate};
//!
//! let date: CalendarDate = "15/04/2013".parse().unwrap();
//! let result = compute_sun_times(date, -14.408749, 52.1421448).unwrap();
//!
//! println!("Sunrise: {}", result.sunrise()); // 06:38:20
//! println!("Sunset:  {}", result.sunset());  // 18:18:48
//! ```
//!
//! ### Polar day and night
//!
//! ```rust
//! use simple_sunrise::{compute_sun_times, time::CalendarDate, Error};
//!
//! let midsummer = CalendarDate::new(2024, 6, 21).unwrap();
//! match compute_sun_times(midsummer, 78.22, 15.65) {
//!     Ok(result) => println!("{} - {}", result.sunrise(), result.sunset()),
//!     Err(err) if err.is_polar_day() => println!("Midnight sun"),
//!     Err(err) => println!("{err}"),
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of exactly representable values in tests
)]

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::calculator::compute_sun_times_for_date;
pub use crate::calculator::{compute, compute_sun_times};
pub use crate::error::{Error, Result};
pub use crate::time::{CalendarDate, decimal_to_time};
pub use crate::types::{ClockTime, Location, SolarInput, SolarResult};

// Algorithm module
pub mod calculator;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
