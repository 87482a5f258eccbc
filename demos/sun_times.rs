//! Prints sunrise and sunset for a few places.
//!
//! Run with `RUST_LOG=trace` to see the intermediate values of each calculation.

use simple_sunrise::{calculator::timezone_offset, compute_sun_times, time::CalendarDate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let places = [
        ("15/04/2013", "Antsiranana region", -14.408749, 52.1421448),
        ("21/06/2024", "London", 51.5074, -0.1278),
        ("21/12/2024", "Sydney", -33.8688, 151.2093),
        ("21/06/2024", "Tromsø", 69.6492, 18.9553),
    ];

    for (date, name, latitude, longitude) in places {
        let date: CalendarDate = date.parse()?;
        let zone = timezone_offset(longitude);

        match compute_sun_times(date, latitude, longitude) {
            Ok(result) => {
                println!("{name}, {date} (UTC{zone:+}):");
                println!("  Sunrise:    {}", result.sunrise());
                println!("  Solar noon: {}", result.solar_noon());
                println!("  Sunset:     {}", result.sunset());
                println!("  Day length: {:.2} hours", result.day_length());
            }
            Err(err) if err.is_polar_day() || err.is_polar_night() => {
                println!("{name}, {date}: {err}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
