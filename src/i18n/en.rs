//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // UI chrome
    t.insert("ui.my_classroom".into(), "My Classroom".into());
    t.insert(
        "ui.my_specials".into(),
        "{classroom}'s Specials This Week".into(),
    );
    t.insert("ui.weather_heading".into(), "This Week's Weather".into());
    t.insert("ui.today".into(), "(today)".into());
    t.insert("ui.password_prompt".into(), "Password: ".into());
    t.insert(
        "ui.password_wrong".into(),
        "Incorrect password. Try again.".into(),
    );

    // Error banners
    t.insert(
        "error.load_newsletter".into(),
        "Could not load the newsletter. Please check back later.".into(),
    );
    t.insert(
        "error.load_week".into(),
        "Could not load newsletter for {date}. The data file may be missing.".into(),
    );

    // Month names for long-form dates
    t.insert("date.month.1".into(), "January".into());
    t.insert("date.month.2".into(), "February".into());
    t.insert("date.month.3".into(), "March".into());
    t.insert("date.month.4".into(), "April".into());
    t.insert("date.month.5".into(), "May".into());
    t.insert("date.month.6".into(), "June".into());
    t.insert("date.month.7".into(), "July".into());
    t.insert("date.month.8".into(), "August".into());
    t.insert("date.month.9".into(), "September".into());
    t.insert("date.month.10".into(), "October".into());
    t.insert("date.month.11".into(), "November".into());
    t.insert("date.month.12".into(), "December".into());

    // Weather descriptions by WMO code
    t.insert("weather.code.0".into(), "Clear sky".into());
    t.insert("weather.code.1".into(), "Mostly clear".into());
    t.insert("weather.code.2".into(), "Partly cloudy".into());
    t.insert("weather.code.3".into(), "Overcast".into());
    t.insert("weather.code.45".into(), "Foggy".into());
    t.insert("weather.code.48".into(), "Icy fog".into());
    t.insert("weather.code.51".into(), "Light drizzle".into());
    t.insert("weather.code.53".into(), "Drizzle".into());
    t.insert("weather.code.55".into(), "Heavy drizzle".into());
    t.insert("weather.code.56".into(), "Freezing drizzle".into());
    t.insert("weather.code.57".into(), "Freezing drizzle".into());
    t.insert("weather.code.61".into(), "Light rain".into());
    t.insert("weather.code.63".into(), "Rain".into());
    t.insert("weather.code.65".into(), "Heavy rain".into());
    t.insert("weather.code.66".into(), "Freezing rain".into());
    t.insert("weather.code.67".into(), "Freezing rain".into());
    t.insert("weather.code.71".into(), "Light snow".into());
    t.insert("weather.code.73".into(), "Snow".into());
    t.insert("weather.code.75".into(), "Heavy snow".into());
    t.insert("weather.code.77".into(), "Snow grains".into());
    t.insert("weather.code.80".into(), "Light showers".into());
    t.insert("weather.code.81".into(), "Showers".into());
    t.insert("weather.code.82".into(), "Heavy showers".into());
    t.insert("weather.code.85".into(), "Snow showers".into());
    t.insert("weather.code.86".into(), "Heavy snow showers".into());
    t.insert("weather.code.95".into(), "Thunderstorm".into());
    t.insert("weather.code.96".into(), "Thunderstorm w/ hail".into());
    t.insert("weather.code.99".into(), "Thunderstorm w/ hail".into());
    t.insert("weather.mixed".into(), "Mixed".into());

    // Preparedness tips
    t.insert(
        "tip.heavy_coat".into(),
        "\u{1F9E4} Heavy coat, hat & gloves".into(),
    );
    t.insert(
        "tip.warm_jacket".into(),
        "\u{1F9E5} Warm jacket & layers".into(),
    );
    t.insert("tip.light_jacket".into(), "\u{1F9E5} Light jacket".into());
    t.insert(
        "tip.extra_water".into(),
        "\u{1F4A7} Extra water bottle".into(),
    );
    t.insert("tip.sunscreen".into(), "\u{1F9F4} Sunscreen".into());
    t.insert(
        "tip.umbrella_boots".into(),
        "\u{2602}\u{FE0F} Umbrella & rain boots".into(),
    );
    t.insert(
        "tip.umbrella_maybe".into(),
        "\u{2602}\u{FE0F} Umbrella just in case".into(),
    );
    t.insert(
        "tip.snow_boots".into(),
        "\u{1F97E} Snow boots & warm socks".into(),
    );
    t.insert(
        "tip.storm_safety".into(),
        "\u{26A1} Stay safe indoors if possible".into(),
    );
    t.insert(
        "tip.great_weather".into(),
        "\u{1F44D} Great weather for school!".into(),
    );

    t
}
