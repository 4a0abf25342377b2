//! Spanish translations / Traducciones en espa\u{00F1}ol

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // UI chrome
    t.insert("ui.my_classroom".into(), "Mi Sal\u{00F3}n".into());
    t.insert(
        "ui.my_specials".into(),
        "Especialidades de {classroom} Esta Semana".into(),
    );
    t.insert(
        "ui.weather_heading".into(),
        "El Clima de Esta Semana".into(),
    );
    t.insert("ui.today".into(), "(hoy)".into());
    t.insert("ui.password_prompt".into(), "Contrase\u{00F1}a: ".into());
    t.insert(
        "ui.password_wrong".into(),
        "Contrase\u{00F1}a incorrecta. Int\u{00E9}ntalo de nuevo.".into(),
    );

    // Error banners
    t.insert(
        "error.load_newsletter".into(),
        "No se pudo cargar el bolet\u{00ED}n. Por favor, vuelve m\u{00E1}s tarde.".into(),
    );
    t.insert(
        "error.load_week".into(),
        "No se pudo cargar el bolet\u{00ED}n del {date}. Puede que falte el archivo de datos."
            .into(),
    );

    // Month names for long-form dates
    t.insert("date.month.1".into(), "enero".into());
    t.insert("date.month.2".into(), "febrero".into());
    t.insert("date.month.3".into(), "marzo".into());
    t.insert("date.month.4".into(), "abril".into());
    t.insert("date.month.5".into(), "mayo".into());
    t.insert("date.month.6".into(), "junio".into());
    t.insert("date.month.7".into(), "julio".into());
    t.insert("date.month.8".into(), "agosto".into());
    t.insert("date.month.9".into(), "septiembre".into());
    t.insert("date.month.10".into(), "octubre".into());
    t.insert("date.month.11".into(), "noviembre".into());
    t.insert("date.month.12".into(), "diciembre".into());

    // Weather descriptions by WMO code
    t.insert("weather.code.0".into(), "Cielo despejado".into());
    t.insert("weather.code.1".into(), "Mayormente despejado".into());
    t.insert("weather.code.2".into(), "Parcialmente nublado".into());
    t.insert("weather.code.3".into(), "Nublado".into());
    t.insert("weather.code.45".into(), "Niebla".into());
    t.insert("weather.code.48".into(), "Niebla helada".into());
    t.insert("weather.code.51".into(), "Llovizna ligera".into());
    t.insert("weather.code.53".into(), "Llovizna".into());
    t.insert("weather.code.55".into(), "Llovizna fuerte".into());
    t.insert("weather.code.56".into(), "Llovizna helada".into());
    t.insert("weather.code.57".into(), "Llovizna helada".into());
    t.insert("weather.code.61".into(), "Lluvia ligera".into());
    t.insert("weather.code.63".into(), "Lluvia".into());
    t.insert("weather.code.65".into(), "Lluvia fuerte".into());
    t.insert("weather.code.66".into(), "Lluvia helada".into());
    t.insert("weather.code.67".into(), "Lluvia helada".into());
    t.insert("weather.code.71".into(), "Nieve ligera".into());
    t.insert("weather.code.73".into(), "Nieve".into());
    t.insert("weather.code.75".into(), "Nieve fuerte".into());
    t.insert("weather.code.77".into(), "Granizo".into());
    t.insert("weather.code.80".into(), "Chubascos ligeros".into());
    t.insert("weather.code.81".into(), "Chubascos".into());
    t.insert("weather.code.82".into(), "Chubascos fuertes".into());
    t.insert("weather.code.85".into(), "Chubascos de nieve".into());
    t.insert(
        "weather.code.86".into(),
        "Chubascos fuertes de nieve".into(),
    );
    t.insert("weather.code.95".into(), "Tormenta".into());
    t.insert("weather.code.96".into(), "Tormenta con granizo".into());
    t.insert("weather.code.99".into(), "Tormenta con granizo".into());
    t.insert("weather.mixed".into(), "Variable".into());

    // Preparedness tips
    t.insert(
        "tip.heavy_coat".into(),
        "\u{1F9E4} Abrigo grueso, gorro y guantes".into(),
    );
    t.insert(
        "tip.warm_jacket".into(),
        "\u{1F9E5} Chaqueta abrigada y capas".into(),
    );
    t.insert(
        "tip.light_jacket".into(),
        "\u{1F9E5} Chaqueta ligera".into(),
    );
    t.insert(
        "tip.extra_water".into(),
        "\u{1F4A7} Botella de agua extra".into(),
    );
    t.insert("tip.sunscreen".into(), "\u{1F9F4} Protector solar".into());
    t.insert(
        "tip.umbrella_boots".into(),
        "\u{2602}\u{FE0F} Paraguas y botas de lluvia".into(),
    );
    t.insert(
        "tip.umbrella_maybe".into(),
        "\u{2602}\u{FE0F} Paraguas por si acaso".into(),
    );
    t.insert(
        "tip.snow_boots".into(),
        "\u{1F97E} Botas de nieve y calcetines abrigados".into(),
    );
    t.insert(
        "tip.storm_safety".into(),
        "\u{26A1} Mant\u{00E9}nganse seguros adentro si es posible".into(),
    );
    t.insert(
        "tip.great_weather".into(),
        "\u{1F44D} \u{00A1}Buen clima para la escuela!".into(),
    );

    t
}
