//! Terminal rendering of a newsletter week
//!
//! Builds the whole page as a string so the binary just prints it. Layout
//! follows the web edition: header, content sections, the specials
//! schedule, the personalized classroom view, rotation grids, shout-outs
//! and the archive list. Weather placement is a feature flag: woven into
//! the schedule rows, rendered as its own section, or omitted.

use crate::core::{weekday_key, AppState, DAY_KEYS};
use crate::data::{Bilingual, LabelBundle, NewsletterConfig, SectionImage, WeekRecord};
use crate::i18n::{day_label, translate_subject, I18n};
use crate::schedule::{
    is_no_school, subject_icon, today_highlight, RotationResolver, NO_SUBJECT, ROTATION_LETTERS,
};
use crate::weather::{description_for, icon_for, tips_for, Forecast, ForecastDay};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt::Write;

const RULE: &str = "==============================================";

/// Where the forecast shows up on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherMode {
    Inline,
    Section,
    Off,
}

impl WeatherMode {
    pub fn from_config(value: &str) -> Self {
        match value {
            "section" => WeatherMode::Section,
            "off" => WeatherMode::Off,
            _ => WeatherMode::Inline,
        }
    }
}

/// Everything a render pass needs, owned by the caller
pub struct RenderContext<'a> {
    pub config: &'a NewsletterConfig,
    pub week: &'a WeekRecord,
    pub i18n: &'a I18n,
    pub state: &'a AppState,
    pub today: NaiveDate,
}

pub fn render_newsletter(
    ctx: &RenderContext,
    forecast: Option<&Forecast>,
    weeks_index: &[String],
    mode: WeatherMode,
) -> String {
    let labels = ctx.config.labels_for(ctx.state.lang);
    let resolver = RotationResolver::new(&ctx.config.rotations);
    let inline = match mode {
        WeatherMode::Inline => forecast,
        _ => None,
    };

    let mut out = String::new();
    render_header(&mut out, ctx, &labels);
    render_section(&mut out, &labels.welcome_heading, &ctx.week.welcome, &ctx.week.welcome_images, ctx);
    render_section(&mut out, &labels.math_heading, &ctx.week.math, &ctx.week.math_images, ctx);
    render_section(&mut out, &labels.literacy_heading, &ctx.week.literacy, &ctx.week.literacy_images, ctx);
    render_specials_table(&mut out, ctx, &labels, inline);
    if mode == WeatherMode::Section {
        if let Some(forecast) = forecast {
            render_weather_section(&mut out, ctx, &labels, forecast);
        }
    }
    render_my_specials(&mut out, ctx, &labels, &resolver, inline);
    render_classroom_grids(&mut out, ctx, &resolver);
    render_shoutouts(&mut out, ctx, &labels);
    render_archive(&mut out, ctx, &labels, weeks_index);
    out
}

fn render_header(out: &mut String, ctx: &RenderContext, labels: &LabelBundle) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "   {}", labels.title);
    let _ = writeln!(out, "   {}", labels.subtitle);
    let _ = writeln!(out, "   {}", ctx.i18n.format_long_date(ctx.week.date));
    let _ = writeln!(out, "{}", RULE);
}

fn render_section(
    out: &mut String,
    heading: &str,
    body: &Bilingual,
    images: &[SectionImage],
    ctx: &RenderContext,
) {
    let text = body.get(ctx.state.lang);
    if text.is_empty() && images.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n--- {} ---", heading);
    for paragraph in paragraphs(text) {
        for line in paragraph.lines() {
            let _ = writeln!(out, "  {}", line);
        }
        let _ = writeln!(out);
    }
    for image in images {
        let caption = if image.caption.is_empty() {
            &image.alt
        } else {
            &image.caption
        };
        let _ = writeln!(out, "  [{}] {}", image.src, caption);
    }
}

/// Split free text into paragraphs on blank lines
fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn render_specials_table(
    out: &mut String,
    ctx: &RenderContext,
    labels: &LabelBundle,
    inline: Option<&Forecast>,
) {
    let _ = writeln!(out, "\n--- {} ---", labels.specials_heading);

    for (i, day_key) in DAY_KEYS.iter().enumerate() {
        let date = ctx.week.date + Duration::days(i as i64);
        let name = labels.days.get(i).map(String::as_str).unwrap_or(day_key);
        let raw = ctx.week.specials.get(*day_key).map(String::as_str).unwrap_or("");
        let display = if is_no_school(raw) {
            labels.no_school.as_str()
        } else {
            raw
        };

        let _ = writeln!(out, "  {:<22} | {}", day_label(name, date), display);
        if let Some(day) = inline.and_then(|f| f.get(i)) {
            render_day_weather(out, ctx, day, "      ");
        }
    }
}

fn render_weather_section(
    out: &mut String,
    ctx: &RenderContext,
    labels: &LabelBundle,
    forecast: &Forecast,
) {
    let _ = writeln!(out, "\n--- {} ---", ctx.i18n.get("ui.weather_heading"));

    for (i, day) in forecast.iter().enumerate().take(DAY_KEYS.len()) {
        let date = ctx.week.date + Duration::days(i as i64);
        let name = labels.days.get(i).map(String::as_str).unwrap_or(DAY_KEYS[i]);
        let _ = writeln!(out, "  {}", day_label(name, date));
        render_day_weather(out, ctx, day, "    ");
    }
}

/// One day's forecast line plus its tips, indented under a schedule row
fn render_day_weather(out: &mut String, ctx: &RenderContext, day: &ForecastDay, indent: &str) {
    let mut line = format!(
        "{}{} {}\u{00B0}/{}\u{00B0} {}",
        indent,
        icon_for(day.weather_code),
        day.high,
        day.low,
        description_for(day.weather_code, ctx.i18n),
    );
    if day.precipitation_probability > 0 {
        let _ = write!(line, " \u{1F4A7}{}%", day.precipitation_probability);
    }
    let _ = writeln!(out, "{}", line);

    for tip in tips_for(
        day.high,
        day.low,
        day.precipitation_probability,
        day.weather_code,
        ctx.i18n,
    ) {
        let _ = writeln!(out, "{}  {}", indent, tip);
    }
}

fn render_my_specials(
    out: &mut String,
    ctx: &RenderContext,
    labels: &LabelBundle,
    resolver: &RotationResolver,
    inline: Option<&Forecast>,
) {
    let classroom = match &ctx.state.selected_classroom {
        Some(c) => c,
        None => return,
    };

    let heading = ctx.i18n.get("ui.my_specials").replace("{classroom}", classroom);
    let _ = writeln!(out, "\n--- {} ---", heading);

    let today_key = weekday_key(ctx.today.weekday());

    for (i, day_key) in DAY_KEYS.iter().enumerate() {
        let date = ctx.week.date + Duration::days(i as i64);
        let name = labels.days.get(i).map(String::as_str).unwrap_or(day_key);
        let raw = ctx.week.specials.get(*day_key).map(String::as_str).unwrap_or("");
        let letter = raw.trim().to_uppercase();
        let today_marker = if *day_key == today_key {
            format!(" {}", ctx.i18n.get("ui.today"))
        } else {
            String::new()
        };

        if is_no_school(&letter) {
            let _ = writeln!(
                out,
                "  {:<22} \u{1F6AB} {}{}",
                day_label(name, date),
                labels.no_school,
                today_marker
            );
        } else {
            let subject = resolver
                .resolve_subject(classroom, &letter)
                .unwrap_or(NO_SUBJECT);
            let localized =
                translate_subject(subject, ctx.state.lang, &ctx.config.subject_translations);
            let _ = writeln!(
                out,
                "  {:<22} {} {} [{}]{}",
                day_label(name, date),
                subject_icon(&ctx.config.subject_icons, subject),
                localized,
                letter,
                today_marker
            );
        }

        if let Some(day) = inline.and_then(|f| f.get(i)) {
            render_day_weather(out, ctx, day, "      ");
        }
    }
}

fn render_classroom_grids(out: &mut String, ctx: &RenderContext, resolver: &RotationResolver) {
    let today_key = weekday_key(ctx.today.weekday());
    let active = today_highlight(&ctx.week.specials, today_key);

    let selected: Vec<&String> = match &ctx.state.selected_classroom {
        Some(c) => vec![c],
        None => ctx.config.classrooms.iter().collect(),
    };

    for classroom in selected {
        let flag = flag_label(
            ctx.config
                .classroom_flags
                .get(classroom)
                .map(String::as_str)
                .unwrap_or(""),
        );
        let _ = writeln!(out, "\n  {} {}", classroom, flag);
        let _ = writeln!(out, "  ----------------------------------------------");

        for letter in ROTATION_LETTERS {
            let subject = resolver
                .resolve_subject(classroom, &letter.to_string())
                .unwrap_or(NO_SUBJECT);
            let localized =
                translate_subject(subject, ctx.state.lang, &ctx.config.subject_translations);
            let marker = if active == Some(letter) { " \u{25C0}" } else { "" };
            let _ = writeln!(
                out,
                "   {}  {:<2} {}{}",
                letter,
                subject_icon(&ctx.config.subject_icons, subject),
                localized,
                marker
            );
        }
    }
}

fn render_shoutouts(out: &mut String, ctx: &RenderContext, labels: &LabelBundle) {
    if ctx.week.shoutouts.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n--- {} ---", labels.shoutouts_heading);
    for classroom in &ctx.config.classrooms {
        let name = ctx
            .week
            .shoutouts
            .get(classroom)
            .map(String::as_str)
            .unwrap_or("");
        let flag = flag_label(
            ctx.config
                .classroom_flags
                .get(classroom)
                .map(String::as_str)
                .unwrap_or(""),
        );
        let _ = writeln!(out, "  {:<14} {} {}", classroom, flag, name);
    }
}

fn render_archive(out: &mut String, ctx: &RenderContext, labels: &LabelBundle, weeks_index: &[String]) {
    let _ = writeln!(out, "\n--- {} ---", labels.archive_heading);
    for entry in weeks_index {
        let formatted = match entry.parse::<NaiveDate>() {
            Ok(date) => ctx.i18n.format_long_date(date),
            Err(_) => entry.clone(),
        };
        let marker = if *entry == ctx.week.date.to_string() {
            " *"
        } else {
            ""
        };
        let _ = writeln!(out, "  {} {}{}", labels.week_of, formatted, marker);
    }
}

/// Badge for a classroom: emoji pass through, image badges only exist in
/// the web edition
fn flag_label(flag: &str) -> &str {
    if flag.starts_with("img:") {
        ""
    } else {
        flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lang;
    use crate::data::{NewsletterConfig, WeekRecord};

    fn fixture_config() -> NewsletterConfig {
        let json = r#"{
            "classrooms": ["Brasil"],
            "classroomFlags": {"Brasil": "img:flags/brasil.png"},
            "rotations": {"Brasil": {
                "A": "Art", "B": "Music", "C": "PE",
                "D": "Library", "E": "Science Lab", "F": "Technology"
            }},
            "subjectIcons": {"Art": "🎨"},
            "subjectTranslations": {"Art": "Arte"},
            "labels": {
                "en": {
                    "title": "Weekly News",
                    "subtitle": "Room 12",
                    "welcomeHeading": "Welcome",
                    "specialsHeading": "Specials Schedule",
                    "shoutoutsHeading": "Shout-Outs",
                    "archiveHeading": "Past Newsletters",
                    "weekOf": "Week of",
                    "noSchool": "No School",
                    "days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                }
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    fn fixture_week() -> WeekRecord {
        let json = r#"{
            "date": "2026-09-14",
            "welcome": {"en": "Hello families!\n\nBig week ahead.", "es": "Hola familias!"},
            "specials": {
                "monday": "A",
                "tuesday": "NO SCHOOL",
                "wednesday": "b",
                "thursday": "Assembly",
                "friday": ""
            },
            "shoutouts": {"Brasil": "Luna M."}
        }"#;
        serde_json::from_str(json).unwrap()
    }

    fn render_fixture(selected: Option<&str>) -> String {
        let config = fixture_config();
        let week = fixture_week();
        let i18n = I18n::new("en");
        let state = AppState::new(Lang::En, selected.map(String::from));
        let ctx = RenderContext {
            config: &config,
            week: &week,
            i18n: &i18n,
            state: &state,
            // A Saturday, so no row gets the today marker
            today: NaiveDate::from_ymd_opt(2026, 9, 19).unwrap(),
        };
        render_newsletter(
            &ctx,
            None,
            &["2026-09-14".to_string(), "2026-09-07".to_string()],
            WeatherMode::Off,
        )
    }

    #[test]
    fn test_renders_headings_and_content() {
        let page = render_fixture(None);
        assert!(page.contains("Weekly News"));
        assert!(page.contains("September 14, 2026"));
        assert!(page.contains("--- Welcome ---"));
        assert!(page.contains("Hello families!"));
        assert!(page.contains("--- Specials Schedule ---"));
        assert!(page.contains("Monday (9/14)"));
    }

    #[test]
    fn test_no_school_cell_uses_label() {
        let page = render_fixture(None);
        assert!(page.contains("No School"));
        assert!(!page.contains("NO SCHOOL"));
    }

    #[test]
    fn test_my_specials_only_renders_for_selected_classroom() {
        assert!(!render_fixture(None).contains("Specials This Week"));
        let page = render_fixture(Some("Brasil"));
        assert!(page.contains("Brasil's Specials This Week"));
        // Monday's letter resolves, the free-text Thursday shows the sentinel
        assert!(page.contains("Art [A]"));
        assert!(page.contains("\u{2014} [ASSEMBLY]"));
    }

    #[test]
    fn test_grid_lists_all_six_rotation_letters() {
        let page = render_fixture(Some("Brasil"));
        for letter in ROTATION_LETTERS {
            assert!(page.contains(&format!("\n   {}  ", letter)));
        }
        assert!(page.contains("Technology"));
    }

    #[test]
    fn test_archive_marks_current_week() {
        let page = render_fixture(None);
        assert!(page.contains("Week of September 14, 2026 *"));
        assert!(page.contains("Week of September 7, 2026"));
    }

    #[test]
    fn test_spanish_render_localizes_subjects() {
        let config = fixture_config();
        let week = fixture_week();
        let i18n = I18n::new("es");
        let state = AppState::new(Lang::Es, Some("Brasil".to_string()));
        let ctx = RenderContext {
            config: &config,
            week: &week,
            i18n: &i18n,
            state: &state,
            today: NaiveDate::from_ymd_opt(2026, 9, 19).unwrap(),
        };
        let page = render_newsletter(&ctx, None, &[], WeatherMode::Off);
        assert!(page.contains("Arte"));
        assert!(page.contains("Especialidades de Brasil Esta Semana"));
    }

    #[test]
    fn test_inline_weather_appears_under_schedule_rows() {
        let config = fixture_config();
        let week = fixture_week();
        let i18n = I18n::new("en");
        let state = AppState::new(Lang::En, None);
        let ctx = RenderContext {
            config: &config,
            week: &week,
            i18n: &i18n,
            state: &state,
            today: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
        };
        let forecast = vec![ForecastDay {
            date: week.date,
            high: 71,
            low: 55,
            precipitation_probability: 10,
            weather_code: 0,
        }];
        let page = render_newsletter(&ctx, Some(&forecast), &[], WeatherMode::Inline);
        assert!(page.contains("71\u{00B0}/55\u{00B0} Clear sky"));
        assert!(page.contains("\u{1F4A7}10%"));
    }

    #[test]
    fn test_weather_section_mode() {
        let config = fixture_config();
        let week = fixture_week();
        let i18n = I18n::new("en");
        let state = AppState::new(Lang::En, None);
        let ctx = RenderContext {
            config: &config,
            week: &week,
            i18n: &i18n,
            state: &state,
            today: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
        };
        let forecast = vec![ForecastDay {
            date: week.date,
            high: 60,
            low: 50,
            precipitation_probability: 0,
            weather_code: 1,
        }];
        let page = render_newsletter(&ctx, Some(&forecast), &[], WeatherMode::Section);
        assert!(page.contains("--- This Week's Weather ---"));
        assert!(page.contains("Great weather for school!"));
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let paras = paragraphs("one\n\ntwo\nstill two\n\n\nthree");
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[1], "two\nstill two");
    }
}
