//! Classweek - Main entry point
//!
//! Renders one week of the bilingual classroom newsletter to the
//! terminal: content sections, the specials rotation schedule, an
//! optional weather outlook with preparedness tips, and the archive.

use clap::Parser;
use classweek_lib::core::{AppConfig, AppState, PersistedState};
use classweek_lib::data::{DataStore, NewsletterConfig};
use classweek_lib::gate::PasswordGate;
use classweek_lib::i18n::I18n;
use classweek_lib::render::{render_newsletter, RenderContext, WeatherMode};
use classweek_lib::weather::{OpenMeteoClient, WeatherAdvisor};
use std::io::{self, Write};

const ABOUT: &str = "Bilingual weekly classroom newsletter viewer";

const LONG_ABOUT: &str = "
Shows the weekly classroom newsletter in the terminal, in English or
Spanish, from the data files the school publishes.

Pick a classroom with --classroom to see its specials rotation for the
week; the choice is remembered for the next run. The newest newsletter
also carries a Monday-Friday weather outlook with preparedness tips for
families.
";

#[derive(Parser, Debug)]
#[command(version, about = ABOUT, long_about = LONG_ABOUT)]
struct Args {
    #[arg(help = "Week to show, as the Monday's date (YYYY-MM-DD); defaults to the newest")]
    week: Option<String>,

    #[arg(long, help = "Language override: en or es")]
    lang: Option<String>,

    #[arg(long, help = "Classroom to personalize for (remembered across runs)")]
    classroom: Option<String>,

    #[arg(long, help = "Show every classroom's rotation grid")]
    all_classrooms: bool,

    #[arg(long, help = "List available weeks and exit")]
    list: bool,

    #[arg(long, help = "Skip the weather outlook")]
    no_weather: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so the newsletter itself stays clean)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Load or create configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let mut persisted = PersistedState::load();

    let lang_setting = args
        .lang
        .clone()
        .unwrap_or_else(|| config.general.language.clone());
    let i18n = I18n::new(&lang_setting);

    if config.features.password_gate {
        run_gate(&config, &mut persisted, &i18n)?;
    }

    let store = DataStore::new(&config.data.source)?;

    let (news_config, weeks_index) =
        match tokio::try_join!(store.load_config(), store.load_weeks_index()) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("Failed to load newsletter data: {}", e);
                eprintln!("{}", i18n.get("error.load_newsletter"));
                std::process::exit(1);
            }
        };

    if weeks_index.is_empty() {
        log::error!("Weeks index is empty");
        eprintln!("{}", i18n.get("error.load_newsletter"));
        std::process::exit(1);
    }

    if args.list {
        for entry in &weeks_index {
            let formatted = entry
                .parse::<chrono::NaiveDate>()
                .map(|d| i18n.format_long_date(d))
                .unwrap_or_else(|_| entry.clone());
            println!("  {}  {}", entry, formatted);
        }
        return Ok(());
    }

    let selected_classroom = resolve_classroom(&args, &news_config, &persisted);

    // An unknown week argument falls back to the newest
    let target = match &args.week {
        Some(week) if weeks_index.contains(week) => week.clone(),
        Some(week) => {
            log::warn!("Week {} is not in the index, showing the newest", week);
            weeks_index[0].clone()
        }
        None => weeks_index[0].clone(),
    };

    let week = match store.load_week(&target).await {
        Ok(week) => week,
        Err(e) => {
            log::error!("Failed to load week {}: {}", target, e);
            eprintln!("{}", i18n.get("error.load_week").replace("{date}", &target));
            std::process::exit(1);
        }
    };

    if let Some(logo) = news_config.season_logo(&week.season) {
        log::debug!("Season logo asset: {}", logo);
    }

    let mode = if args.no_weather {
        WeatherMode::Off
    } else {
        WeatherMode::from_config(&config.features.weather_display)
    };

    let today = chrono::Local::now().date_naive();

    // Forecast errors degrade to "no weather", they never block the page
    let forecast = if mode == WeatherMode::Off {
        None
    } else {
        let client = OpenMeteoClient::new(
            config.location.latitude,
            config.location.longitude,
            &config.location.timezone,
        )?;
        let advisor = WeatherAdvisor::new(Box::new(client));
        advisor.get_forecast(week.date, &weeks_index, today).await
    };

    let state = AppState::new(i18n.lang(), selected_classroom.clone());
    let ctx = RenderContext {
        config: &news_config,
        week: &week,
        i18n: &i18n,
        state: &state,
        today,
    };
    print!(
        "{}",
        render_newsletter(&ctx, forecast.as_ref(), &weeks_index, mode)
    );

    // Remember an explicit classroom choice
    if args.classroom.is_some() && selected_classroom.is_some() {
        persisted.selected_classroom = selected_classroom;
        if let Err(e) = persisted.save() {
            log::warn!("Could not save state: {}", e);
        }
    }

    Ok(())
}

/// Interactive password gate: valid stored grants pass straight through,
/// otherwise prompt until the password matches
fn run_gate(
    config: &AppConfig,
    persisted: &mut PersistedState,
    i18n: &I18n,
) -> anyhow::Result<()> {
    let gate = PasswordGate::new(&config.features.password_hash);
    let now = chrono::Utc::now().timestamp();

    if gate.is_authenticated(persisted, now) {
        return Ok(());
    }

    // Drop an expired or mismatched grant
    if persisted.auth.take().is_some() {
        let _ = persisted.save();
    }

    loop {
        print!("{}", i18n.get("ui.password_prompt"));
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("password required");
        }
        let input = input.trim_end_matches(['\r', '\n']);

        if gate.verify(input) {
            gate.grant(persisted, now);
            if let Err(e) = persisted.save() {
                log::warn!("Could not save state: {}", e);
            }
            return Ok(());
        }

        println!("{}", i18n.get("ui.password_wrong"));
    }
}

/// Which classroom to personalize for: the explicit flag wins, then the
/// remembered choice, and unknown names fall back to the all-classrooms view
fn resolve_classroom(
    args: &Args,
    config: &NewsletterConfig,
    persisted: &PersistedState,
) -> Option<String> {
    if args.all_classrooms {
        return None;
    }

    if let Some(classroom) = &args.classroom {
        if config.classrooms.contains(classroom) {
            return Some(classroom.clone());
        }
        log::warn!("Unknown classroom {:?}", classroom);
        return None;
    }

    persisted
        .selected_classroom
        .clone()
        .filter(|c| config.classrooms.contains(c))
}
