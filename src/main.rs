use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_tracker_rs::cli::{Cli, Command};
use meal_tracker_rs::config::Config;
use meal_tracker_rs::error::{Result, TrackerError};
use meal_tracker_rs::interface::{
    display_food_table, display_meals, display_profile, display_report, prompt_food_name,
    prompt_profile, prompt_yes_no,
};
use meal_tracker_rs::models::Gender;
use meal_tracker_rs::state::TrackerStore;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "meal_tracker_rs=debug"
    } else {
        "meal_tracker_rs=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_data_dir(&cli.data_dir);
    let mut store = TrackerStore::load(config)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List => cmd_list(&store),
        Command::Foods => {
            display_food_table();
            Ok(())
        }
        Command::Profile {
            height,
            weight,
            age,
            gender,
        } => cmd_profile(&mut store, height, weight, age, gender),
        Command::Add { food } => cmd_add(&mut store, food),
        Command::Remove { index } => cmd_remove(&mut store, index),
        Command::Report => cmd_report(&mut store),
        Command::Clear { yes } => cmd_clear(&mut store, yes),
    }
}

fn cmd_list(store: &TrackerStore) -> Result<()> {
    display_meals(store.meals().entries());
    Ok(())
}

/// Save the profile, prompting for whatever was not passed as a flag.
fn cmd_profile(
    store: &mut TrackerStore,
    height: Option<f64>,
    weight: Option<f64>,
    age: Option<f64>,
    gender: Option<Gender>,
) -> Result<()> {
    let profile = prompt_profile(store.profile(), height, weight, age, gender)?;
    store.set_profile(profile)?;

    println!("정보가 저장되었습니다.");
    display_profile(&profile);
    Ok(())
}

fn cmd_add(store: &mut TrackerStore, food: Option<String>) -> Result<()> {
    let name = match food {
        Some(name) => name,
        None => prompt_food_name()?,
    };

    let entry = store.add_meal(&name)?;
    println!(
        "{} (100g) 추가됨 - Cal: {}, C: {}g, P: {}g, F: {}g",
        entry.name, entry.calories, entry.carbs, entry.protein, entry.fat
    );
    Ok(())
}

fn cmd_remove(store: &mut TrackerStore, position: usize) -> Result<()> {
    let index = store.meals().index_for_position(position)?;

    let removed = store.remove_meal(index)?;
    println!("{} 삭제됨", removed.name);
    display_meals(store.meals().entries());
    Ok(())
}

/// Show the report, sending the user through the profile form first if needed.
fn cmd_report(store: &mut TrackerStore) -> Result<()> {
    let report = match store.report() {
        Err(TrackerError::ProfileIncomplete) => {
            println!("먼저 키, 몸무게, 나이, 성별을 입력해주세요.");
            let profile = prompt_profile(store.profile(), None, None, None, None)?;
            store.set_profile(profile)?;
            store.report()?
        }
        other => other?,
    };

    display_report(&report);
    Ok(())
}

fn cmd_clear(store: &mut TrackerStore, yes: bool) -> Result<()> {
    if store.meals().is_empty() {
        println!("오늘 기록된 식사가 없습니다.");
        return Ok(());
    }

    if !yes && !prompt_yes_no("오늘의 식사 기록을 모두 삭제할까요?", false)? {
        return Ok(());
    }

    store.clear_meals()?;
    println!("오늘의 식사 기록을 삭제했습니다.");
    Ok(())
}
