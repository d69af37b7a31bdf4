//! Example Build - a command-line walkthrough of champ_core
//!
//! This demo shows:
//! - Resolving a champion's stat snapshot as levels and items change
//! - Spending skill points under the allocation rules
//! - Rendering annotated tooltips against the live snapshot
//! - Replaying a saved build plan from a TOML file
//!
//! Run with no arguments for a scripted walkthrough of the bundled
//! champion, or pass the path of a build plan:
//!
//! ```text
//! cargo run -p example_build -- my_build.toml
//! ```

use champ_core::config;
use champ_core::prelude::*;
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn heading(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

fn print_stats(stats: &ResolvedStats) {
    println!();
    for &key in StatKey::all() {
        let value = stats.get(key);
        // Attack speed is the one fractional stat worth three decimals
        if key == StatKey::AttackSpeed {
            println!("  {:<16} {value:>10.3}", key.label());
        } else {
            println!("  {:<16} {value:>10.0}", key.label());
        }
    }
    println!("  {:<16} {:>10.0}", "Bonus AD", stats.bonus_ad);
}

/// Print one tooltip with inline highlight markers
fn print_tooltip(session: &BuildSession, key: AbilityKey) {
    let index = session.champion().index();
    let Some(ability) = index.get(session.champion(), key) else {
        return;
    };
    let Some(tooltip) = session.tooltip(key) else {
        return;
    };
    println!("\n[{key}] {} (rank {})", ability.name, session.rank(key));
    if let Some(detail) = session.rank_detail(key) {
        println!(
            "    {}s cooldown | {} cost | {} range",
            detail.cooldown, detail.cost, detail.range
        );
    }
    for line in &tooltip.lines {
        let text: String = line
            .iter()
            .map(|segment| match segment.highlight {
                Some(kind) => format!("<{kind}>{}</{kind}>", segment.text),
                None => segment.text.clone(),
            })
            .collect();
        println!("    {text}");
    }
    for raw in &tooltip.unresolved {
        println!("    (unresolved: {raw})");
    }
}

fn print_session(session: &BuildSession) {
    heading(&format!(
        "{}, level {} ({} point(s) unspent)",
        session.champion().name,
        session.level(),
        session.available_points()
    ));
    print_stats(session.stats());

    if !session.items().is_empty() {
        println!();
        for (slot, item) in session.items().iter().enumerate() {
            println!("  Slot {}: {}", slot + 1, item.name);
        }
    }

    for &key in AbilityKey::all() {
        print_tooltip(session, key);
    }
}

/// Replay a plan file against the bundled data
fn run_plan(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let plan = config::load_build_plan(std::path::Path::new(path))?;
    info!(title = %plan.title, champion = %plan.champion, "replaying build plan");

    let champion = config::sample_champion();
    let catalog = config::sample_items();
    let session = apply_plan(&plan, &champion, &catalog)?;

    heading(&format!("Plan: {}", plan.title));
    print_session(&session);
    Ok(())
}

/// Scripted walkthrough: level to 9, skill Q-max first, buy AP
fn run_walkthrough() -> Result<(), Box<dyn std::error::Error>> {
    let champion = config::sample_champion();
    let catalog = config::sample_items();
    info!(champion = %champion.id, "starting walkthrough");

    let mut session = BuildSession::new(champion);
    heading("Fresh session");
    print_stats(session.stats());

    // Standard burst-mage opener: Q, E, W, then max Q, ultimate at 6
    let order = [
        AbilityKey::Q,
        AbilityKey::E,
        AbilityKey::W,
        AbilityKey::Q,
        AbilityKey::Q,
        AbilityKey::R,
        AbilityKey::Q,
        AbilityKey::W,
        AbilityKey::Q,
    ];
    for &key in &order {
        while !session.can_rank_up(key) {
            if let Err(err) = session.check_rank_up(key) {
                info!(%key, level = session.level(), %err, "waiting on a level");
            }
            session.level_up();
        }
        session.rank_up(key)?;
    }

    for id in ["1058", "1026", "3089"] {
        let item = catalog
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| format!("bundled catalog is missing item {id}"))?;
        session.equip(item.clone())?;
        info!(item = %item.name, ap = session.stats().ap, "equipped");
    }

    print_session(&session);

    heading("Undo: refund points, drop a level");
    session.reset_ranks();
    session.level_down()?;
    println!(
        "\n  level {} with {} point(s) to spend",
        session.level(),
        session.available_points()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let result = match env::args().nth(1) {
        Some(path) => run_plan(&path),
        None => run_walkthrough(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
