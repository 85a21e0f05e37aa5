//! Command-line player lookup.
//!
//! Runs the same fetch and item resolution as the web page and prints a
//! plain-text summary. Handy for checking the upstream APIs without starting
//! the server.
//!
//! Run with: cargo run --bin lookup -- <region> <uid>
//! Example:
//!   cargo run --bin lookup -- ind 123456789

use ff_player_lookup::config::Config;
use ff_player_lookup::format::{account_type, format_date, format_number, rank_name};
use ff_player_lookup::global::Global;
use ff_player_lookup::items::ItemDetail;
use ff_player_lookup::lookup;
use ff_player_lookup::regions::Region;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("warn"))
        .with(fmt_layer)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <region> <uid>", args[0]);
        print_regions();
        std::process::exit(1);
    }

    let region = args[1].to_lowercase();
    let uid = args[2].trim();

    if Region::from_code(&region).is_none() {
        eprintln!("Unknown region '{region}'");
        print_regions();
        std::process::exit(1);
    }

    let global = Global::init(Config::load()?)?;

    println!("Looking up {uid} on {region}...\n");

    let profile = match lookup::lookup(&global, uid, &region).await {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("  ({e})");
            std::process::exit(1);
        }
    };

    let Some(account) = &profile.record.account else {
        println!("No profile found.");
        return Ok(());
    };

    let dash = || "-".to_string();

    println!("Name:      {}", account.name.as_deref().unwrap_or("-"));
    println!("Level:     {}", account.level.map(|l| l.to_string()).unwrap_or_else(dash));
    println!("Account:   {}", account_type(account.account_type.unwrap_or_default()));
    println!("Likes:     {}", account.likes.map(format_number).unwrap_or_else(dash));
    println!("Created:   {}", account.create_time.and_then(format_date).unwrap_or_else(dash));
    println!("Last seen: {}", account.last_login.and_then(format_date).unwrap_or_else(dash));
    println!("BR rank:   {}", rank_name(account.br_max_rank.unwrap_or_default()));
    println!("CS rank:   {}", rank_name(account.cs_max_rank.unwrap_or_default()));

    if let Some(guild) = profile.record.guild() {
        println!("Guild:     {}", guild.name.as_deref().unwrap_or("-"));
    }

    print_items("Weapons", &profile.weapons);
    print_items("Outfit", &profile.outfit);
    print_items("Skills", &profile.skills);

    Ok(())
}

fn print_items(title: &str, items: &[ItemDetail]) {
    if items.is_empty() {
        return;
    }

    println!("\n{title} ({}):", items.len());
    for item in items {
        let icon = if item.image_url.is_some() { "icon" } else { "no icon" };
        println!("  {:<14} {}", item.id, icon);
    }
}

fn print_regions() {
    eprintln!("\nRegions:");
    for region in Region::ALL {
        eprintln!("  {:<6} {}", region.code(), region.display_name());
    }
}
