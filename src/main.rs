use std::{
    env::{self, current_dir},
    path::PathBuf,
};

use color_eyre::{Section, eyre::eyre};
use libsite::config::{self, SiteConfig, load};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: site [show|check|json] [ROOT]";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "libsite=info,site=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "show".to_string());
    let root = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => current_dir().with_note(|| "While getting the current working directory")?,
    };

    let config = config::install(load::discover(&root)?)?;

    match command.as_str() {
        "show" => print_summary(config),
        "check" => info!(root = %root.display(), "site configuration is valid"),
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        other => return Err(eyre!("Unknown command `{other}`").with_note(|| USAGE)),
    }

    Ok(())
}

fn print_summary(config: &SiteConfig) {
    let edit = config.edit_post();
    println!("title            {}", config.title());
    println!("website          {}", config.website());
    println!("author           {} <{}>", config.author(), config.profile());
    println!("description      {}", config.desc());
    println!("og image         {}", config.og_image());
    println!("lang / timezone  {} / {}", config.lang(), config.timezone());
    println!(
        "pagination       {} on index, {} per page",
        config.post_per_index(),
        config.post_per_page()
    );
    println!(
        "schedule margin  {}s",
        config.scheduled_post_margin().as_secs()
    );
    println!(
        "toggles          theme={} archives={} back={} dynamic-og={}",
        config.light_and_dark_mode(),
        config.show_archives(),
        config.show_back_button(),
        config.dynamic_og_image()
    );
    if edit.enabled() {
        println!("edit link        {} -> {}", edit.text(), edit.url());
    }
}
