use std::num::NonZeroU32;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic};
use owo_colors::OwoColorize;
use tracing::warn;

use reelpick::{
    cli::{Args, Command, PickArgs},
    config::Settings,
    list_topics,
    logging::init_logging,
    outside::download_clips,
    AcquisitionOptions, FootageService, Pexels, PickedClip, SeededShuffler, Shuffler,
    ThreadShuffler, TopicTerms,
};

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level())?;

    match &args.command {
        Command::Topics => print_topics(),
        Command::Pick(pick) => run_pick(&args, pick)?,
    }

    Ok(())
}

fn print_topics() {
    for topic in list_topics() {
        match topic.terms {
            TopicTerms::Fixed(terms) => {
                println!("{:<12} {} ({})", topic.id.bold(), topic.label, terms.join(", "))
            }
            TopicTerms::Custom => {
                println!("{:<12} {} (custom query)", topic.id.bold(), topic.label)
            }
        }
    }
}

fn run_pick(args: &Args, pick: &PickArgs) -> miette::Result<()> {
    let mut settings = Settings::load(&args.config)?;

    // CLI flags take precedence over the settings file and environment
    if let Some(api_key) = &args.api_key {
        settings.api_key = Some(api_key.clone());
    }
    if let Some(orientation) = pick.orientation {
        settings.orientation = orientation;
    }
    if let Some(per_term) = pick.per_term.and_then(NonZeroU32::new) {
        settings.per_term_count = per_term;
    }
    let target_width = pick.width.unwrap_or(settings.target_width);

    let api_key = settings.api_key.as_deref().ok_or_else(|| {
        miette!("No API key: set PEXELS_API_KEY or api_key in the settings file")
    })?;
    let pexels = Pexels::new(api_key, &settings.base_url, settings.timeout())?;

    let options = settings.acquisition_options();
    let clips = match pick.seed {
        Some(seed) => pick_with(&pexels, SeededShuffler::new(seed), options, pick, target_width)?,
        None => pick_with(&pexels, ThreadShuffler, options, pick, target_width)?,
    };

    if clips.is_empty() {
        warn!(
            "No footage found for topic '{}', try another topic or query",
            pick.topic
        );
        return Ok(());
    }

    if pick.json {
        let json = serde_json::to_string_pretty(&clips).into_diagnostic()?;
        println!("{json}");
    } else {
        for clip in &clips {
            let variant = &clip.variant;
            println!(
                "{:>10}  {:>4}x{:<4}  {:<5} {}",
                clip.candidate.id,
                variant.width,
                variant.height,
                variant.container_format,
                variant.url
            );
        }
    }

    // Downloads come after the listing so the picked clips are shown even if some fail
    if let Some(out) = &pick.out {
        std::fs::create_dir_all(out)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not create out directory {}", out.display()))?;

        let name = pick.query.as_deref().unwrap_or(&pick.topic);
        let report = download_clips(pexels.client(), &clips, out, name);
        if !report.failed.is_empty() {
            return Err(miette!(
                "{} of {} downloads failed (videos {})",
                report.failed.len(),
                clips.len(),
                report.failed.join(", ")
            ));
        }
    }

    Ok(())
}

fn pick_with<S: Shuffler>(
    pexels: &Pexels,
    shuffler: S,
    options: AcquisitionOptions,
    pick: &PickArgs,
    target_width: u32,
) -> miette::Result<Vec<PickedClip>> {
    let service = FootageService::with_shuffler(pexels, shuffler, options);
    Ok(service.pick(&pick.topic, pick.count, pick.query.as_deref(), target_width)?)
}
