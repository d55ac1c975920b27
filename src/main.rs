use clap::Parser;

use fishqc::config::{BestArgs, Cli, Command, RunArgs, ScoreArgs, policy_name, validation_name};
use fishqc::pipeline::export::write_reports;
use fishqc::report::json::ImportInfo;
use fishqc::report::presentation::{category_color, explanation, recommendation};
use fishqc::report::format_score;
use fishqc::{
    RandomIds, SampleNotes, Scorer, SystemClock, find_best_parameter, find_excluded_values,
    logging, read_csv, sort_samples,
};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Score(args) => run_score(&args),
        Command::Run(args) => run_pipeline(args),
        Command::Best(args) => run_best(&args),
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), String> {
    let scorer = Scorer::system();
    let notes = SampleNotes {
        fish_name: args.fish_name.clone(),
        ..SampleNotes::default()
    };
    let sample = scorer
        .score_checked(args.record(), notes, args.validation())
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&sample).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        let category = sample.category();
        if let Some(name) = sample.fish_name() {
            println!("Fish: {name}");
        }
        println!("Score: {}", format_score(sample.score()));
        println!("Category: {} [{}]", category, category_color(category));
        println!("{}", explanation(category, sample.score()));
        println!("Recommendation: {}", recommendation(category));
    }
    if let Some(warning) = find_excluded_values(&sample).message() {
        tracing::warn!("{warning}");
    }
    Ok(())
}

fn run_pipeline(args: RunArgs) -> Result<(), String> {
    let config = args.into_config()?;
    let scorer = Scorer::new(&SystemClock, &RandomIds, config.thresholds.clone());

    let import = read_csv(&config.input, &config.import, &scorer).map_err(|e| e.to_string())?;
    if import.dropped_rows > 0 {
        tracing::warn!(
            "{} incomplete row(s) dropped from {}",
            import.dropped_rows,
            config.input.display()
        );
    }

    let samples = match &config.sort {
        Some((field, ascending)) => {
            tracing::info!(field = %field, ascending, "sorting samples");
            sort_samples(&import.samples, field, *ascending)
        }
        None => import.samples,
    };

    let info = ImportInfo {
        source: config.input.display().to_string(),
        dropped_rows: import.dropped_rows,
        filled_rows: import.filled_rows,
        incomplete_policy: policy_name(config.import.on_incomplete),
        validation: validation_name(config.import.validation).to_string(),
    };

    write_reports(
        &samples,
        Some(&info),
        &config.out_dir,
        &config.thresholds,
        config.export,
    )
    .map_err(|e| e.to_string())
}

fn run_best(args: &BestArgs) -> Result<(), String> {
    let thresholds = args.import.thresholds()?;
    let scorer = Scorer::new(&SystemClock, &RandomIds, thresholds);
    let import = read_csv(&args.import.input, &args.import.options(), &scorer)
        .map_err(|e| e.to_string())?;
    let best = find_best_parameter(&import.samples);
    match best.parameter {
        Some(_) => println!("{}\t{}", best.label(), format_score(best.score)),
        None => println!("-\t{}", format_score(best.score)),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
