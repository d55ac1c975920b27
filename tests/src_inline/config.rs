use super::*;
use crate::model::params::Parameter;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("fishqc").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_score_command() {
    let cli = parse(&["score", "--eye", "9", "--gills", "-3", "--fish-name", "Tongkol"]);
    assert_eq!(cli.log_level, "info");
    let Command::Score(args) = cli.command else {
        panic!("expected score command");
    };
    let record = args.record();
    assert_eq!(record.eye, Some(9));
    assert_eq!(record.gills, Some(-3));
    assert_eq!(record.slime, None);
    assert_eq!(args.fish_name.as_deref(), Some("Tongkol"));
    assert_eq!(args.validation(), ValidationPolicy::Permissive);
}

#[test]
fn test_parse_run_defaults() {
    let cli = parse(&["run", "--input", "in.csv", "--out", "out"]);
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    let config = args.into_config().unwrap();
    assert_eq!(config.input, PathBuf::from("in.csv"));
    assert_eq!(config.out_dir, PathBuf::from("out"));
    assert_eq!(config.import.on_incomplete, IncompleteRowPolicy::Drop);
    assert_eq!(config.import.validation, ValidationPolicy::Permissive);
    assert_eq!(config.thresholds, CategoryThresholds::standard_v1());
    assert!(config.sort.is_none());
    assert!(!config.export.json_samples);
}

#[test]
fn test_parse_run_with_options() {
    let cli = parse(&[
        "--log-level",
        "debug",
        "run",
        "--input",
        "in.csv",
        "--out",
        "out",
        "--on-incomplete",
        "fill",
        "--fill-value",
        "2",
        "--strict",
        "--sort-by",
        "flesh",
        "--descending",
        "--json-samples",
        "--min-baik",
        "6.5",
    ]);
    assert_eq!(cli.log_level, "debug");
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    let config = args.into_config().unwrap();
    assert_eq!(config.import.on_incomplete, IncompleteRowPolicy::FillDefault(2));
    assert_eq!(config.import.validation, ValidationPolicy::Strict);
    assert_eq!(config.sort, Some((SampleField::Param(Parameter::Flesh), false)));
    assert!(config.export.json_samples);
    assert_eq!(config.thresholds.baik_min, 6.5);
    assert_eq!(config.thresholds.sangat_baik_min, 8.0);
}

#[test]
fn test_rejects_unordered_thresholds() {
    let cli = parse(&["run", "--input", "in.csv", "--out", "out", "--min-sedang", "7"]);
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    assert!(args.into_config().is_err());
}

#[test]
fn test_rejects_unknown_sort_field() {
    let res = Cli::try_parse_from(["fishqc", "run", "--input", "a", "--out", "b", "--sort-by", "fins"]);
    assert!(res.is_err());
}

#[test]
fn test_run_requires_input() {
    assert!(Cli::try_parse_from(["fishqc", "run", "--out", "b"]).is_err());
}

#[test]
fn test_policy_names() {
    assert_eq!(policy_name(IncompleteRowPolicy::FillDefault(3)), "fill(3)");
    assert_eq!(validation_name(ValidationPolicy::Strict), "strict");
}
