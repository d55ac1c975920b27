use super::*;
use crate::model::identity::{FixedClock, SequentialIds};
use crate::model::params::ParameterRecord;
use crate::model::thresholds::CategoryThresholds;
use crate::pipeline::score::{SampleNotes, Scorer};
use crate::test_support::{fixed_time, full, rec, samples};

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(to_csv(&[]), Err(EncodeError::EmptyInput)));
}

#[test]
fn test_header_and_rows() {
    let s = samples(&[full([9; 6]), rec(Some(3), Some(3), None, None, None, None)]);
    let text = to_csv(&s).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[0],
        "id,eye,gills,slime,flesh,odor,texture,score,category,timestamp,fishName,aiResponse"
    );
    assert_eq!(
        lines[1],
        "t-1,9,9,9,9,9,9,9,Sangat Baik,2024-05-01T08:30:00.000Z,,"
    );
    assert_eq!(lines[2], "t-2,3,3,,,,,3,Busuk,2024-05-01T08:30:00.000Z,,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_cells_with_commas_and_quotes_are_quoted() {
    let clock = FixedClock(fixed_time());
    let ids = SequentialIds::new("q");
    let scorer = Scorer::new(&clock, &ids, CategoryThresholds::standard_v1());
    let s = scorer.score_named(
        ParameterRecord::uniform(7),
        SampleNotes {
            fish_name: Some("Kakap \"merah\"".to_string()),
            ai_response: Some("mata jernih, insang\nmerah".to_string()),
            ..SampleNotes::default()
        },
    );
    let text = to_csv(&[s]).unwrap();
    assert!(text.ends_with(",\"Kakap \"\"merah\"\"\",\"mata jernih, insang\nmerah\"\n"));
}

#[test]
fn test_escape_field() {
    assert_eq!(escape_field("plain"), "plain");
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn test_write_csv_to_disk() {
    let mut path = std::env::temp_dir();
    path.push(format!("fishqc_write_csv_{}.csv", std::process::id()));
    write_csv(&path, &samples(&[full([6; 6])])).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,eye"));
    std::fs::remove_file(&path).unwrap();
}
