use crate::model::category::Category;
use crate::model::thresholds::CategoryThresholds;
use crate::report::json::ImportInfo;
use crate::report::presentation::{category_color, explanation, recommendation};
use crate::report::summary::SampleSummary;
use crate::report::{format_fraction, format_opt, format_score};

pub fn render_report_text(
    summary: &SampleSummary,
    input: Option<&ImportInfo>,
    thresholds: &CategoryThresholds,
) -> String {
    let mut out = String::new();

    out.push_str("Fish Freshness Report\n");
    out.push_str("=====================\n\n");

    out.push_str("1. Samples\n");
    if let Some(info) = input {
        out.push_str(&format!("Source: {}\n", info.source));
        out.push_str(&format!(
            "Incomplete rows: {} dropped, {} filled (policy: {})\n",
            info.dropped_rows, info.filled_rows, info.incomplete_policy
        ));
        out.push_str(&format!("Validation: {}\n", info.validation));
    }
    out.push_str(&format!(
        "Scored samples: {} ({} valid)\n\n",
        summary.n_samples, summary.n_valid
    ));

    out.push_str("2. Freshness categories\n");
    for stat in &summary.categories {
        out.push_str(&format!(
            "{:<12} [{}] {} ({})\n",
            stat.category.name(),
            category_color(stat.category),
            stat.count,
            format_fraction(stat.fraction)
        ));
    }
    out.push_str(&format!(
        "Score mean: {}  min: {}  max: {}\n\n",
        format_opt(summary.score_mean),
        format_opt(summary.score_min),
        format_opt(summary.score_max)
    ));

    out.push_str("3. Parameters\n");
    for avg in &summary.parameters {
        out.push_str(&format!(
            "{:<8} {} (n={})\n",
            avg.parameter.label(),
            format_opt(avg.average),
            avg.n
        ));
    }
    if summary.best_parameter.parameter.is_some() {
        out.push_str(&format!(
            "Best parameter: {} ({})\n\n",
            summary.best_parameter.label(),
            format_score(summary.best_parameter.score)
        ));
    } else {
        out.push_str("Best parameter: -\n\n");
    }

    out.push_str("4. Assessment\n");
    match (summary.dominant_category(), summary.score_mean) {
        (Some(dominant), Some(mean)) => {
            // explanation follows the band of the mean, not the most frequent band
            let band = Category::from_score(mean, thresholds);
            out.push_str(&format!("Dominant category: {}\n", dominant.name()));
            out.push_str(&format!(
                "Mean score band: {} ({})\n",
                band.name(),
                format_score(mean)
            ));
            out.push_str(&format!("{}\n", explanation(band, mean)));
            out.push_str(&format!("Recommendation: {}\n", recommendation(band)));
        }
        _ => {
            out.push_str(&format!("{}\n", explanation(Category::Invalid, 0.0)));
            out.push_str(&format!(
                "Recommendation: {}\n",
                recommendation(Category::Invalid)
            ));
        }
    }
    if summary.excluded_value_samples > 0 {
        out.push_str(&format!(
            "Warning: {} sample(s) use rating 4, which the grading standard does not assign\n",
            summary.excluded_value_samples
        ));
    }

    out
}
