pub mod csv;
pub mod json;
pub mod presentation;
pub mod summary;
pub mod text;

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_fraction(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_opt(v: Option<f64>) -> String {
    v.map(format_score).unwrap_or_else(|| "-".to_string())
}
