#[derive(Debug, Clone, PartialEq)]
pub struct CategoryThresholds {
    pub sangat_baik_min: f64,
    pub baik_min: f64,
    pub sedang_min: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    Strict,
}

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 9;
pub const EXCLUDED_RATING: i32 = 4;

impl CategoryThresholds {
    pub fn standard_v1() -> Self {
        Self {
            sangat_baik_min: 8.0,
            baik_min: 6.0,
            sedang_min: 4.0,
        }
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self::standard_v1()
    }
}
