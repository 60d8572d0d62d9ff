use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Requested page of a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Parse raw query values. Absent, non-numeric or non-positive values
    /// fall back to the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            limit: positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of records to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn positive(raw: Option<&str>) -> Option<i64> {
    leading_integer(raw?).filter(|n| *n >= 1)
}

/// Integer prefix of `raw` after leading whitespace, so "10abc" reads as 10
/// and "2.5" as 2. `None` if there are no digits or the value overflows.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let sign_len = raw.len() - unsigned.len();
    raw[..sign_len + digits].parse().ok()
}

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    /// Total number of matching recipes
    pub total: i64,
    /// Current page (1-based)
    pub page: i64,
    /// Number of pages, 0 when there are no matches
    pub pages: i64,
    /// Page size
    pub limit: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            total,
            page: request.page,
            pages: page_count(total, request.limit),
            limit: request.limit,
        }
    }
}

/// `ceil(total / limit)`
pub fn page_count(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}
