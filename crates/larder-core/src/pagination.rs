//! Offset/limit pagination.

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Ceiling for page, limit and offset; stores encode them as signed 64-bit.
pub const MAX_VALUE: u64 = i64::MAX as u64;

/// A requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
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
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.clamp(1, MAX_VALUE),
            limit: limit.clamp(1, MAX_VALUE),
        }
    }

    /// Build from raw query values.
    ///
    /// Values are read like `parseInt`: leading digits count, anything that
    /// yields no number or zero falls back to the default.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(leading_number).unwrap_or(DEFAULT_PAGE),
            limit.and_then(leading_number).unwrap_or(DEFAULT_LIMIT),
        )
    }

    /// Number of documents to skip, never above [`MAX_VALUE`].
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_VALUE)
    }
}

fn leading_number(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    // All digits, so a parse failure can only be overflow.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX)).filter(|n| *n >= 1)
}

/// One page of results plus the total across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.request.limit)
    }

    pub fn has_next(&self) -> bool {
        self.request.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.request.page > 1
    }
}
