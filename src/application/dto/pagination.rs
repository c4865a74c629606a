use serde::Serialize;

pub const DEFAULT_PAGE_LIMIT: i64 = 20;
pub const MAX_PAGE_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: i64,
    pub offset: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, limit: i64, offset: i64) -> Self {
        Self {
            items,
            limit,
            offset,
        }
    }
}

/// Clamps a requested limit into `[1, MAX_PAGE_LIMIT]`.
pub fn normalize_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_PAGE_LIMIT)
}

pub fn normalize_offset(offset: i64) -> i64 {
    offset.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_clamped_into_range() {
        assert_eq!(normalize_limit(0), 1);
        assert_eq!(normalize_limit(-5), 1);
        assert_eq!(normalize_limit(20), 20);
        assert_eq!(normalize_limit(10_000), MAX_PAGE_LIMIT);
    }

    #[test]
    fn negative_offsets_are_floored_at_zero() {
        assert_eq!(normalize_offset(-1), 0);
        assert_eq!(normalize_offset(7), 7);
    }
}
