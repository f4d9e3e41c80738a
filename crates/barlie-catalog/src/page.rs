//! Request shapes shared by every catalog: page windows and open/closed
//! attribute ranges.

/// A 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: u32,
}

impl Page {
    /// Builds a page, clamping `number` and `size` to at least 1.
    #[must_use]
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn first(size: u32) -> Self {
        Self::new(1, size)
    }

    #[must_use]
    pub fn number(self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn size(self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            number: self.number.saturating_add(1),
            size: self.size,
        }
    }

    /// Number of items to skip when slicing a full, unpaginated result list.
    #[must_use]
    pub fn offset(self) -> usize {
        (self.number as usize - 1).saturating_mul(self.size as usize)
    }

    /// Cuts this page out of a full result list.
    #[must_use]
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.size as usize)
            .collect()
    }
}

/// Exclusive lower/upper bounds on a numeric attribute. A missing bound is
/// unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    #[must_use]
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Mirrors the provider's `_gt` / `_lt` semantics.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min.is_none_or(|min| value > min) && self.max.is_none_or(|max| value < max)
    }
}

/// Renders a bound for a query string, always with a decimal point
/// (`7.0`, not `7`).
#[must_use]
pub(crate) fn format_bound(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_zero_to_one() {
        let page = Page::new(0, 0);
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), 1);
    }

    #[test]
    fn next_advances_number_and_keeps_size() {
        let page = Page::first(25).next();
        assert_eq!(page, Page::new(2, 25));
        assert_eq!(page.offset(), 25);
    }

    #[test]
    fn first_page_has_no_offset() {
        assert_eq!(Page::first(10).offset(), 0);
    }

    #[test]
    fn slice_cuts_requested_window() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(Page::new(1, 3).slice(items.clone()), vec![1, 2, 3]);
        assert_eq!(Page::new(3, 3).slice(items.clone()), vec![7]);
        assert!(Page::new(4, 3).slice(items).is_empty());
    }

    #[test]
    fn bounds_are_exclusive() {
        let bounds = Bounds::between(4.0, 6.0);
        assert!(bounds.contains(5.0));
        assert!(!bounds.contains(4.0));
        assert!(!bounds.contains(6.0));
    }

    #[test]
    fn missing_bound_is_unbounded() {
        assert!(Bounds::new(Some(7.0), None).contains(99.0));
        assert!(Bounds::new(None, Some(4.5)).contains(0.0));
        assert!(Bounds::default().contains(-1.0));
    }

    #[test]
    fn format_bound_keeps_decimal_point() {
        assert_eq!(format_bound(7.0), "7.0");
        assert_eq!(format_bound(15.0), "15.0");
        assert_eq!(format_bound(4.5), "4.5");
        assert_eq!(format_bound(0.0), "0.0");
    }
}
