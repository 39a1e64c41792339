use chrono::NaiveDateTime;

/// An exclusive date range `(after, before)`.
///
/// A missing bound is unbounded on that side. A timestamp equal to either
/// bound is outside the window, and a record without a usable timestamp is
/// outside every window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub after: Option<NaiveDateTime>,
    pub before: Option<NaiveDateTime>,
}

impl Window {
    pub const UNBOUNDED: Window = Window { after: None, before: None };

    pub fn new(after: Option<NaiveDateTime>, before: Option<NaiveDateTime>) -> Self {
        Self { after, before }
    }

    pub fn between(after: NaiveDateTime, before: NaiveDateTime) -> Self {
        Self::new(Some(after), Some(before))
    }

    #[inline]
    pub fn contains(&self, timestamp: Option<NaiveDateTime>) -> bool {
        let Some(timestamp) = timestamp else {
            return false;
        };
        let after = self.after.unwrap_or(NaiveDateTime::MIN);
        let before = self.before.unwrap_or(NaiveDateTime::MAX);
        timestamp > after && timestamp < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::date::parse_timestamp;

    fn ts(text: &str) -> NaiveDateTime {
        parse_timestamp(text).unwrap()
    }

    #[test]
    fn test_window_excludes_bounds() {
        let after = ts("1.1.2014 0:0:0");
        let before = ts("1.1.2015 0:0:0");
        let window = Window::between(after, before);

        assert!(!window.contains(Some(after)));
        assert!(!window.contains(Some(before)));
        assert!(window.contains(Some(ts("1.1.2014 0:0:1"))));
        assert!(window.contains(Some(ts("31.12.2014 23:59:59"))));
    }

    #[test]
    fn test_window_outside_range() {
        let window = Window::between(ts("1.1.2014 0:0:0"), ts("1.1.2015 0:0:0"));
        assert!(!window.contains(Some(ts("31.12.2013 23:59:59"))));
        assert!(!window.contains(Some(ts("1.1.2015 0:0:1"))));
    }

    #[test]
    fn test_unbounded_sides() {
        let pivot = ts("9.6.2013 12:22:51");

        assert!(Window::UNBOUNDED.contains(Some(pivot)));
        assert!(Window::new(None, Some(pivot)).contains(Some(ts("1.1.1900 0:0:0"))));
        assert!(!Window::new(None, Some(pivot)).contains(Some(pivot)));
        assert!(Window::new(Some(pivot), None).contains(Some(ts("1.1.2999 0:0:0"))));
        assert!(!Window::new(Some(pivot), None).contains(Some(pivot)));
    }

    #[test]
    fn test_missing_timestamp_never_matches() {
        assert!(!Window::UNBOUNDED.contains(None));
        assert!(!Window::between(ts("1.1.2014 0:0:0"), ts("1.1.2015 0:0:0")).contains(None));
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let window = Window::between(ts("1.1.2015 0:0:0"), ts("1.1.2014 0:0:0"));
        assert!(!window.contains(Some(ts("1.6.2014 0:0:0"))));
    }
}
