//! Domain-specific assertion macros for seek harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear what the results area was showing instead.

/// Assert that a [`RecordingView`](crate::common::RecordingView) shows
/// exactly these result headings, in order.
///
/// ```rust
/// assert_headings!(view, ["Red Panda", "Owl"]);
/// ```
#[macro_export]
macro_rules! assert_headings {
    ($view:expr, [$($heading:expr),* $(,)?]) => {{
        let view = &$view;
        let expected: Vec<&str> = vec![$($heading),*];
        if let Some(message) = &view.message {
            panic!(
                "assert_headings! failed: view shows message {:?} instead of {:?}",
                message, expected
            );
        }
        pretty_assertions::assert_eq!(view.headings(), expected);
    }};
}

/// Assert that the view shows a single message and no result blocks.
#[macro_export]
macro_rules! assert_message {
    ($view:expr, $text:expr) => {{
        let view = &$view;
        let text: &str = $text;
        match &view.message {
            Some(actual) if actual == text => {}
            Some(actual) => panic!(
                "assert_message! failed:\n  expected: {:?}\n  actual:   {:?}",
                text, actual
            ),
            None => panic!(
                "assert_message! failed: expected {:?}, view shows blocks {:?}",
                text,
                view.headings()
            ),
        }
        assert!(view.blocks.is_empty(), "message shown alongside result blocks");
    }};
}
