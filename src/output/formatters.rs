//! Formatting utilities for terminal output

/// Format confirmed positions as a word template, `_` for unknown slots
///
/// # Examples
/// ```
/// use wordle_constraints::output::formatters::format_confirmed;
///
/// assert_eq!(format_confirmed(&[None, Some(b'i'), None, None, Some(b'e')]), "_i__e");
/// ```
#[must_use]
pub fn format_confirmed(confirmed: &[Option<u8>]) -> String {
    confirmed
        .iter()
        .map(|slot| slot.map_or('_', char::from))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a word score relative to the best score in the dictionary
#[must_use]
pub fn score_bar(score: u64, best: u64, width: usize) -> String {
    create_progress_bar(score as f64, best as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_template() {
        assert_eq!(format_confirmed(&[None; 5]), "_____");
        assert_eq!(
            format_confirmed(&[Some(b'w'), Some(b'i'), None, Some(b'c'), Some(b'e')]),
            "wi_ce"
        );
        assert_eq!(format_confirmed(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_relative_to_best() {
        assert_eq!(score_bar(12, 12, 6), "██████");
        assert_eq!(score_bar(6, 12, 6), "███░░░");
    }
}
