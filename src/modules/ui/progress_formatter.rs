use crate::core::models::SlideDuration;
use std::time::Duration;

/// Formats a duration as MM:SS or HH:MM:SS
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

const FILLED: char = '█';
const EMPTY: char = '░';
const GAP: char = ' ';

/// Story-style progress strip: one segment per slide.
///
/// Slides before `index` are full, the current one is filled by `fraction`,
/// later ones are empty. `width` is the total character budget including the
/// single-space gaps between segments; every segment gets at least one cell.
pub fn render_segments(count: usize, index: usize, fraction: f64, width: usize) -> String {
    if count == 0 {
        return String::new();
    }

    let gaps = count - 1;
    let cell = (width.saturating_sub(gaps) / count).max(1);
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };

    let mut out = String::with_capacity(count * (cell + 1) * 3);
    for slide in 0..count {
        if slide > 0 {
            out.push(GAP);
        }

        let filled = if slide < index {
            cell
        } else if slide == index {
            (fraction * cell as f64).floor() as usize
        } else {
            0
        };

        out.extend(std::iter::repeat_n(FILLED, filled));
        out.extend(std::iter::repeat_n(EMPTY, cell - filled));
    }

    out
}

/// Label for the current slide: "3/5  00:02 / 00:05".
///
/// Video slides show a percentage until the media reports its length.
pub fn slide_label(index: usize, count: usize, fraction: f64, duration: Option<SlideDuration>) -> String {
    let position = format!("{}/{}", index + 1, count);
    let fraction = fraction.clamp(0.0, 1.0);

    match duration {
        Some(d) if d.is_exact() => {
            let total = d.nominal();
            let elapsed = total.mul_f64(fraction);
            format!("{position}  {} / {}", format_duration(elapsed), format_duration(total))
        }
        Some(_) => format!("{position}  {}%", (fraction * 100.0).round() as u8),
        None => position,
    }
}

const ELLIPSIS: char = '…';

/// Fit one frame line into `width` terminal columns.
///
/// `extra` (key help and similar) is appended only when the whole line fits;
/// otherwise `main` alone is truncated with an ellipsis. The last column is
/// never used, so the terminal does not wrap onto the next row.
pub fn fit_line(main: &str, extra: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);

    let full_len = main.chars().count() + extra.chars().count();
    if !extra.is_empty() && full_len <= budget {
        return format!("{main}{extra}");
    }

    if main.chars().count() <= budget {
        return main.to_string();
    }
    if budget == 0 {
        return String::new();
    }

    let mut out: String = main.chars().take(budget - 1).collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_minutes_and_hours() {
        assert_eq!(format_duration(Duration::from_secs(65)), "01:05");
        assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
    }

    #[test]
    fn segments_fill_past_and_part_of_current() {
        // 3 slides, width 11 → 2 gaps, 3 cells each
        let bar = render_segments(3, 1, 0.5, 11);
        assert_eq!(bar, "███ █░░ ░░░");
    }

    #[test]
    fn segments_complete_current_at_full_fraction() {
        assert_eq!(render_segments(2, 0, 1.0, 5), "██ ░░");
    }

    #[test]
    fn tiny_width_keeps_one_cell_per_slide() {
        assert_eq!(render_segments(4, 0, 0.0, 2), "░ ░ ░ ░");
    }

    #[test]
    fn bad_fraction_renders_empty_current() {
        assert_eq!(render_segments(1, 0, f64::NAN, 4), "░░░░");
        assert_eq!(render_segments(1, 0, 7.0, 4), "████");
    }

    #[test]
    fn no_slides_renders_nothing() {
        assert_eq!(render_segments(0, 0, 0.5, 40), "");
    }

    #[test]
    fn fixed_label_shows_elapsed_of_total() {
        let label = slide_label(1, 3, 0.4, Some(SlideDuration::Fixed(Duration::from_secs(5))));
        assert_eq!(label, "2/3  00:02 / 00:05");
    }

    #[test]
    fn video_label_shows_percentage() {
        let label = slide_label(
            0,
            2,
            0.257,
            Some(SlideDuration::video(Duration::from_secs(15))),
        );
        assert_eq!(label, "1/2  26%");
    }

    #[test]
    fn video_label_shows_times_once_length_is_known() {
        let duration = SlideDuration::PlaybackDriven {
            hint: Duration::from_secs(15),
            length: Some(Duration::from_secs(40)),
        };
        assert_eq!(slide_label(0, 1, 0.25, Some(duration)), "1/1  00:10 / 00:40");
    }

    // ── Line fitting ──────────────────────────────────────────────────────────

    #[test]
    fn extra_is_kept_when_everything_fits() {
        assert_eq!(fit_line("abc", " | help", 20), "abc | help");
    }

    #[test]
    fn extra_is_dropped_before_main_is_cut() {
        assert_eq!(fit_line("abcdef", " | help", 10), "abcdef");
    }

    #[test]
    fn long_main_is_truncated_below_width() {
        let line = fit_line(&"x".repeat(200), " | help", 80);
        assert_eq!(line.chars().count(), 79);
        assert!(line.ends_with('…'));
    }

    #[test]
    fn multibyte_cells_count_as_one_column() {
        let line = fit_line("▶ ███░░ 1/3", "", 8);
        assert_eq!(line, "▶ ███░…");
    }

    #[test]
    fn degenerate_width_renders_nothing() {
        assert_eq!(fit_line("abc", "", 0), "");
        assert_eq!(fit_line("abc", "", 1), "");
    }
}
