use crate::core::field_registry::FieldRegistry;
use crate::state::validation::ValidationResult;
use crate::state::wizard::{Progress, SectionStatus, Wizard};
use crate::ui::style::{Color, Style, Theme};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 20;

pub fn progress_line(progress: Progress) -> String {
    format!(
        "Progress: {} of {}  {}%",
        progress.position,
        progress.total,
        progress.percent().round() as u32
    )
}

pub fn progress_bar(progress: Progress, width: usize) -> String {
    let width = width.max(4);
    let filled = (progress.ratio() * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat_n('▰', filled.min(width)));
    bar.extend(std::iter::repeat_n('▱', width.saturating_sub(filled)));
    bar
}

pub fn section_tabs(wizard: &Wizard, theme: Theme) -> Vec<String> {
    wizard
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let (marker, style) = match wizard.status_at(index) {
                SectionStatus::Done => ("✓", Style::new().color(Color::Green)),
                SectionStatus::Active => ("●", Style::new().color(Color::Cyan).bold()),
                SectionStatus::Pending => ("○", Style::new().color(Color::DarkGrey)),
            };
            theme.paint(&format!("{marker} {}", section.label()), style)
        })
        .collect()
}

pub fn header(wizard: &Wizard, theme: Theme) -> Vec<String> {
    let progress = wizard.progress();
    let mut lines = section_tabs(wizard, theme);
    lines.push(format!(
        "{} {}",
        progress_bar(progress, BAR_WIDTH),
        progress_line(progress)
    ));
    lines
}

/// One line per failing field, labels padded to a common display width.
pub fn error_lines(registry: &FieldRegistry, result: &ValidationResult, theme: Theme) -> Vec<String> {
    let labels: Vec<_> = result
        .errors
        .keys()
        .map(|key| {
            registry
                .definition(*key)
                .map(|d| d.label())
                .unwrap_or(key.label())
        })
        .collect();
    let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    labels
        .iter()
        .zip(result.errors.values())
        .map(|(label, message)| {
            let pad = " ".repeat(width - label.width());
            format!(
                "  {label}{pad}  {}",
                theme.paint(message, Style::new().color(Color::Red))
            )
        })
        .collect()
}

pub fn failure_report(
    registry: &FieldRegistry,
    failures: &[ValidationResult],
    theme: Theme,
) -> Vec<String> {
    let mut lines = Vec::new();
    for result in failures {
        lines.push(theme.paint(result.section.label(), Style::new().bold()));
        lines.extend(error_lines(registry, result, theme));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKey;
    use crate::core::section::Section;
    use indexmap::IndexMap;
    use std::sync::Arc;

    #[test]
    fn progress_text_matches_portal() {
        let progress = Progress {
            position: 2,
            total: 5,
        };
        assert_eq!(progress_line(progress), "Progress: 2 of 5  40%");
        assert_eq!(progress_bar(progress, 10), "▰▰▰▰▱▱▱▱▱▱");
    }

    #[test]
    fn tabs_mark_status() {
        let wizard = Wizard::new(Arc::new(FieldRegistry::employee())).expect("wizard");
        let tabs = section_tabs(&wizard, Theme::PLAIN);
        assert_eq!(tabs[0], "● Basic Identification");
        assert_eq!(tabs[1], "○ Address Details");
    }

    #[test]
    fn error_labels_are_aligned() {
        let registry = FieldRegistry::employee();
        let mut errors = IndexMap::new();
        errors.insert(FieldKey::Dob, "Date of Birth is required".to_string());
        errors.insert(FieldKey::Gender, "Gender is required".to_string());
        let result = ValidationResult {
            section: Section::Basic,
            errors,
        };

        let lines = error_lines(&registry, &result, Theme::PLAIN);
        assert_eq!(lines[0], "  Date of Birth  Date of Birth is required");
        assert_eq!(lines[1], "  Gender         Gender is required");
    }
}
