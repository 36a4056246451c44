//! Shared rendering for check results.

use crate::checker::{format_label, CheckReport};
use crate::ui::{StatusKind, TraincheckTheme, UserInterface};

/// Render the per-training status table in required-list order.
pub fn show_check_report(ui: &mut dyn UserInterface, report: &CheckReport) {
    let theme = TraincheckTheme::new();

    ui.message(&format!("{}", theme.key.apply_to("Training Status:")));
    for entry in report.iter() {
        let kind = StatusKind::from(entry.satisfied);
        ui.message(&format!("  {}", kind.format(&theme, &entry.training)));
    }
}

/// Render the "User is missing:" list, or nothing when the report is clean.
pub fn show_missing(ui: &mut dyn UserInterface, report: &CheckReport) {
    let missing: Vec<&str> = report.missing().collect();
    if missing.is_empty() {
        return;
    }

    let theme = TraincheckTheme::new();
    ui.message("");
    ui.message(&format!("{}", theme.key.apply_to("User is missing:")));
    for training in missing {
        ui.message(&format!("  {}", training));
    }
}

/// Render the composite verdict line: status dot + compact name + counts.
pub fn show_summary(ui: &mut dyn UserInterface, report: &CheckReport, name: Option<&str>) {
    let label = format_label(name, report.all_satisfied());

    if report.is_empty() {
        ui.warning(&format!("{} · no required trainings to check", label));
    } else if report.all_satisfied() {
        ui.success(&format!("{} · all required trainings current", label));
    } else {
        let missing = report.len() - report.satisfied_count();
        ui.error(&format!(
            "{} · {} of {} required trainings missing",
            label,
            missing,
            report.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{check_trainings, REQUIRED_TRAININGS};
    use crate::ui::MockUI;

    #[test]
    fn report_table_lists_every_training() {
        let report = check_trainings("Ladder Safety Online - Current", &REQUIRED_TRAININGS);
        let mut ui = MockUI::new();

        show_check_report(&mut ui, &report);

        assert!(ui.has_message("Training Status:"));
        for training in REQUIRED_TRAININGS {
            assert!(ui.has_message(training), "missing row for {}", training);
        }
    }

    #[test]
    fn missing_list_preserves_required_order() {
        let report = check_trainings("Ladder Safety Online - Current", &REQUIRED_TRAININGS);
        let mut ui = MockUI::new();

        show_missing(&mut ui, &report);

        assert!(ui.has_message("User is missing:"));
        // 8 missing rows + blank spacer + heading
        assert_eq!(ui.messages().len(), 10);
        assert!(ui.has_message("Electrical Safety Awareness Online"));
        assert!(!ui.has_message("Ladder Safety Online"));
    }

    #[test]
    fn missing_list_is_silent_when_clean() {
        let text: String = REQUIRED_TRAININGS
            .iter()
            .map(|t| format!("{} - Current\n", t))
            .collect();
        let report = check_trainings(&text, &REQUIRED_TRAININGS);
        let mut ui = MockUI::new();

        show_missing(&mut ui, &report);

        assert!(ui.messages().is_empty());
    }

    #[test]
    fn summary_success_when_all_current() {
        let text: String = REQUIRED_TRAININGS
            .iter()
            .map(|t| format!("{} - Current\n", t))
            .collect();
        let report = check_trainings(&text, &REQUIRED_TRAININGS);
        let mut ui = MockUI::new();

        show_summary(&mut ui, &report, Some("Jane Q Public"));

        assert!(ui.has_success("🟢 J. Public"));
        assert!(ui.has_success("all required trainings current"));
    }

    #[test]
    fn summary_error_with_missing_count() {
        let report = check_trainings("Ladder Safety Online - Current", &REQUIRED_TRAININGS);
        let mut ui = MockUI::new();

        show_summary(&mut ui, &report, None);

        assert!(ui.has_error("🔴 Tab"));
        assert!(ui.has_error("8 of 9"));
    }

    #[test]
    fn summary_warns_on_empty_report() {
        let report = check_trainings("anything", &[] as &[&str]);
        let mut ui = MockUI::new();

        show_summary(&mut ui, &report, None);

        assert!(ui.has_warning("no required trainings"));
    }
}
