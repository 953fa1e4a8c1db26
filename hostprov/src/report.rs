use colored::Colorize;

use crate::backend::DirectoryHost;
use crate::outcome::{OperationReport, StepStatus};

/// Render an operation's itemized step outcomes for terminal output.
pub fn render_report_text(report: &OperationReport) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "operation={} subject={}",
        report.operation, report.subject
    ));
    out.push("steps".to_string());
    for step in &report.steps {
        let label = match step.status {
            StepStatus::Done => "done".green(),
            StepStatus::NotFound => "not-found".yellow(),
            StepStatus::Skipped => "skipped".cyan(),
            StepStatus::Failed => "failed".red(),
        };
        out.push(format!("- [{label}] {}: {}", step.step, step.detail));
    }
    out.push(format!(
        "result steps={} failed={}",
        report.steps.len(),
        report.failed_steps()
    ));
    out.join("\n")
}

/// Render the directory host inventory.
pub fn render_host_list(hosts: &[DirectoryHost], names_only: bool) -> String {
    let mut out = Vec::new();
    if hosts.is_empty() {
        out.push("- none".to_string());
        return out.join("\n");
    }
    for host in hosts {
        if names_only {
            out.push(host.name.clone());
        } else {
            out.push(format!(
                "- {} os={}",
                host.name,
                host.operating_system.as_deref().unwrap_or("unknown")
            ));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{render_host_list, render_report_text};
    use crate::backend::DirectoryHost;
    use crate::outcome::OperationReport;

    #[test]
    fn report_text_lists_every_step() {
        colored::control::set_override(false);
        let mut report = OperationReport::new("remove-host", "ws-old");
        report.done("forward record", "deleted ws-old -> 10.0.0.5");
        report.failed("identity object", "directory unreachable");

        let text = render_report_text(&report);
        assert!(text.contains("operation=remove-host subject=ws-old"));
        assert!(text.contains("- [done] forward record: deleted ws-old -> 10.0.0.5"));
        assert!(text.contains("- [failed] identity object: directory unreachable"));
        assert!(text.contains("result steps=2 failed=1"));
    }

    #[test]
    fn host_list_names_only_is_bare() {
        let hosts = vec![
            DirectoryHost {
                name: "ws-1".to_string(),
                operating_system: Some("Windows 11".to_string()),
            },
            DirectoryHost {
                name: "ws-2".to_string(),
                operating_system: None,
            },
        ];
        assert_eq!(render_host_list(&hosts, true), "ws-1\nws-2");
        assert_eq!(
            render_host_list(&hosts, false),
            "- ws-1 os=Windows 11\n- ws-2 os=unknown"
        );
    }

    #[test]
    fn empty_host_list_renders_none() {
        assert_eq!(render_host_list(&[], false), "- none");
    }
}
