use serde::Serialize;

/// Outcome of one step of a mutation or removal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    /// The step made its change.
    Done,
    /// There was nothing for the step to change.
    NotFound,
    /// The step could not run because an input it needs was never found.
    Skipped,
    /// The step ran and failed; the operation continued past it.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub status: StepStatus,
    pub detail: String,
}

/// Itemized result of a provisioning operation.
///
/// Partial failure is an expected terminal state here, so an operation is
/// never summarized as a single boolean; callers re-drive individual failed
/// steps instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    pub operation: String,
    pub subject: String,
    pub steps: Vec<StepOutcome>,
}

impl OperationReport {
    pub fn new(operation: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            subject: subject.into(),
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: &str, status: StepStatus, detail: impl Into<String>) {
        self.steps.push(StepOutcome {
            step: step.to_string(),
            status,
            detail: detail.into(),
        });
    }

    pub fn done(&mut self, step: &str, detail: impl Into<String>) {
        self.push(step, StepStatus::Done, detail);
    }

    pub fn not_found(&mut self, step: &str, detail: impl Into<String>) {
        self.push(step, StepStatus::NotFound, detail);
    }

    pub fn skipped(&mut self, step: &str, detail: impl Into<String>) {
        self.push(step, StepStatus::Skipped, detail);
    }

    pub fn failed(&mut self, step: &str, detail: impl Into<String>) {
        self.push(step, StepStatus::Failed, detail);
    }

    pub fn failed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Failed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::{OperationReport, StepStatus};

    #[test]
    fn counts_only_failed_steps() {
        let mut report = OperationReport::new("remove-host", "ws-old");
        report.done("forward record", "deleted");
        report.not_found("reverse record", "no PTR present");
        report.skipped("filter entry", "hardware address unknown");
        report.failed("identity object", "directory unreachable");

        assert_eq!(report.failed_steps(), 1);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[1].status, StepStatus::NotFound);
    }
}
