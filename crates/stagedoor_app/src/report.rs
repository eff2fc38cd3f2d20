//! Scenario run reports

/// Final report of a scenario run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Steps executed before the run ended
    pub steps_executed: usize,
    /// The failed assertion, if any
    pub failure: Option<StepFailure>,
}

/// One failed assertion
#[derive(Debug, Clone)]
pub struct StepFailure {
    /// Step tag, e.g. `assert_resolved`
    pub step: &'static str,
    pub step_index: usize,
    pub message: String,
}

impl ScenarioReport {
    pub fn passed(steps_executed: usize) -> Self {
        Self {
            steps_executed,
            failure: None,
        }
    }

    pub fn failed(
        step: &'static str,
        step_index: usize,
        message: impl Into<String>,
        steps_executed: usize,
    ) -> Self {
        Self {
            steps_executed,
            failure: Some(StepFailure {
                step,
                step_index,
                message: message.into(),
            }),
        }
    }

    pub fn is_passed(&self) -> bool {
        self.failure.is_none()
    }
}
