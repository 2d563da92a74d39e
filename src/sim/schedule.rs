use std::time::Duration;

/// How long each "Loading" message stays up.
pub const LOADING_HOLD: Duration = Duration::from_millis(400);
/// Extra pause after the last loading message, before the model "completes".
pub const SETTLE_HOLD: Duration = Duration::from_millis(1100);
/// Indicator shown after "Loading <model>", one entry per loading message.
pub const LOADING_GLYPHS: [&str; 3] = ["⏳", "⏳⏳", "⏳⏳⏳"];

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// One visible change of the simulated run.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// Announce the model about to run.
    Banner {
        model: &'static str,
        position: usize,
        total: usize,
    },
    Loading {
        model: &'static str,
        glyphs: &'static str,
    },
    /// Nothing changes; only the hold matters.
    Settle,
    /// Record the model as succeeded and advance progress.
    Complete {
        model: &'static str,
        position: usize,
        total: usize,
    },
    /// Clear the live status and reveal the results.
    Finish,
}

/// An action followed by how long to wait before the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedStep {
    pub action: StepAction,
    pub hold: Duration,
}

impl TimedStep {
    fn new(action: StepAction, hold: Duration) -> Self {
        Self { action, hold }
    }
}

/// Build the full step list for a roster.
pub fn build_schedule(models: &[&'static str]) -> Vec<TimedStep> {
    let total = models.len();
    let mut steps = Vec::with_capacity(total * 6 + 1);

    for (i, &model) in models.iter().enumerate() {
        let position = i + 1;
        steps.push(TimedStep::new(
            StepAction::Banner {
                model,
                position,
                total,
            },
            Duration::ZERO,
        ));
        for glyphs in LOADING_GLYPHS {
            steps.push(TimedStep::new(
                StepAction::Loading { model, glyphs },
                LOADING_HOLD,
            ));
        }
        steps.push(TimedStep::new(StepAction::Settle, SETTLE_HOLD));
        steps.push(TimedStep::new(
            StepAction::Complete {
                model,
                position,
                total,
            },
            Duration::ZERO,
        ));
    }

    steps.push(TimedStep::new(StepAction::Finish, Duration::ZERO));
    steps
}

/// Sum of every hold in the schedule.
pub fn total_duration(steps: &[TimedStep]) -> Duration {
    steps.iter().map(|s| s.hold).sum()
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub fn banner_text(model: &str, position: usize, total: usize) -> String {
    format!("🔄 Running {model} ({position}/{total})")
}

pub fn loading_text(model: &str, glyphs: &str) -> String {
    format!("Loading {model} {glyphs}")
}

pub fn success_text(model: &str) -> String {
    format!("✅ {model} completed successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::roster::MODELS;

    #[test]
    fn each_model_gets_banner_three_loads_settle_complete() {
        let steps = build_schedule(&MODELS);
        assert_eq!(steps.len(), MODELS.len() * 6 + 1);

        let first: Vec<&StepAction> = steps[..6].iter().map(|s| &s.action).collect();
        assert_eq!(
            first,
            vec![
                &StepAction::Banner {
                    model: "albert-base-v2",
                    position: 1,
                    total: 9
                },
                &StepAction::Loading {
                    model: "albert-base-v2",
                    glyphs: "⏳"
                },
                &StepAction::Loading {
                    model: "albert-base-v2",
                    glyphs: "⏳⏳"
                },
                &StepAction::Loading {
                    model: "albert-base-v2",
                    glyphs: "⏳⏳⏳"
                },
                &StepAction::Settle,
                &StepAction::Complete {
                    model: "albert-base-v2",
                    position: 1,
                    total: 9
                },
            ]
        );
        assert_eq!(steps.last().map(|s| &s.action), Some(&StepAction::Finish));
    }

    #[test]
    fn completions_follow_roster_order() {
        let completed: Vec<&str> = build_schedule(&MODELS)
            .iter()
            .filter_map(|s| match s.action {
                StepAction::Complete { model, .. } => Some(model),
                _ => None,
            })
            .collect();
        assert_eq!(completed, MODELS.to_vec());
    }

    #[test]
    fn total_run_takes_twenty_point_seven_seconds() {
        let steps = build_schedule(&MODELS);
        assert_eq!(total_duration(&steps), Duration::from_millis(20_700));
    }

    #[test]
    fn empty_roster_finishes_immediately() {
        let steps = build_schedule(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(total_duration(&steps), Duration::ZERO);
    }

    #[test]
    fn message_formats() {
        assert_eq!(banner_text("gpt2", 9, 9), "🔄 Running gpt2 (9/9)");
        assert_eq!(loading_text("gpt2", "⏳⏳"), "Loading gpt2 ⏳⏳");
        assert_eq!(success_text("gpt2"), "✅ gpt2 completed successfully");
    }
}
