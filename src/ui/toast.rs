//! Toast notification timing and look

use serde::{Deserialize, Serialize};

/// Toast colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
}

impl Severity {
    pub fn background(&self) -> &'static str {
        match self {
            Severity::Info => "#667eea",
            Severity::Success => "#22C55E",
        }
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the tree, transparent and off-screen
    Entering,
    Visible,
    /// Running its exit transition
    Leaving,
    /// Detached from the tree
    Removed,
}

impl ToastPhase {
    /// Whether the toast sits on-screen in this phase
    pub fn is_shown(&self) -> bool {
        *self == ToastPhase::Visible
    }
}

/// Toast timeline, all offsets from creation (ms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay before the enter transition starts
    pub enter_delay_ms: u32,
    /// When the exit transition starts
    pub hide_at_ms: u32,
    /// Exit transition length before removal
    pub exit_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            hide_at_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl ToastTimings {
    /// Offset at which the node is removed
    pub fn remove_at_ms(&self) -> u32 {
        self.hide_at_ms + self.exit_ms
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> ToastPhase {
        if elapsed_ms < self.enter_delay_ms {
            ToastPhase::Entering
        } else if elapsed_ms < self.hide_at_ms {
            ToastPhase::Visible
        } else if elapsed_ms < self.remove_at_ms() {
            ToastPhase::Leaving
        } else {
            ToastPhase::Removed
        }
    }

    /// Phase changes after creation, as `(offset, phase entered)`, in order
    pub fn schedule(&self) -> [(u32, ToastPhase); 3] {
        [self.enter_delay_ms, self.hide_at_ms, self.remove_at_ms()]
            .map(|at| (at, self.phase_at(at)))
    }
}

/// Inline style of a toast in a phase. The CSS transition animates between
/// the off-screen and the on-screen state.
pub fn toast_style(severity: Severity, phase: ToastPhase) -> String {
    let (opacity, transform) = if phase.is_shown() {
        ("1", "translateX(0)")
    } else {
        ("0", "translateX(100%)")
    };
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 12px 20px; border-radius: 8px; font-size: 14px; z-index: 9999; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.2); transition: all 0.3s ease; \
         opacity: {}; transform: {};",
        severity.background(),
        opacity,
        transform
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_within_150ms_and_gone_by_3500ms() {
        let timings = ToastTimings::default();
        assert_eq!(timings.phase_at(0), ToastPhase::Entering);
        assert_eq!(timings.phase_at(150), ToastPhase::Visible);
        assert_eq!(timings.phase_at(2999), ToastPhase::Visible);
        assert_eq!(timings.phase_at(3000), ToastPhase::Leaving);
        assert_eq!(timings.phase_at(3300), ToastPhase::Removed);
        assert_eq!(timings.phase_at(3500), ToastPhase::Removed);
    }

    /// Phase in effect at `elapsed_ms` when only the scheduled changes run
    fn scheduled_phase(timings: &ToastTimings, elapsed_ms: u32) -> ToastPhase {
        timings
            .schedule()
            .into_iter()
            .take_while(|(at, _)| *at <= elapsed_ms)
            .last()
            .map_or(ToastPhase::Entering, |(_, phase)| phase)
    }

    #[test]
    fn test_schedule_steps_through_every_phase() {
        let timings = ToastTimings::default();
        assert_eq!(
            timings.schedule(),
            [
                (100, ToastPhase::Visible),
                (3000, ToastPhase::Leaving),
                (3300, ToastPhase::Removed),
            ]
        );
    }

    #[test]
    fn test_schedule_agrees_with_phase_at() {
        let timings = ToastTimings::default();
        for elapsed in (0..4000).step_by(10) {
            assert_eq!(
                scheduled_phase(&timings, elapsed),
                timings.phase_at(elapsed),
                "{}ms",
                elapsed
            );
        }
        assert_eq!(scheduled_phase(&timings, 150), ToastPhase::Visible);
        assert_eq!(scheduled_phase(&timings, 3500), ToastPhase::Removed);
    }

    #[test]
    fn test_style_reflects_severity() {
        assert!(toast_style(Severity::Success, ToastPhase::Visible).contains("#22C55E"));
        assert!(toast_style(Severity::Info, ToastPhase::Entering).contains("#667eea"));
        assert!(toast_style(Severity::Info, ToastPhase::Leaving).contains("opacity: 0"));
        assert!(toast_style(Severity::Info, ToastPhase::Visible).contains("translateX(0)"));
    }
}
