//! Checklist coordinator - sequential task gating across two lists
//!
//! The primary list must be completed in order before the secondary list
//! unlocks. Once both are complete the level is cleared, a countdown runs,
//! and a single scene transition is requested.

use bevy::prelude::*;

use super::task::{ObjectKey, Task, TaskList};
use crate::constants::LEVEL_CLEAR_COUNTDOWN;

/// Slack for frame deltas that only sum to the countdown within float rounding
const COUNTDOWN_EPSILON: f64 = 1e-4;

/// Where the coordinator is in its one-way progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistPhase {
    /// Working through the primary list
    Primary,
    /// Primary done, secondary list active
    Secondary,
    /// Both lists done, countdown running
    Cleared,
    /// Countdown expired, transition requested
    Transitioning,
}

/// Outcome of reporting an interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Accepted {
        /// Index of the completed task across both lists
        index: usize,
        /// This completion exhausted the primary list
        unlocked_secondary: bool,
    },
    Rejected {
        /// Object the coordinator was waiting for, if any
        expected: Option<ObjectKey>,
    },
}

impl Interaction {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Interaction::Accepted { .. })
    }
}

/// One-shot signals produced by `Checklist::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistSignal {
    /// Both lists complete; play the celebration cue
    LevelCleared,
    /// Countdown expired; load the next scene
    TransitionDue,
}

/// Coordinator owning checklist state and completion signaling
#[derive(Resource, Debug, Clone)]
pub struct Checklist {
    primary: TaskList,
    secondary: TaskList,
    current_index: usize,
    second_list_unlocked: bool,
    level_cleared: bool,
    countdown: f32,
    /// Time ticked since clearing, accumulated in f64 so frame deltas don't drift
    cleared_elapsed: f64,
    transition_requested: bool,
    /// Rendering waiting for the presentation sink
    pending_text: Option<String>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(TaskList::default(), TaskList::default())
    }
}

impl Checklist {
    pub fn new(primary: TaskList, secondary: TaskList) -> Self {
        // An empty primary list is already complete
        let second_list_unlocked = primary.all_completed();
        let mut checklist = Self {
            primary,
            secondary,
            current_index: 0,
            second_list_unlocked,
            level_cleared: false,
            countdown: LEVEL_CLEAR_COUNTDOWN,
            cleared_elapsed: 0.0,
            transition_requested: false,
            pending_text: None,
        };
        checklist.pending_text = Some(checklist.render());
        checklist
    }

    pub fn from_tasks(primary: Vec<Task>, secondary: Vec<Task>) -> Self {
        Self::new(TaskList::new(primary), TaskList::new(secondary))
    }

    /// Report that a world object was acted upon.
    ///
    /// Only the object at the current index is accepted; anything else is
    /// ignored with a diagnostic.
    pub fn report_interaction(&mut self, object: &ObjectKey) -> Interaction {
        let index = self.current_index;
        let unlocked = self.second_list_unlocked;
        let primary_len = self.primary.len();

        let Some(task) = self.current_task_mut() else {
            info!("No task expects an interaction, ignoring {}", object);
            return Interaction::Rejected { expected: None };
        };

        if task.object != *object {
            let expected = task.object.clone();
            info!(
                "Interacting with wrong task: got {}, expected {}",
                object, expected
            );
            return Interaction::Rejected {
                expected: Some(expected),
            };
        }

        task.completed = true;
        self.current_index += 1;

        let unlocked_secondary =
            !unlocked && index < primary_len && self.primary.all_completed();
        if unlocked_secondary {
            self.second_list_unlocked = true;
            info!("Primary tasks complete, secondary list unlocked");
        }

        self.pending_text = Some(self.render());

        Interaction::Accepted {
            index,
            unlocked_secondary,
        }
    }

    /// Advance completion state by one frame
    pub fn tick(&mut self, delta_secs: f32) -> Option<ChecklistSignal> {
        if !self.level_cleared {
            if self.primary.all_completed() && self.secondary.all_completed() {
                self.level_cleared = true;
                self.countdown = LEVEL_CLEAR_COUNTDOWN;
                self.cleared_elapsed = 0.0;
                info!("Level cleared, next scene in {:.1}s", self.countdown);
                return Some(ChecklistSignal::LevelCleared);
            }
            return None;
        }

        if self.transition_requested {
            return None;
        }

        self.cleared_elapsed += f64::from(delta_secs);
        let total = f64::from(LEVEL_CLEAR_COUNTDOWN);
        self.countdown = (total - self.cleared_elapsed).max(0.0) as f32;
        if self.cleared_elapsed + COUNTDOWN_EPSILON >= total {
            self.countdown = 0.0;
            self.transition_requested = true;
            return Some(ChecklistSignal::TransitionDue);
        }
        None
    }

    /// Checklist text for the active list: primary before unlock, secondary after
    pub fn render(&self) -> String {
        if self.second_list_unlocked {
            self.secondary.render()
        } else {
            self.primary.render()
        }
    }

    pub fn has_pending_text(&self) -> bool {
        self.pending_text.is_some()
    }

    /// Take the latest rendering queued for the presentation sink
    pub fn take_pending_text(&mut self) -> Option<String> {
        self.pending_text.take()
    }

    /// Task the coordinator is waiting on
    pub fn current_task(&self) -> Option<&Task> {
        let index = self.current_index;
        if index < self.primary.len() {
            self.primary.get(index)
        } else if self.second_list_unlocked {
            self.secondary.get(index - self.primary.len())
        } else {
            None
        }
    }

    fn current_task_mut(&mut self) -> Option<&mut Task> {
        let index = self.current_index;
        let primary_len = self.primary.len();
        if index < primary_len {
            self.primary.get_mut(index)
        } else if self.second_list_unlocked {
            self.secondary.get_mut(index - primary_len)
        } else {
            None
        }
    }

    /// Look up a task by object in either list
    pub fn task(&self, object: &ObjectKey) -> Option<&Task> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|t| t.object == *object)
    }

    /// Primary tasks beyond the current index are locked.
    /// Their trigger zones stay disabled until the task before them is done.
    pub fn is_locked(&self, object: &ObjectKey) -> bool {
        self.primary
            .position_of(object)
            .is_some_and(|i| i > self.current_index)
    }

    pub fn phase(&self) -> ChecklistPhase {
        if self.transition_requested {
            ChecklistPhase::Transitioning
        } else if self.level_cleared {
            ChecklistPhase::Cleared
        } else if self.second_list_unlocked {
            ChecklistPhase::Secondary
        } else {
            ChecklistPhase::Primary
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn second_list_unlocked(&self) -> bool {
        self.second_list_unlocked
    }

    pub fn level_cleared(&self) -> bool {
        self.level_cleared
    }

    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    pub fn primary(&self) -> &TaskList {
        &self.primary
    }

    pub fn secondary(&self) -> &TaskList {
        &self.secondary
    }

    /// Total number of tasks across both lists
    pub fn total_tasks(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ObjectKey {
        ObjectKey::new(k)
    }

    fn abc() -> Checklist {
        Checklist::from_tasks(
            vec![Task::new("A", "Do A"), Task::new("B", "Do B")],
            vec![Task::new("C", "Do C")],
        )
    }

    fn completed_flags(checklist: &Checklist) -> Vec<bool> {
        checklist
            .primary()
            .iter()
            .chain(checklist.secondary().iter())
            .map(|t| t.completed)
            .collect()
    }

    #[test]
    fn test_initial_rendering_is_primary_view() {
        let mut checklist = abc();
        assert_eq!(checklist.take_pending_text().as_deref(), Some("Do A\nDo B"));
        assert!(!checklist.has_pending_text());
        assert_eq!(checklist.phase(), ChecklistPhase::Primary);
    }

    #[test]
    fn test_out_of_order_report_is_ignored() {
        let mut checklist = abc();
        checklist.take_pending_text();

        for object in ["B", "C", "unknown"] {
            let result = checklist.report_interaction(&key(object));
            assert_eq!(
                result,
                Interaction::Rejected {
                    expected: Some(key("A"))
                }
            );
        }

        assert_eq!(checklist.current_index(), 0);
        assert_eq!(completed_flags(&checklist), vec![false, false, false]);
        assert!(!checklist.has_pending_text());
    }

    #[test]
    fn test_two_list_scenario() {
        let mut checklist = abc();

        checklist.report_interaction(&key("B"));
        assert_eq!(checklist.current_index(), 0);

        let result = checklist.report_interaction(&key("A"));
        assert_eq!(
            result,
            Interaction::Accepted {
                index: 0,
                unlocked_secondary: false
            }
        );
        assert_eq!(checklist.current_index(), 1);
        assert!(!checklist.second_list_unlocked());
        assert_eq!(
            checklist.take_pending_text().as_deref(),
            Some("Do A - Done!\nDo B")
        );

        let result = checklist.report_interaction(&key("B"));
        assert_eq!(
            result,
            Interaction::Accepted {
                index: 1,
                unlocked_secondary: true
            }
        );
        assert_eq!(checklist.current_index(), 2);
        assert!(checklist.second_list_unlocked());
        assert_eq!(checklist.take_pending_text().as_deref(), Some("Do C"));

        checklist.report_interaction(&key("C"));
        assert_eq!(checklist.take_pending_text().as_deref(), Some("Do C - Done!"));
        assert_eq!(checklist.tick(0.016), Some(ChecklistSignal::LevelCleared));
        assert!(checklist.level_cleared());
    }

    #[test]
    fn test_unlock_happens_only_after_last_primary() {
        let mut checklist = Checklist::from_tasks(
            vec![Task::new("1", "one"), Task::new("2", "two"), Task::new("3", "three")],
            vec![Task::new("4", "four")],
        );

        for (i, object) in ["1", "2"].iter().enumerate() {
            checklist.report_interaction(&key(object));
            assert!(!checklist.second_list_unlocked(), "unlocked after task {}", i + 1);
        }

        // Secondary task is not reachable yet
        assert!(!checklist.report_interaction(&key("4")).is_accepted());

        checklist.report_interaction(&key("3"));
        assert!(checklist.second_list_unlocked());
        assert_eq!(checklist.phase(), ChecklistPhase::Secondary);
    }

    #[test]
    fn test_completed_task_cannot_be_reported_again() {
        let mut checklist = abc();
        checklist.report_interaction(&key("A"));
        let result = checklist.report_interaction(&key("A"));
        assert_eq!(
            result,
            Interaction::Rejected {
                expected: Some(key("B"))
            }
        );
        assert_eq!(checklist.current_index(), 1);
    }

    #[test]
    fn test_tick_before_completion_does_nothing() {
        let mut checklist = abc();
        for _ in 0..100 {
            assert_eq!(checklist.tick(1.0), None);
        }
        assert!(!checklist.level_cleared());
        assert_eq!(checklist.countdown(), LEVEL_CLEAR_COUNTDOWN);
    }

    #[test]
    fn test_clear_cue_fires_once_and_transition_after_countdown() {
        let mut checklist = abc();
        for object in ["A", "B", "C"] {
            checklist.report_interaction(&key(object));
        }

        assert_eq!(checklist.tick(0.5), Some(ChecklistSignal::LevelCleared));
        assert_eq!(checklist.countdown(), 5.0);

        // 4.5 time units: still counting
        for _ in 0..9 {
            assert_eq!(checklist.tick(0.5), None);
        }
        assert_eq!(checklist.phase(), ChecklistPhase::Cleared);
        assert_eq!(checklist.countdown(), 0.5);

        assert_eq!(checklist.tick(0.5), Some(ChecklistSignal::TransitionDue));
        assert_eq!(checklist.phase(), ChecklistPhase::Transitioning);
        assert_eq!(checklist.countdown(), 0.0);

        for _ in 0..10 {
            assert_eq!(checklist.tick(0.5), None);
        }
        assert!(checklist.level_cleared());
    }

    fn cleared_single_task() -> Checklist {
        let mut checklist = Checklist::from_tasks(vec![Task::new("A", "Do A")], vec![]);
        checklist.report_interaction(&key("A"));
        assert_eq!(checklist.tick(0.0), Some(ChecklistSignal::LevelCleared));
        checklist
    }

    /// Tick at a fixed delta until the transition fires; returns the tick count
    fn ticks_until_transition(checklist: &mut Checklist, dt: f32) -> usize {
        for tick in 1..=10_000 {
            if checklist.tick(dt) == Some(ChecklistSignal::TransitionDue) {
                return tick;
            }
        }
        panic!("no transition at dt={}", dt);
    }

    #[test]
    fn test_countdown_does_not_drift_at_frame_deltas() {
        assert_eq!(ticks_until_transition(&mut cleared_single_task(), 0.1), 50);
        assert_eq!(ticks_until_transition(&mut cleared_single_task(), 1.0 / 60.0), 300);
        assert_eq!(ticks_until_transition(&mut cleared_single_task(), 0.016), 313);
    }

    #[test]
    fn test_countdown_still_running_one_tick_early() {
        let mut checklist = cleared_single_task();
        for _ in 0..49 {
            assert_eq!(checklist.tick(0.1), None);
        }
        assert!((checklist.countdown() - 0.1).abs() < 0.001);
        assert_eq!(checklist.phase(), ChecklistPhase::Cleared);
    }

    #[test]
    fn test_large_delta_clamps_countdown() {
        let mut checklist = Checklist::from_tasks(vec![Task::new("A", "Do A")], vec![]);
        checklist.report_interaction(&key("A"));
        checklist.tick(0.0);
        assert_eq!(checklist.tick(30.0), Some(ChecklistSignal::TransitionDue));
        assert_eq!(checklist.countdown(), 0.0);
    }

    #[test]
    fn test_empty_primary_starts_unlocked() {
        let mut checklist = Checklist::from_tasks(vec![], vec![Task::new("C", "Do C")]);
        assert!(checklist.second_list_unlocked());
        assert_eq!(checklist.take_pending_text().as_deref(), Some("Do C"));

        let result = checklist.report_interaction(&key("C"));
        assert_eq!(
            result,
            Interaction::Accepted {
                index: 0,
                unlocked_secondary: false
            }
        );
    }

    #[test]
    fn test_empty_checklist_clears_on_first_tick() {
        let mut checklist = Checklist::default();
        assert_eq!(checklist.tick(0.1), Some(ChecklistSignal::LevelCleared));
        assert_eq!(checklist.tick(0.1), None);
    }

    #[test]
    fn test_report_after_everything_done_is_rejected() {
        let mut checklist = abc();
        for object in ["A", "B", "C"] {
            checklist.report_interaction(&key(object));
        }
        assert_eq!(
            checklist.report_interaction(&key("C")),
            Interaction::Rejected { expected: None }
        );
        assert_eq!(checklist.current_index(), 3);
    }

    #[test]
    fn test_locking_follows_primary_progress() {
        let mut checklist = abc();
        assert!(!checklist.is_locked(&key("A")));
        assert!(checklist.is_locked(&key("B")));
        assert!(!checklist.is_locked(&key("C")));

        checklist.report_interaction(&key("A"));
        assert!(!checklist.is_locked(&key("B")));
    }

    #[test]
    fn test_current_task_resolves_across_lists() {
        let mut checklist = abc();
        assert_eq!(checklist.current_task().map(|t| t.object.as_str()), Some("A"));
        checklist.report_interaction(&key("A"));
        checklist.report_interaction(&key("B"));
        assert_eq!(checklist.current_task().map(|t| t.object.as_str()), Some("C"));
        assert_eq!(checklist.task(&key("B")).map(|t| t.completed), Some(true));
    }
}
