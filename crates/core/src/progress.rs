//! Lesson progress merging and course completion derivation.
//!
//! Completion is lesson-set-relative: a course counts as complete once every
//! lesson *recorded* under it is complete. The rule has no knowledge of a
//! course's real curriculum size, so one finished lesson out of five touched
//! lessons is not enough, but one finished lesson out of one touched is.
//! Membership in the completed list is sticky; callers must never retract a
//! course once it has been added.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Progress on a single lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    /// Accumulated minutes spent on the lesson.
    #[serde(default)]
    pub time_spent: f64,
}

/// lessonId -> progress for one course.
pub type CourseProgress = BTreeMap<String, LessonProgress>;

/// courseId -> lesson progress for a whole profile.
pub type ProgressMap = BTreeMap<String, CourseProgress>;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an incoming `timeSpent` increment (minutes).
pub fn validate_time_spent(minutes: f64) -> Result<(), CoreError> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "timeSpent must be a non-negative number of minutes, got {minutes}"
        )))
    }
}

/// Add `increment` minutes onto an accumulated `total`.
///
/// Fails when the sum overflows to a non-finite value, which JSON cannot
/// represent.
pub fn accumulate_minutes(total: f64, increment: f64) -> Result<f64, CoreError> {
    let sum = total + increment;
    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(CoreError::Validation(format!(
            "timeSpent of {increment} minutes overflows the accumulated {total}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Merge an update into the previous state of a lesson.
///
/// `time_spent` accumulates onto the previous value. `completed` and
/// `completed_at` are replaced outright: `completed_at` is `now` when the
/// update marks the lesson complete, otherwise `None`.
pub fn merge_lesson(
    previous: Option<&LessonProgress>,
    completed: bool,
    time_spent: f64,
    now: Timestamp,
) -> Result<LessonProgress, CoreError> {
    let prior_time = previous.map_or(0.0, |p| p.time_spent);
    Ok(LessonProgress {
        completed,
        completed_at: completed.then_some(now),
        time_spent: accumulate_minutes(prior_time, time_spent)?,
    })
}

/// Whether every recorded lesson of a course is complete.
///
/// An empty course is never complete.
pub fn is_course_complete(course: &CourseProgress) -> bool {
    !course.is_empty() && course.values().all(|lesson| lesson.completed)
}

/// Append `course_id` to `completed_courses` if its recorded lessons are all
/// complete and it is not listed yet.
///
/// Returns `true` when the course was newly added. Never removes entries.
pub fn promote_if_complete(
    completed_courses: &mut Vec<String>,
    course_id: &str,
    course: &CourseProgress,
) -> bool {
    if !is_course_complete(course) || completed_courses.iter().any(|c| c == course_id) {
        return false;
    }
    completed_courses.push(course_id.to_string());
    true
}

// ---------------------------------------------------------------------------
// Read-only views
// ---------------------------------------------------------------------------

/// Dashboard summary of a learner's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub enrolled_count: usize,
    pub completed_count: usize,
    pub total_learning_hours: f64,
    pub lessons_completed: usize,
}

impl LearningStats {
    pub fn compute(
        enrolled_courses: &[String],
        completed_courses: &[String],
        total_learning_hours: f64,
        progress: &ProgressMap,
    ) -> Self {
        let lessons_completed = progress
            .values()
            .flat_map(|course| course.values())
            .filter(|lesson| lesson.completed)
            .count();
        Self {
            enrolled_count: enrolled_courses.len(),
            completed_count: completed_courses.len(),
            total_learning_hours,
            lessons_completed,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
