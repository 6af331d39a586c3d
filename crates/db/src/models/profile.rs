//! Learner profile record and DTOs.
//!
//! Profiles are stored under `user_profile:<id>` with camelCase field names.
//! Collections default to empty so documents written before a field existed
//! (e.g. `enrolledAt`) still load.

use std::collections::BTreeMap;

use learnpath_core::progress::{LearningStats, ProgressMap};
use learnpath_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A learner's enrollment, progress and completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    #[serde(default)]
    pub enrolled_at: BTreeMap<String, Timestamp>,
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub progress: ProgressMap,
    /// Sum of every `timeSpent` increment ever recorded, in minutes.
    #[serde(default)]
    pub total_learning_hours: f64,
    pub join_date: Timestamp,
}

impl Profile {
    /// Zero-state profile as created at signup.
    pub fn new(input: CreateProfile, join_date: Timestamp) -> Self {
        Self {
            id: input.id,
            name: input.name,
            email: input.email,
            age: input.age,
            interests: input.interests,
            enrolled_courses: Vec::new(),
            enrolled_at: BTreeMap::new(),
            completed_courses: Vec::new(),
            progress: ProgressMap::new(),
            total_learning_hours: 0.0,
            join_date,
        }
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_id)
    }

    pub fn stats(&self) -> LearningStats {
        LearningStats::compute(
            &self.enrolled_courses,
            &self.completed_courses,
            self.total_learning_hours,
            &self.progress,
        )
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a profile at signup.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProfile {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    pub age: Option<u32>,
    pub interests: Vec<String>,
}

/// DTO for recording time and completion on a lesson.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordProgress {
    #[validate(length(min = 1, message = "courseId is required"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "lessonId is required"))]
    pub lesson_id: String,
    pub completed: bool,
    /// Minutes to add to the lesson's accumulated time.
    pub time_spent: f64,
}

/// DTO for enrolling in a course.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct Enroll {
    #[validate(length(min = 1, message = "courseId is required"))]
    pub course_id: String,
}
