//! Repository for learner profiles (`user_profile:<id>`).
//!
//! Every mutation holds the profile's key lock from load to store, so
//! concurrent updates to one profile apply one after another and none is
//! lost. Updates to different profiles do not wait on each other.

use chrono::Utc;
use learnpath_core::error::CoreError;
use learnpath_core::keys::profile_key;
use learnpath_core::progress::{
    accumulate_minutes, merge_lesson, promote_if_complete, validate_time_spent,
};
use validator::Validate;

use super::{load_record, save_record};
use crate::error::{RepoError, StoreError};
use crate::models::profile::{CreateProfile, Enroll, Profile, RecordProgress};
use crate::Store;

/// Provides data access for learner profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Create the zero-state profile for a new learner.
    ///
    /// Fails with `Conflict` if a profile already exists for the id; an
    /// existing learner's progress is never overwritten by a repeat signup.
    pub async fn create_profile(store: &Store, input: CreateProfile) -> Result<Profile, RepoError> {
        input.validate().map_err(CoreError::from)?;

        let key = profile_key(&input.id);
        let _guard = store.lock_key(&key).await;

        if store.kv().get(&key).await?.is_some() {
            return Err(CoreError::Conflict(format!("Profile {} already exists", input.id)).into());
        }

        let profile = Profile::new(input, Utc::now());
        save_record(store, &key, &profile).await?;

        tracing::info!(user_id = %profile.id, "Profile created");
        Ok(profile)
    }

    /// Find a profile by user id. Returns `None` if absent.
    pub async fn find_profile(store: &Store, user_id: &str) -> Result<Option<Profile>, StoreError> {
        load_record(store, &profile_key(user_id)).await
    }

    /// Get a profile by user id, failing with `NotFound` if absent.
    pub async fn get_profile(store: &Store, user_id: &str) -> Result<Profile, RepoError> {
        Self::find_profile(store, user_id)
            .await?
            .ok_or_else(|| not_found(user_id))
    }

    /// Record time and completion on a lesson.
    ///
    /// Time accumulates onto the lesson and onto `totalLearningHours`;
    /// completion state is replaced. The course is appended to
    /// `completedCourses` once every lesson recorded under it is complete.
    pub async fn record_progress(
        store: &Store,
        user_id: &str,
        input: &RecordProgress,
    ) -> Result<Profile, RepoError> {
        input.validate().map_err(CoreError::from)?;
        validate_time_spent(input.time_spent)?;

        let profile = Self::modify(store, user_id, |profile| {
            // Both sums are checked before either is applied.
            let course = profile.progress.entry(input.course_id.clone()).or_default();
            let lesson = merge_lesson(
                course.get(&input.lesson_id),
                input.completed,
                input.time_spent,
                Utc::now(),
            )?;
            let total = accumulate_minutes(profile.total_learning_hours, input.time_spent)?;

            course.insert(input.lesson_id.clone(), lesson);
            profile.total_learning_hours = total;

            let course = &profile.progress[&input.course_id];
            if promote_if_complete(&mut profile.completed_courses, &input.course_id, course) {
                tracing::info!(user_id, course_id = %input.course_id, "Course completed");
            }
            Ok(true)
        })
        .await?;

        tracing::info!(
            user_id,
            course_id = %input.course_id,
            lesson_id = %input.lesson_id,
            completed = input.completed,
            time_spent = input.time_spent,
            "Progress recorded",
        );
        Ok(profile)
    }

    /// Enroll the learner in a course.
    ///
    /// Enrolling twice is a no-op: the second call returns the profile
    /// unchanged and writes nothing.
    pub async fn enroll(store: &Store, user_id: &str, input: &Enroll) -> Result<Profile, RepoError> {
        input.validate().map_err(CoreError::from)?;

        Self::modify(store, user_id, |profile| {
            if profile.is_enrolled(&input.course_id) {
                return Ok(false);
            }
            profile.enrolled_courses.push(input.course_id.clone());
            profile.enrolled_at.insert(input.course_id.clone(), Utc::now());
            tracing::info!(user_id, course_id = %input.course_id, "Enrolled in course");
            Ok(true)
        })
        .await
    }

    /// Load, mutate and store a profile under its key lock.
    ///
    /// `apply` returns whether it changed the profile; unchanged profiles
    /// are not written back. If `apply` fails nothing is written and the
    /// stored profile is left as it was.
    async fn modify<F>(store: &Store, user_id: &str, apply: F) -> Result<Profile, RepoError>
    where
        F: FnOnce(&mut Profile) -> Result<bool, CoreError>,
    {
        let key = profile_key(user_id);
        let _guard = store.lock_key(&key).await;

        let mut profile: Profile = load_record(store, &key)
            .await?
            .ok_or_else(|| not_found(user_id))?;

        if apply(&mut profile)? {
            save_record(store, &key, &profile).await?;
        }
        Ok(profile)
    }
}

fn not_found(user_id: &str) -> RepoError {
    CoreError::NotFound {
        entity: "Profile",
        id: user_id.to_string(),
    }
    .into()
}
