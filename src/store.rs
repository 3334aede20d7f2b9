mod kv;

pub use kv::Store;

use chrono::{Local, Utc};
use std::fmt;

/// Typed builder for every key the store holds.
///
/// Distinct logical entities render to distinct key patterns, so two
/// different entity kinds can never collide on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    /// Session projection of the logged-in user.
    CurrentUser,
    /// Registered accounts (seed accounts are never written here).
    Users,
    /// Course catalog, seeded from fixtures on first load.
    Courses,
    /// Forum posts, newest first.
    Posts,
    /// Replies under one post, oldest first.
    PostReplies(i64),
    /// Q&A questions with nested answers, newest first.
    Questions,
    /// Progress of one user in one course.
    CourseProgress {
        /// Owning user id.
        user_id: i64,
        /// Course id.
        course_id: i64,
    },
    /// Comments under one course, newest first.
    CourseComments(i64),
    /// Append-only learning log of one user.
    LearningRecords(i64),
    /// Preferences of one user.
    UserSettings(i64),
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::CurrentUser => write!(f, "currentUser"),
            StoreKey::Users => write!(f, "users"),
            StoreKey::Courses => write!(f, "courses"),
            StoreKey::Posts => write!(f, "community_posts"),
            StoreKey::PostReplies(post_id) => write!(f, "post_replies_{}", post_id),
            StoreKey::Questions => write!(f, "qa_questions"),
            StoreKey::CourseProgress { user_id, course_id } => {
                write!(f, "course_progress_{}_{}", user_id, course_id)
            }
            StoreKey::CourseComments(course_id) => write!(f, "course_comments_{}", course_id),
            StoreKey::LearningRecords(user_id) => write!(f, "learning_records_{}", user_id),
            StoreKey::UserSettings(user_id) => write!(f, "user_settings_{}", user_id),
        }
    }
}

/// Next entity id: current time in milliseconds.
///
/// Not guaranteed unique across uncoordinated writers; collisions within
/// the same millisecond are an accepted property of the id scheme.
pub fn next_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as the ISO-8601 string used for `lastStudyTime` and
/// learning-record timestamps.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Current local time as the display string used for `publishTime`.
/// Not lexicographically sortable across locales by design.
pub fn now_display() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Current local date as the `joinDate` string.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
