//! Entity types persisted in the key-value store.
//!
//! Every entity serializes to camelCase JSON, the document shape the
//! store has always held. Relationships are denormalized copies (author
//! username, avatar URI) resolved by linear scan at read time; there are
//! no live references between entities.

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular learner account.
    Student,
    /// Course instructor account.
    Teacher,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Display level assigned to a freshly registered account.
    ///
    /// Derived once at creation and never recomputed afterwards.
    pub fn initial_level(self) -> &'static str {
        match self {
            Role::Student => "新学员",
            Role::Teacher => "讲师",
            Role::Admin => "管理员",
        }
    }
}

/// Course difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Beginner.
    #[serde(rename = "初级")]
    Beginner,
    /// Intermediate.
    #[serde(rename = "中级")]
    Intermediate,
    /// Advanced.
    #[serde(rename = "高级")]
    Advanced,
}

/// Full user account record.
///
/// The password is stored in plaintext. The system being modeled works
/// this way; hashing would change its observable behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Millisecond-timestamp id assigned at creation.
    pub id: i64,
    /// Username for login, unique within the registered collection.
    pub username: String,
    /// Email address, unique within the registered collection.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Account role.
    pub role: Role,
    /// Avatar URI.
    pub avatar: String,
    /// Join date, `YYYY-MM-DD`.
    pub join_date: String,
    /// Number of completed courses.
    pub courses_completed: u32,
    /// Accumulated score.
    pub total_score: u32,
    /// Display level, derived from role at creation time.
    pub level: String,
}

impl User {
    /// Session projection of this account (no password).
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
            level: self.level.clone(),
        }
    }
}

/// The slice of a user persisted under the `currentUser` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// User id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Avatar URI.
    pub avatar: String,
    /// Display level.
    pub level: String,
}

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course id.
    pub id: i64,
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
    /// Instructor display name.
    pub instructor: String,
    /// Total duration as a display string ("8小时"), not seconds.
    pub duration: String,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Category name.
    pub category: String,
    /// Enrollment counter.
    pub enrolled_students: u32,
    /// Average rating.
    pub rating: f64,
    /// Thumbnail URI.
    pub thumbnail: String,
    /// Ordered lessons. The `completed` flag of a lesson is mutated in
    /// place on this array when a learner finishes it.
    pub lessons: Vec<Lesson>,
}

/// One lesson inside a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson id, unique within its course only.
    pub id: i64,
    /// Lesson title.
    pub title: String,
    /// Duration display string ("45分钟").
    pub duration: String,
    /// Whether the lesson has been completed.
    pub completed: bool,
    /// Video URI.
    pub video_url: String,
}

/// Per-user, per-course progress.
///
/// The intended invariant `0 <= completed_lessons <= total_lessons` is not
/// enforced on write; well-behaved callers maintain it by recounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    /// Course id.
    pub course_id: i64,
    /// Number of completed lessons.
    pub completed_lessons: u32,
    /// Total number of lessons at enrollment time.
    pub total_lessons: u32,
    /// Lesson currently selected by the learner.
    pub current_lesson_id: i64,
    /// Last study time, ISO-8601.
    pub last_study_time: String,
}

/// A forum post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post id.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author username (denormalized, not a foreign key).
    pub author: String,
    /// Author avatar URI, copied at publish time and never refreshed.
    pub author_avatar: String,
    /// Category name.
    pub category: String,
    /// Publish time display string (`YYYY-MM-DD HH:MM`), not sortable.
    pub publish_time: String,
    /// Like counter.
    pub likes: u32,
    /// Denormalized reply counter, maintained separately from the reply
    /// collection and free to drift under uncoordinated writers.
    pub replies: u32,
    /// View counter.
    pub views: u32,
    /// Tag list.
    pub tags: Vec<String>,
}

/// A reply under a post. The owning post id lives in the storage key,
/// not on the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Reply id.
    pub id: i64,
    /// Reply body.
    pub content: String,
    /// Author username.
    pub author: String,
    /// Author avatar URI.
    pub author_avatar: String,
    /// Id of the reply this one answers, for threaded display only.
    pub reply_to_id: Option<i64>,
    /// Author of the reply this one answers.
    pub reply_to_author: Option<String>,
    /// Publish time display string.
    pub publish_time: String,
    /// Like counter.
    pub likes: u32,
}

/// A Q&A question with its nested answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question id.
    pub id: i64,
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
    /// Author username.
    pub author: String,
    /// Author avatar URI.
    pub author_avatar: String,
    /// Category name.
    pub category: String,
    /// Publish time display string.
    pub publish_time: String,
    /// Like counter.
    pub likes: u32,
    /// Answers, oldest first.
    pub answers: Vec<Answer>,
}

/// An answer nested inside a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Answer id.
    pub id: i64,
    /// Answer body.
    pub content: String,
    /// Author username.
    pub author: String,
    /// Author avatar URI.
    pub author_avatar: String,
    /// Publish time display string.
    pub publish_time: String,
    /// Like counter.
    pub likes: u32,
    /// Whether this answer was marked best.
    pub is_best: bool,
}

/// A course-scoped comment with optional star rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// Author username.
    pub author: String,
    /// Author avatar URI.
    pub author_avatar: String,
    /// Star rating, 0 (none) to 5.
    pub rating: u8,
    /// Publish time display string.
    pub publish_time: String,
    /// Like counter.
    pub likes: u32,
}

/// Kind of learning activity being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Learner enrolled in a course.
    CourseEnrolled,
    /// Learner completed a lesson.
    LessonCompleted,
}

/// Append-only learning log entry. Write-only: nothing reads these back
/// for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    /// Activity kind.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Course id, when the activity is course-scoped.
    pub course_id: i64,
    /// Course title snapshot.
    pub course_title: String,
    /// Lesson id, for lesson-level activities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    /// Lesson title snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_title: Option<String>,
    /// Append time, ISO-8601, stamped by the repository.
    pub timestamp: String,
}

/// Per-user preferences, defaulted when absent from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// UI theme name.
    pub theme: String,
    /// Interface language tag.
    pub language: String,
    /// Whether in-app notifications are enabled.
    pub notifications: bool,
    /// Whether email updates are enabled.
    pub email_updates: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            language: "zh-CN".to_string(),
            notifications: true,
            email_updates: false,
        }
    }
}

/// Registration form input.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Requested username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
    /// Requested role.
    pub role: Role,
}

/// Input for a new forum post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Category name.
    pub category: String,
    /// Tags.
    pub tags: Vec<String>,
}

/// Input for a new reply.
#[derive(Debug, Clone, Default)]
pub struct NewReply {
    /// Body.
    pub content: String,
    /// Reply being answered, if threaded.
    pub reply_to_id: Option<i64>,
    /// Author of the reply being answered.
    pub reply_to_author: Option<String>,
}

/// Input for a new Q&A question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Category name.
    pub category: String,
}

/// Input for a new course comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Body.
    pub content: String,
    /// Star rating, 0 to 5.
    pub rating: u8,
}
