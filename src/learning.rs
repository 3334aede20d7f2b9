//! Course enrollment and lesson progress.
//!
//! These are the operations a course page performs: enroll, pick a
//! lesson, mark a lesson complete. Each one runs synchronously and
//! rewrites whole records; progress is created lazily the first time a
//! learner opens a course.

use crate::auth::require_user;
use crate::error::{AppError, Result};
use crate::models::{
    Course, CourseProgress, LearningRecord, Lesson, RecordKind, SessionUser,
};
use crate::repo::Repo;
use crate::store::now_iso;

/// Result of marking a lesson complete.
#[derive(Debug, Clone)]
pub struct LessonOutcome {
    /// Completed lesson count after the write.
    pub completed_lessons: u32,
    /// Total lessons of the course.
    pub total_lessons: u32,
    /// Whether every lesson of the course is now complete.
    pub finished: bool,
    /// The lesson a player would advance to, when one remains.
    pub next_lesson: Option<Lesson>,
}

/// Course and progress operations.
pub struct LearningService {
    repo: Repo,
}

impl LearningService {
    /// Create a new learning service.
    pub fn new(repo: Repo) -> Self {
        Self { repo }
    }

    /// Enroll a user in a course: bumps the enrollment counter on the
    /// catalog and logs a `course_enrolled` record.
    pub fn enroll(&self, user: Option<&SessionUser>, course_id: i64) -> Result<Course> {
        let user = require_user(user)?;

        let mut courses = self.repo.courses()?;
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| AppError::NotFound(format!("Course {}", course_id)))?;

        course.enrolled_students += 1;
        let enrolled = course.clone();
        self.repo.save_courses(&courses)?;

        self.repo.add_learning_record(
            user.id,
            LearningRecord {
                kind: RecordKind::CourseEnrolled,
                course_id,
                course_title: enrolled.title.clone(),
                lesson_id: None,
                lesson_title: None,
                timestamp: String::new(),
            },
        )?;

        Ok(enrolled)
    }

    /// Progress of a user in a course, created on first read with the
    /// first lesson selected and nothing completed.
    pub fn progress(&self, user: Option<&SessionUser>, course_id: i64) -> Result<CourseProgress> {
        let user = require_user(user)?;
        let course = self
            .repo
            .find_course(course_id)?
            .ok_or_else(|| AppError::NotFound(format!("Course {}", course_id)))?;

        self.progress_or_init(user, &course)
    }

    fn progress_or_init(&self, user: &SessionUser, course: &Course) -> Result<CourseProgress> {
        if let Some(progress) = self.repo.course_progress(user.id, course.id)? {
            return Ok(progress);
        }

        let initial = CourseProgress {
            course_id: course.id,
            completed_lessons: 0,
            total_lessons: course.lessons.len() as u32,
            current_lesson_id: course.lessons.first().map(|l| l.id).unwrap_or_default(),
            last_study_time: now_iso(),
        };
        self.repo
            .set_course_progress(user.id, course.id, &initial)?;
        Ok(initial)
    }

    /// Switch the selected lesson, stamping the study time.
    pub fn select_lesson(
        &self,
        user: Option<&SessionUser>,
        course_id: i64,
        lesson_id: i64,
    ) -> Result<CourseProgress> {
        let user = require_user(user)?;
        let course = self
            .repo
            .find_course(course_id)?
            .ok_or_else(|| AppError::NotFound(format!("Course {}", course_id)))?;

        if !course.lessons.iter().any(|l| l.id == lesson_id) {
            return Err(AppError::NotFound(format!(
                "Lesson {} in course {}",
                lesson_id, course_id
            )));
        }

        let mut progress = self.progress_or_init(user, &course)?;
        progress.current_lesson_id = lesson_id;
        progress.last_study_time = now_iso();
        self.repo
            .set_course_progress(user.id, course_id, &progress)?;
        Ok(progress)
    }

    /// Mark a lesson complete.
    ///
    /// The lesson's `completed` flag is flipped in place on the catalog's
    /// lesson array, `completedLessons` is recounted from the flags (which
    /// keeps it within `0..=totalLessons`), a `lesson_completed` record is
    /// appended, and the outcome reports whether the course is finished.
    /// Marking an already-complete lesson again is a no-op for the count.
    pub fn complete_lesson(
        &self,
        user: Option<&SessionUser>,
        course_id: i64,
        lesson_id: i64,
    ) -> Result<LessonOutcome> {
        let user = require_user(user)?;

        let mut courses = self.repo.courses()?;
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| AppError::NotFound(format!("Course {}", course_id)))?;

        let index = course
            .lessons
            .iter()
            .position(|l| l.id == lesson_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Lesson {} in course {}", lesson_id, course_id))
            })?;

        course.lessons[index].completed = true;
        let completed_lessons = course.lessons.iter().filter(|l| l.completed).count() as u32;
        let lesson_title = course.lessons[index].title.clone();
        let next_lesson = course.lessons.get(index + 1).cloned();
        let course_snapshot = course.clone();

        self.repo.save_courses(&courses)?;

        let mut progress = self.progress_or_init(user, &course_snapshot)?;
        progress.completed_lessons = completed_lessons;
        progress.last_study_time = now_iso();
        self.repo
            .set_course_progress(user.id, course_id, &progress)?;

        self.repo.add_learning_record(
            user.id,
            LearningRecord {
                kind: RecordKind::LessonCompleted,
                course_id,
                course_title: course_snapshot.title.clone(),
                lesson_id: Some(lesson_id),
                lesson_title: Some(lesson_title),
                timestamp: String::new(),
            },
        )?;

        Ok(LessonOutcome {
            completed_lessons,
            total_lessons: progress.total_lessons,
            finished: completed_lessons as usize >= course_snapshot.lessons.len(),
            next_lesson,
        })
    }
}
