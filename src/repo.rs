//! Entity repositories over the key-value store.
//!
//! Every mutation here follows the same shape: read the whole collection
//! for a key, mutate it in memory, rewrite the whole collection in one
//! store write. Nothing is ever deleted. Two uncoordinated writers of the
//! same key race and the last full write wins.

use crate::error::{AppError, Result};
use crate::models::{
    Answer, Comment, Course, CourseProgress, LearningRecord, NewComment, NewPost, NewQuestion,
    NewReply, Post, Question, Reply, User, UserSettings,
};
use crate::seed;
use crate::store::{Store, StoreKey, next_id, now_display, now_iso};

/// Repository facade owning the store handle.
#[derive(Clone)]
pub struct Repo {
    store: Store,
}

impl Repo {
    /// Wrap a store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ========== USER OPERATIONS ==========

    /// All registered accounts, oldest first. Seed accounts are not included.
    pub fn registered_users(&self) -> Result<Vec<User>> {
        self.store.get_list(&StoreKey::Users)
    }

    /// Append a registered account. Uniqueness checks belong to the caller.
    pub fn add_registered_user(&self, user: &User) -> Result<()> {
        let mut users = self.registered_users()?;
        users.push(user.clone());
        self.store.set_value(&StoreKey::Users, &users)
    }

    // ========== COURSE OPERATIONS ==========

    /// The course catalog, seeded from fixtures on first load.
    pub fn courses(&self) -> Result<Vec<Course>> {
        if let Some(courses) = self.store.get_value(&StoreKey::Courses)? {
            return Ok(courses);
        }

        let courses = seed::seed_courses();
        tracing::info!(count = courses.len(), "Seeding course catalog");
        self.store.set_value(&StoreKey::Courses, &courses)?;
        Ok(courses)
    }

    /// Look up one course by id.
    pub fn find_course(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses()?.into_iter().find(|c| c.id == course_id))
    }

    /// Rewrite the whole catalog (lesson flags and enrollment counters are
    /// mutated in place on the course records).
    pub fn save_courses(&self, courses: &[Course]) -> Result<()> {
        self.store.set_value(&StoreKey::Courses, &courses)
    }

    // ========== POST OPERATIONS ==========

    /// Stored forum posts, newest first.
    pub fn posts(&self) -> Result<Vec<Post>> {
        self.store.get_list(&StoreKey::Posts)
    }

    /// Look up one post: stored posts first, then the seed fixtures.
    /// The fixtures are never written back by a lookup.
    pub fn find_post(&self, post_id: i64) -> Result<Option<Post>> {
        if let Some(post) = self.posts()?.into_iter().find(|p| p.id == post_id) {
            return Ok(Some(post));
        }
        Ok(seed::seed_posts().into_iter().find(|p| p.id == post_id))
    }

    /// Create a post: assigns id and publish time, zeroes the counters and
    /// prepends to the collection.
    pub fn add_post(&self, input: &NewPost, author: &str, avatar: &str) -> Result<Post> {
        let post = Post {
            id: next_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            author: author.to_string(),
            author_avatar: avatar.to_string(),
            category: input.category.clone(),
            publish_time: now_display(),
            likes: 0,
            replies: 0,
            views: 0,
            tags: input.tags.clone(),
        };

        let mut posts = self.posts()?;
        posts.insert(0, post.clone());
        self.store.set_value(&StoreKey::Posts, &posts)?;
        Ok(post)
    }

    /// Bump the like counter of a post and return the new value.
    /// Not idempotent: every call counts.
    pub fn like_post(&self, post_id: i64) -> Result<u32> {
        let mut posts = self.posts()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::NotFound(format!("Post {}", post_id)))?;

        post.likes += 1;
        let likes = post.likes;
        self.store.set_value(&StoreKey::Posts, &posts)?;
        Ok(likes)
    }

    /// Bump the denormalized reply counter of a post. Kept separate from
    /// the reply collection itself, so the two can drift under
    /// uncoordinated writers.
    pub fn increment_post_replies(&self, post_id: i64) -> Result<u32> {
        let mut posts = self.posts()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::NotFound(format!("Post {}", post_id)))?;

        post.replies += 1;
        let replies = post.replies;
        self.store.set_value(&StoreKey::Posts, &posts)?;
        Ok(replies)
    }

    // ========== REPLY OPERATIONS ==========

    /// Replies under one post, oldest first.
    pub fn post_replies(&self, post_id: i64) -> Result<Vec<Reply>> {
        self.store.get_list(&StoreKey::PostReplies(post_id))
    }

    /// Create a reply: assigns id and publish time, zeroes likes, appends.
    /// Does not touch the post's reply counter; that is a separate write.
    pub fn add_reply(&self, post_id: i64, input: &NewReply, author: &str, avatar: &str) -> Result<Reply> {
        let reply = Reply {
            id: next_id(),
            content: input.content.clone(),
            author: author.to_string(),
            author_avatar: avatar.to_string(),
            reply_to_id: input.reply_to_id,
            reply_to_author: input.reply_to_author.clone(),
            publish_time: now_display(),
            likes: 0,
        };

        let mut replies = self.post_replies(post_id)?;
        replies.push(reply.clone());
        self.store
            .set_value(&StoreKey::PostReplies(post_id), &replies)?;
        Ok(reply)
    }

    /// Rewrite the whole reply collection of a post.
    pub fn set_post_replies(&self, post_id: i64, replies: &[Reply]) -> Result<()> {
        self.store
            .set_value(&StoreKey::PostReplies(post_id), &replies)
    }

    /// Bump the like counter of one reply and return the new value.
    pub fn like_reply(&self, post_id: i64, reply_id: i64) -> Result<u32> {
        let mut replies = self.post_replies(post_id)?;
        let reply = replies
            .iter_mut()
            .find(|r| r.id == reply_id)
            .ok_or_else(|| AppError::NotFound(format!("Reply {}", reply_id)))?;

        reply.likes += 1;
        let likes = reply.likes;
        self.set_post_replies(post_id, &replies)?;
        Ok(likes)
    }

    // ========== QUESTION OPERATIONS ==========

    /// Stored Q&A questions, newest first.
    pub fn questions(&self) -> Result<Vec<Question>> {
        self.store.get_list(&StoreKey::Questions)
    }

    /// Look up one question: stored first, then the seed fixtures.
    pub fn find_question(&self, question_id: i64) -> Result<Option<Question>> {
        if let Some(q) = self.questions()?.into_iter().find(|q| q.id == question_id) {
            return Ok(Some(q));
        }
        Ok(seed::seed_questions()
            .into_iter()
            .find(|q| q.id == question_id))
    }

    /// Create a question with an empty answer list, prepended.
    pub fn add_question(&self, input: &NewQuestion, author: &str, avatar: &str) -> Result<Question> {
        let question = Question {
            id: next_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            author: author.to_string(),
            author_avatar: avatar.to_string(),
            category: input.category.clone(),
            publish_time: now_display(),
            likes: 0,
            answers: Vec::new(),
        };

        let mut questions = self.questions()?;
        questions.insert(0, question.clone());
        self.store.set_value(&StoreKey::Questions, &questions)?;
        Ok(question)
    }

    /// Append an answer to a question; new answers are never best.
    pub fn add_answer(
        &self,
        question_id: i64,
        content: &str,
        author: &str,
        avatar: &str,
    ) -> Result<Answer> {
        let mut questions = self.questions()?;
        let question = questions
            .iter_mut()
            .find(|q| q.id == question_id)
            .ok_or_else(|| AppError::NotFound(format!("Question {}", question_id)))?;

        let answer = Answer {
            id: next_id(),
            content: content.to_string(),
            author: author.to_string(),
            author_avatar: avatar.to_string(),
            publish_time: now_display(),
            likes: 0,
            is_best: false,
        };

        question.answers.push(answer.clone());
        self.store.set_value(&StoreKey::Questions, &questions)?;
        Ok(answer)
    }

    // ========== COMMENT OPERATIONS ==========

    /// Comments under one course, newest first.
    pub fn course_comments(&self, course_id: i64) -> Result<Vec<Comment>> {
        self.store.get_list(&StoreKey::CourseComments(course_id))
    }

    /// Create a course comment, prepended.
    pub fn add_course_comment(
        &self,
        course_id: i64,
        input: &NewComment,
        author: &str,
        avatar: &str,
    ) -> Result<Comment> {
        let comment = Comment {
            id: next_id(),
            content: input.content.clone(),
            author: author.to_string(),
            author_avatar: avatar.to_string(),
            rating: input.rating,
            publish_time: now_display(),
            likes: 0,
        };

        let mut comments = self.course_comments(course_id)?;
        comments.insert(0, comment.clone());
        self.store
            .set_value(&StoreKey::CourseComments(course_id), &comments)?;
        Ok(comment)
    }

    // ========== PROGRESS OPERATIONS ==========

    /// Progress of one user in one course.
    pub fn course_progress(&self, user_id: i64, course_id: i64) -> Result<Option<CourseProgress>> {
        self.store
            .get_value(&StoreKey::CourseProgress { user_id, course_id })
    }

    /// Rewrite the progress record of one user in one course.
    pub fn set_course_progress(
        &self,
        user_id: i64,
        course_id: i64,
        progress: &CourseProgress,
    ) -> Result<()> {
        self.store
            .set_value(&StoreKey::CourseProgress { user_id, course_id }, progress)
    }

    // ========== LEARNING RECORD OPERATIONS ==========

    /// The append-only learning log of one user, oldest first.
    pub fn learning_records(&self, user_id: i64) -> Result<Vec<LearningRecord>> {
        self.store.get_list(&StoreKey::LearningRecords(user_id))
    }

    /// Stamp and append a learning record. Records are write-only: nothing
    /// in the system reads them back for aggregation.
    pub fn add_learning_record(&self, user_id: i64, mut record: LearningRecord) -> Result<()> {
        record.timestamp = now_iso();

        let mut records = self.learning_records(user_id)?;
        records.push(record);
        self.store
            .set_value(&StoreKey::LearningRecords(user_id), &records)
    }

    // ========== SETTINGS OPERATIONS ==========

    /// Preferences of one user, defaulted when absent.
    pub fn user_settings(&self, user_id: i64) -> Result<UserSettings> {
        Ok(self
            .store
            .get_value(&StoreKey::UserSettings(user_id))?
            .unwrap_or_default())
    }

    /// Rewrite the preferences of one user.
    pub fn set_user_settings(&self, user_id: i64, settings: &UserSettings) -> Result<()> {
        self.store
            .set_value(&StoreKey::UserSettings(user_id), settings)
    }
}
