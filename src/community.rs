//! Forum, Q&A and course-comment operations.
//!
//! Every mutation requires a logged-in user and validates its required
//! fields before the first write; rejection leaves the store untouched.

use crate::auth::require_user;
use crate::error::{AppError, Result};
use crate::models::{
    Answer, Comment, NewComment, NewPost, NewQuestion, NewReply, Post, Question, Reply,
    SessionUser,
};
use crate::repo::Repo;

/// Forum and Q&A operations.
pub struct CommunityService {
    repo: Repo,
}

impl CommunityService {
    /// Create a new community service.
    pub fn new(repo: Repo) -> Self {
        Self { repo }
    }

    /// Publish a post, prepended to the forum.
    pub fn create_post(&self, user: Option<&SessionUser>, input: &NewPost) -> Result<Post> {
        let user = require_user(user)?;

        if input.title.trim().is_empty() {
            return Err(AppError::validation("title", "请填写标题和内容"));
        }
        if input.content.trim().is_empty() {
            return Err(AppError::validation("content", "请填写标题和内容"));
        }

        self.repo.add_post(input, &user.username, &user.avatar)
    }

    /// Like a post; every call counts, there is no upper bound.
    pub fn like_post(&self, user: Option<&SessionUser>, post_id: i64) -> Result<u32> {
        require_user(user)?;
        self.repo.like_post(post_id)
    }

    /// Reply to a post.
    ///
    /// Two independent writes: the reply is appended to the post's reply
    /// collection, then the post's denormalized reply counter is bumped.
    /// A post that exists only in the seed fixtures has no stored counter
    /// to bump; the reply still lands.
    pub fn add_reply(
        &self,
        user: Option<&SessionUser>,
        post_id: i64,
        input: &NewReply,
    ) -> Result<Reply> {
        let user = require_user(user)?;

        if input.content.trim().is_empty() {
            return Err(AppError::validation("content", "回复内容不能为空"));
        }

        let reply = self
            .repo
            .add_reply(post_id, input, &user.username, &user.avatar)?;

        match self.repo.increment_post_replies(post_id) {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => {
                tracing::debug!(post_id, "Reply counter skipped for unstored post");
            }
            Err(e) => return Err(e),
        }

        Ok(reply)
    }

    /// Like one reply under a post.
    pub fn like_reply(
        &self,
        user: Option<&SessionUser>,
        post_id: i64,
        reply_id: i64,
    ) -> Result<u32> {
        require_user(user)?;
        self.repo.like_reply(post_id, reply_id)
    }

    /// Ask a question, prepended to the Q&A board.
    pub fn ask_question(
        &self,
        user: Option<&SessionUser>,
        input: &NewQuestion,
    ) -> Result<Question> {
        let user = require_user(user)?;

        if input.title.trim().is_empty() {
            return Err(AppError::validation("title", "请填写标题和内容"));
        }
        if input.content.trim().is_empty() {
            return Err(AppError::validation("content", "请填写标题和内容"));
        }

        self.repo.add_question(input, &user.username, &user.avatar)
    }

    /// Answer a question; answers append and are never born best.
    pub fn answer_question(
        &self,
        user: Option<&SessionUser>,
        question_id: i64,
        content: &str,
    ) -> Result<Answer> {
        let user = require_user(user)?;

        if content.trim().is_empty() {
            return Err(AppError::validation("content", "回答内容不能为空"));
        }

        self.repo
            .add_answer(question_id, content, &user.username, &user.avatar)
    }

    /// Comment on a course with an optional 0-5 star rating, prepended.
    pub fn comment_course(
        &self,
        user: Option<&SessionUser>,
        course_id: i64,
        input: &NewComment,
    ) -> Result<Comment> {
        let user = require_user(user)?;

        if input.content.trim().is_empty() {
            return Err(AppError::validation("content", "评论内容不能为空"));
        }
        if input.rating > 5 {
            return Err(AppError::validation("rating", "评分需在0到5之间"));
        }

        self.repo
            .add_course_comment(course_id, input, &user.username, &user.avatar)
    }
}
