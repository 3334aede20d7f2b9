use crate::auth::{AuthService, Session};
use crate::community::CommunityService;
use crate::config::Config;
use crate::error::AppError;
use crate::learning::LearningService;
use crate::models::{
    NewComment, NewPost, NewQuestion, NewReply, RecordKind, Registration, Role, SessionUser,
    UserSettings,
};
use crate::repo::Repo;
use crate::store::{Store, StoreKey};

fn test_repo() -> Repo {
    Repo::new(Store::open_memory().unwrap())
}

fn auth(repo: &Repo) -> AuthService {
    AuthService::new(repo.clone(), true)
}

fn login_student(repo: &Repo) -> SessionUser {
    auth(repo).login("student01", "123456").unwrap()
}

fn registration(username: &str, email: &str, password: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        role: Role::Student,
    }
}

fn new_post(title: &str, content: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: content.to_string(),
        category: "股票讨论".to_string(),
        tags: vec!["测试".to_string()],
    }
}

fn reply(content: &str) -> NewReply {
    NewReply {
        content: content.to_string(),
        ..Default::default()
    }
}

// ========== STORE ==========

#[test]
fn store_set_get_remove_roundtrip() {
    let store = Store::open_memory().unwrap();

    assert!(store.get_raw(&StoreKey::Posts).unwrap().is_none());

    store.set_raw(&StoreKey::Posts, "[]").unwrap();
    assert_eq!(store.get_raw(&StoreKey::Posts).unwrap().unwrap(), "[]");

    store.set_raw(&StoreKey::Posts, "[1]").unwrap();
    assert_eq!(store.get_raw(&StoreKey::Posts).unwrap().unwrap(), "[1]");

    store.remove(&StoreKey::Posts).unwrap();
    assert!(store.get_raw(&StoreKey::Posts).unwrap().is_none());

    // Removing an absent key is fine
    store.remove(&StoreKey::Posts).unwrap();
}

#[test]
fn store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finlearn.db");

    {
        let store = Store::open(&path).unwrap();
        store.set_raw(&StoreKey::Users, r#"[{"id":1}]"#).unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(
        store.get_raw(&StoreKey::Users).unwrap().unwrap(),
        r#"[{"id":1}]"#
    );
}

#[test]
fn malformed_collection_degrades_to_empty() {
    let repo = test_repo();
    repo.store()
        .set_raw(&StoreKey::Posts, "{not json at all")
        .unwrap();

    assert!(repo.posts().unwrap().is_empty());
}

#[test]
fn malformed_settings_degrade_to_defaults() {
    let repo = test_repo();
    repo.store()
        .set_raw(&StoreKey::UserSettings(1), "][")
        .unwrap();

    assert_eq!(repo.user_settings(1).unwrap(), UserSettings::default());
}

#[test]
fn store_clear_removes_everything() {
    let store = Store::open_memory().unwrap();
    store.set_raw(&StoreKey::Users, "[]").unwrap();
    store.set_raw(&StoreKey::Posts, "[]").unwrap();

    store.clear().unwrap();

    assert!(store.get_raw(&StoreKey::Users).unwrap().is_none());
    assert!(store.get_raw(&StoreKey::Posts).unwrap().is_none());
}

// ========== SETTINGS ==========

#[test]
fn settings_defaulted_when_absent() {
    let repo = test_repo();

    let settings = repo.user_settings(1).unwrap();
    assert_eq!(settings.theme, "light");
    assert_eq!(settings.language, "zh-CN");
    assert!(settings.notifications);
    assert!(!settings.email_updates);
}

#[test]
fn settings_roundtrip() {
    let repo = test_repo();

    let mut settings = repo.user_settings(7).unwrap();
    settings.theme = "dark".to_string();
    settings.email_updates = true;
    repo.set_user_settings(7, &settings).unwrap();

    assert_eq!(repo.user_settings(7).unwrap(), settings);
    // Another user still sees defaults
    assert_eq!(repo.user_settings(8).unwrap(), UserSettings::default());
}

// ========== AUTH ==========

#[test]
fn seed_login_returns_student_role() {
    let repo = test_repo();

    let user = auth(&repo).login("student01", "123456").unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.username, "student01");
    assert_eq!(user.level, "初级学员");
}

#[test]
fn login_wrong_password_fails_and_leaves_session_unchanged() {
    let repo = test_repo();
    let session = Session::attach(repo.store().clone()).unwrap();
    session.login(login_student(&repo)).unwrap();

    let result = auth(&repo).login("student01", "wrong");
    assert!(result.is_err());

    // Prior session state is untouched, in memory and in the store
    assert_eq!(session.current().unwrap().username, "student01");
    assert!(
        repo.store()
            .get_raw(&StoreKey::CurrentUser)
            .unwrap()
            .is_some()
    );
}

#[test]
fn registered_account_can_login() {
    let repo = test_repo();
    let service = auth(&repo);

    service
        .register(&registration("alice99", "alice@example.com", "secret99"))
        .unwrap();

    let user = service.login("alice99", "secret99").unwrap();
    assert_eq!(user.username, "alice99");
    assert_eq!(user.level, "新学员");
}

#[test]
fn registration_rejects_duplicates_without_writing() {
    let repo = test_repo();
    let service = auth(&repo);

    service
        .register(&registration("alice99", "alice@example.com", "secret99"))
        .unwrap();

    let dup_name = service.register(&registration("alice99", "other@example.com", "secret99"));
    assert!(matches!(
        dup_name,
        Err(AppError::Validation { field: "username", .. })
    ));

    let dup_email = service.register(&registration("bob1234", "alice@example.com", "secret99"));
    assert!(matches!(
        dup_email,
        Err(AppError::Validation { field: "email", .. })
    ));

    // Rejections wrote nothing
    assert_eq!(repo.registered_users().unwrap().len(), 1);
}

#[test]
fn registration_of_seed_username_is_allowed_and_seed_wins_ties() {
    let repo = test_repo();
    let service = auth(&repo);

    // Duplicate checks scan the registered collection only, so a seed-only
    // username passes registration
    let registered = service
        .register(&registration("teacher01", "new@x.com", "abcdef"))
        .unwrap();
    assert_eq!(registered.role, Role::Student);
    assert_eq!(repo.registered_users().unwrap().len(), 1);

    // With the seed password the seed account answers first
    let seed_hit = service.login("teacher01", "123456").unwrap();
    assert_eq!(seed_hit.role, Role::Teacher);
    assert_eq!(seed_hit.level, "高级讲师");

    // With the registered password the registered account answers
    let registered_hit = service.login("teacher01", "abcdef").unwrap();
    assert_eq!(registered_hit.role, Role::Student);
}

#[test]
fn registration_field_validation() {
    let repo = test_repo();
    let service = auth(&repo);

    let cases: Vec<(Registration, &str)> = vec![
        (registration("", "a@b.com", "secret99"), "username"),
        (registration("ab", "a@b.com", "secret99"), "username"),
        (registration("alice99", "", "secret99"), "email"),
        (registration("alice99", "not-an-email", "secret99"), "email"),
        (registration("alice99", "a@b.com", ""), "password"),
        (registration("alice99", "a@b.com", "12345"), "password"),
    ];

    for (input, field) in cases {
        match service.register(&input) {
            Err(AppError::Validation { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected validation failure on {}, got {:?}", field, other.map(|u| u.username)),
        }
    }

    let mut mismatch = registration("alice99", "a@b.com", "secret99");
    mismatch.confirm_password = "different".to_string();
    assert!(matches!(
        service.register(&mismatch),
        Err(AppError::Validation { field: "confirmPassword", .. })
    ));

    assert!(repo.registered_users().unwrap().is_empty());
}

#[test]
fn registration_disabled_by_config() {
    let repo = test_repo();
    let service = AuthService::new(repo.clone(), false);

    assert!(
        service
            .register(&registration("alice99", "a@b.com", "secret99"))
            .is_err()
    );
    assert!(repo.registered_users().unwrap().is_empty());
}

// ========== SESSION ==========

#[test]
fn session_login_persists_and_logout_clears_both_copies() {
    let repo = test_repo();
    let session = Session::attach(repo.store().clone()).unwrap();
    assert!(session.current().is_none());

    session.login(login_student(&repo)).unwrap();
    assert_eq!(session.current().unwrap().username, "student01");

    // A fresh attach re-derives the session from the store
    let rehydrated = Session::attach(repo.store().clone()).unwrap();
    assert_eq!(rehydrated.current().unwrap().username, "student01");

    session.logout().unwrap();
    assert!(session.current().is_none());
    assert!(
        repo.store()
            .get_raw(&StoreKey::CurrentUser)
            .unwrap()
            .is_none()
    );
}

#[test]
fn session_hydrates_exactly_once() {
    let repo = test_repo();
    let session = Session::attach(repo.store().clone()).unwrap();
    session.login(login_student(&repo)).unwrap();

    // A write that bypasses the owner is not observed by this session
    let admin = auth(&repo).login("admin", "123456").unwrap();
    repo.store().set_value(&StoreKey::CurrentUser, &admin).unwrap();

    assert_eq!(session.current().unwrap().username, "student01");
}

#[test]
fn malformed_persisted_session_degrades_to_logged_out() {
    let store = Store::open_memory().unwrap();
    store.set_raw(&StoreKey::CurrentUser, "{broken").unwrap();

    let session = Session::attach(store).unwrap();
    assert!(session.current().is_none());
}

// ========== FORUM ==========

#[test]
fn creating_a_post_prepends_it() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    community
        .create_post(Some(&user), &new_post("旧帖", "内容1"))
        .unwrap();
    let created = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();

    let posts = repo.posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "T");
    assert_eq!(posts[0].id, created.id);
    assert_eq!(posts[0].likes, 0);
    assert_eq!(posts[0].replies, 0);
    assert_eq!(posts[0].views, 0);
    assert_eq!(posts[0].author, "student01");
    assert_eq!(posts[1].title, "旧帖");
}

#[test]
fn posting_requires_login_and_valid_fields() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    assert!(matches!(
        community.create_post(None, &new_post("T", "C")),
        Err(AppError::Unauthenticated)
    ));
    assert!(matches!(
        community.create_post(Some(&user), &new_post("", "C")),
        Err(AppError::Validation { field: "title", .. })
    ));
    assert!(matches!(
        community.create_post(Some(&user), &new_post("T", "  ")),
        Err(AppError::Validation { field: "content", .. })
    ));

    // None of the rejections wrote anything
    assert!(repo.posts().unwrap().is_empty());
}

#[test]
fn liking_twice_increments_by_exactly_two() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();

    assert_eq!(community.like_post(Some(&user), post.id).unwrap(), 1);
    assert_eq!(community.like_post(Some(&user), post.id).unwrap(), 2);

    // Not idempotent, and the stored value agrees
    assert_eq!(repo.posts().unwrap()[0].likes, 2);
}

#[test]
fn liking_missing_post_is_not_found() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    assert!(matches!(
        community.like_post(Some(&user), 404),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn unauthenticated_like_changes_nothing() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();

    assert!(matches!(
        community.like_post(None, post.id),
        Err(AppError::Unauthenticated)
    ));
    assert_eq!(repo.posts().unwrap()[0].likes, 0);
}

#[test]
fn replies_append_and_bump_the_denormalized_counter() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();

    community
        .add_reply(Some(&user), post.id, &reply("第一条"))
        .unwrap();
    community
        .add_reply(Some(&user), post.id, &reply("第二条"))
        .unwrap();

    let replies = repo.post_replies(post.id).unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].content, "第一条");
    assert_eq!(replies[1].content, "第二条");
    assert_eq!(repo.posts().unwrap()[0].replies, 2);
}

#[test]
fn reply_counter_and_collection_can_drift() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();

    // A repository-level append skips the counter write entirely
    repo.add_reply(post.id, &reply("直接添加"), &user.username, &user.avatar)
        .unwrap();

    assert_eq!(repo.post_replies(post.id).unwrap().len(), 1);
    assert_eq!(repo.posts().unwrap()[0].replies, 0);
}

#[test]
fn reply_to_seed_only_post_lands_without_a_counter() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    // Post 1 exists only in the seed fixtures, not in the store
    assert!(repo.posts().unwrap().is_empty());
    assert!(repo.find_post(1).unwrap().is_some());

    community.add_reply(Some(&user), 1, &reply("回复")).unwrap();

    assert_eq!(repo.post_replies(1).unwrap().len(), 1);
    assert!(repo.posts().unwrap().is_empty());
}

#[test]
fn interleaved_writers_last_write_wins() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();
    let r = community
        .add_reply(Some(&user), post.id, &reply("目标"))
        .unwrap();

    // Two writers each snapshot the same state, then increment and write
    // back without observing each other
    let mut snapshot_a = repo.post_replies(post.id).unwrap();
    let mut snapshot_b = repo.post_replies(post.id).unwrap();

    snapshot_a[0].likes += 1;
    repo.set_post_replies(post.id, &snapshot_a).unwrap();

    snapshot_b[0].likes += 1;
    repo.set_post_replies(post.id, &snapshot_b).unwrap();

    // One increment is silently dropped: the result is a single writer's
    // outcome, never the sum of both
    let final_likes = repo.post_replies(post.id).unwrap()[0].likes;
    assert_eq!(final_likes, 1);
    assert_eq!(r.likes, 0);
}

#[test]
fn like_reply_increments_through_the_service() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let post = community
        .create_post(Some(&user), &new_post("T", "C"))
        .unwrap();
    let r = community
        .add_reply(Some(&user), post.id, &reply("赞我"))
        .unwrap();

    assert_eq!(community.like_reply(Some(&user), post.id, r.id).unwrap(), 1);
    assert!(matches!(
        community.like_reply(Some(&user), post.id, 404),
        Err(AppError::NotFound(_))
    ));
}

// ========== Q&A ==========

#[test]
fn questions_prepend_and_answers_append() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    let question = community
        .ask_question(
            Some(&user),
            &NewQuestion {
                title: "什么是久期？".to_string(),
                content: "债券的久期怎么理解？".to_string(),
                category: "基础知识".to_string(),
            },
        )
        .unwrap();

    let answer = community
        .answer_question(Some(&user), question.id, "价格对利率的敏感度。")
        .unwrap();
    assert!(!answer.is_best);

    let stored = repo.questions().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].answers.len(), 1);
    assert_eq!(stored[0].answers[0].content, "价格对利率的敏感度。");

    assert!(matches!(
        community.answer_question(Some(&user), 404, "没人问"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn question_lookup_falls_back_to_seed_fixtures() {
    let repo = test_repo();

    let question = repo.find_question(1).unwrap().unwrap();
    assert_eq!(question.title, "什么是系统性风险？");
    assert!(question.answers[0].is_best);

    // The fallback lookup never writes the fixtures back
    assert!(repo.questions().unwrap().is_empty());
}

// ========== COURSE COMMENTS ==========

#[test]
fn course_comments_prepend_with_rating() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    community
        .comment_course(
            Some(&user),
            1,
            &NewComment {
                content: "讲得很清楚".to_string(),
                rating: 5,
            },
        )
        .unwrap();
    community
        .comment_course(
            Some(&user),
            1,
            &NewComment {
                content: "一般".to_string(),
                rating: 0,
            },
        )
        .unwrap();

    let comments = repo.course_comments(1).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "一般");
    assert_eq!(comments[1].rating, 5);

    // Other courses are unaffected
    assert!(repo.course_comments(2).unwrap().is_empty());
}

#[test]
fn comment_validation() {
    let repo = test_repo();
    let community = CommunityService::new(repo.clone());
    let user = login_student(&repo);

    assert!(matches!(
        community.comment_course(Some(&user), 1, &NewComment { content: " ".to_string(), rating: 3 }),
        Err(AppError::Validation { field: "content", .. })
    ));
    assert!(matches!(
        community.comment_course(Some(&user), 1, &NewComment { content: "好".to_string(), rating: 6 }),
        Err(AppError::Validation { field: "rating", .. })
    ));
    assert!(repo.course_comments(1).unwrap().is_empty());
}

// ========== COURSES & PROGRESS ==========

#[test]
fn catalog_seeded_on_first_load() {
    let repo = test_repo();

    assert!(repo.store().get_raw(&StoreKey::Courses).unwrap().is_none());

    let courses = repo.courses().unwrap();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0].title, "金融市场基础");
    assert_eq!(courses[0].lessons.len(), 3);

    // Second load reads the stored copy
    assert!(repo.store().get_raw(&StoreKey::Courses).unwrap().is_some());
    assert_eq!(repo.courses().unwrap().len(), 3);
}

#[test]
fn enrolling_bumps_counter_and_logs_a_record() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    let before = repo.find_course(1).unwrap().unwrap().enrolled_students;
    let course = learning.enroll(Some(&user), 1).unwrap();
    assert_eq!(course.enrolled_students, before + 1);
    assert_eq!(
        repo.find_course(1).unwrap().unwrap().enrolled_students,
        before + 1
    );

    let records = repo.learning_records(user.id).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, RecordKind::CourseEnrolled);
    assert_eq!(records[0].course_id, 1);
    assert!(!records[0].timestamp.is_empty());
}

#[test]
fn progress_initialized_on_first_read() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    let progress = learning.progress(Some(&user), 1).unwrap();
    assert_eq!(progress.completed_lessons, 0);
    assert_eq!(progress.total_lessons, 3);
    assert_eq!(progress.current_lesson_id, 1);

    // And it was persisted
    assert!(repo.course_progress(user.id, 1).unwrap().is_some());
}

#[test]
fn selecting_a_lesson_moves_the_cursor() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    let progress = learning.select_lesson(Some(&user), 1, 2).unwrap();
    assert_eq!(progress.current_lesson_id, 2);

    assert!(matches!(
        learning.select_lesson(Some(&user), 1, 99),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn completing_all_lessons_sequentially_reaches_the_total() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    // Course 1 has 3 lessons; complete them in order
    let first = learning.complete_lesson(Some(&user), 1, 1).unwrap();
    assert_eq!(first.completed_lessons, 1);
    assert!(!first.finished);
    assert_eq!(first.next_lesson.as_ref().map(|l| l.id), Some(2));

    let second = learning.complete_lesson(Some(&user), 1, 2).unwrap();
    assert_eq!(second.completed_lessons, 2);
    assert!(!second.finished);

    let third = learning.complete_lesson(Some(&user), 1, 3).unwrap();
    assert_eq!(third.completed_lessons, 3);
    assert!(third.finished);
    assert!(third.next_lesson.is_none());

    let progress = repo.course_progress(user.id, 1).unwrap().unwrap();
    assert_eq!(progress.completed_lessons, 3);
    assert!(progress.completed_lessons <= progress.total_lessons);

    // One learning record per completion
    let records = repo.learning_records(user.id).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.kind == RecordKind::LessonCompleted));
}

#[test]
fn recompleting_a_lesson_never_exceeds_the_total() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    for lesson_id in [1, 2, 3] {
        learning.complete_lesson(Some(&user), 1, lesson_id).unwrap();
    }
    let again = learning.complete_lesson(Some(&user), 1, 3).unwrap();

    assert_eq!(again.completed_lessons, 3);
    let progress = repo.course_progress(user.id, 1).unwrap().unwrap();
    assert!(progress.completed_lessons <= progress.total_lessons);
}

#[test]
fn course_mutations_require_login() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());

    assert!(matches!(
        learning.enroll(None, 1),
        Err(AppError::Unauthenticated)
    ));
    assert!(matches!(
        learning.complete_lesson(None, 1, 1),
        Err(AppError::Unauthenticated)
    ));

    // Nothing was written
    let user = login_student(&repo);
    assert!(repo.learning_records(user.id).unwrap().is_empty());
    assert!(repo.course_progress(user.id, 1).unwrap().is_none());
}

#[test]
fn missing_course_is_not_found() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let user = login_student(&repo);

    assert!(matches!(
        learning.enroll(Some(&user), 404),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        learning.progress(Some(&user), 404),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn progress_is_scoped_per_user_and_course() {
    let repo = test_repo();
    let learning = LearningService::new(repo.clone());
    let service = auth(&repo);
    let student = service.login("student01", "123456").unwrap();
    let teacher = service.login("teacher01", "123456").unwrap();

    learning.complete_lesson(Some(&student), 1, 1).unwrap();

    assert!(repo.course_progress(teacher.id, 1).unwrap().is_none());
    assert!(repo.course_progress(student.id, 2).unwrap().is_none());
    assert_eq!(
        repo.course_progress(student.id, 1)
            .unwrap()
            .unwrap()
            .completed_lessons,
        1
    );
}

// ========== CONFIG ==========

#[test]
fn config_parse_toml() {
    let toml = r#"
[storage]
path = "/tmp/test.db"

[auth]
registration = "disabled"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.storage.path.to_str(), Some("/tmp/test.db"));
    assert!(!config.auth.registration_enabled());
}

#[test]
fn config_default_values() {
    let config = Config::default();
    assert!(config.auth.registration_enabled());
    assert_eq!(config.storage.path.to_str(), Some("data/finlearn.db"));
}
