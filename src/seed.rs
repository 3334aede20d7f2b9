//! Seed fixtures: demo accounts and initial catalog/forum content.
//!
//! Seed accounts exist without registration and are never written to the
//! `users` collection; they are consulted at login before registered
//! accounts. Seed courses are written to the store on first read; seed
//! posts and questions are read-time fallbacks only.

use crate::models::{Answer, Course, Difficulty, Lesson, Post, Question, Role, User};

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}

/// The three demo accounts.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "student01".to_string(),
            email: "student01@example.com".to_string(),
            password: "123456".to_string(),
            role: Role::Student,
            avatar: avatar("student01"),
            join_date: "2024-01-15".to_string(),
            courses_completed: 5,
            total_score: 850,
            level: "初级学员".to_string(),
        },
        User {
            id: 2,
            username: "teacher01".to_string(),
            email: "teacher01@example.com".to_string(),
            password: "123456".to_string(),
            role: Role::Teacher,
            avatar: avatar("teacher01"),
            join_date: "2024-01-10".to_string(),
            courses_completed: 15,
            total_score: 1200,
            level: "高级讲师".to_string(),
        },
        User {
            id: 3,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "123456".to_string(),
            role: Role::Admin,
            avatar: avatar("admin"),
            join_date: "2024-01-01".to_string(),
            courses_completed: 20,
            total_score: 1500,
            level: "管理员".to_string(),
        },
    ]
}

fn lesson(id: i64, title: &str, duration: &str, video: &str) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        duration: duration.to_string(),
        completed: false,
        video_url: format!("assets/{}", video),
    }
}

/// The initial course catalog.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "金融市场基础".to_string(),
            description: "了解金融市场的基本运作机制，包括股票市场、债券市场、外汇市场等"
                .to_string(),
            instructor: "张教授".to_string(),
            duration: "8小时".to_string(),
            difficulty: Difficulty::Beginner,
            category: "基础知识".to_string(),
            enrolled_students: 156,
            rating: 4.8,
            thumbnail: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=400"
                .to_string(),
            lessons: vec![
                lesson(1, "金融市场概述", "45分钟", "video1.mp4"),
                lesson(2, "股票市场基础", "60分钟", "video2.mp4"),
                lesson(3, "债券市场入门", "50分钟", "video3.mp4"),
            ],
        },
        Course {
            id: 2,
            title: "投资组合管理".to_string(),
            description: "学习如何构建和管理投资组合，理解风险与收益的平衡，掌握了解市场动态"
                .to_string(),
            instructor: "李博士".to_string(),
            duration: "12小时".to_string(),
            difficulty: Difficulty::Intermediate,
            category: "投资分析".to_string(),
            enrolled_students: 89,
            rating: 4.6,
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400"
                .to_string(),
            lessons: vec![
                lesson(1, "投资组合理论", "90分钟", "video1.mp4"),
                lesson(2, "资产配置策略", "75分钟", "video2.mp4"),
            ],
        },
        Course {
            id: 3,
            title: "金融风险管理".to_string(),
            description: "掌握金融风险的识别、评估和控制方法。把握金融风险投资情况".to_string(),
            instructor: "王专家".to_string(),
            duration: "10小时".to_string(),
            difficulty: Difficulty::Advanced,
            category: "风险管理".to_string(),
            enrolled_students: 67,
            rating: 4.9,
            thumbnail: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400"
                .to_string(),
            lessons: vec![
                lesson(1, "风险类型与识别", "60分钟", "video1.mp4"),
                lesson(2, "VaR模型应用", "90分钟", "video2.mp4"),
            ],
        },
    ]
}

fn post(
    id: i64,
    title: &str,
    content: &str,
    author: &str,
    category: &str,
    publish_time: &str,
    likes: u32,
    replies: u32,
    views: u32,
    tags: &[&str],
) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        author_avatar: avatar(author),
        category: category.to_string(),
        publish_time: publish_time.to_string(),
        likes,
        replies,
        views,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The initial forum posts, newest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "如何理解股票市场的波动性？",
            "最近在学习股票市场，对波动性这个概念还是有些模糊，有没有同学能帮忙解释一下？",
            "student01",
            "股票讨论",
            "2024-01-20 14:30",
            15,
            8,
            156,
            &["股票", "波动性", "新手入门"],
        ),
        post(
            2,
            "分享一个投资组合优化的案例",
            "最近做了一个关于投资组合优化的项目，想和大家分享一下心得体会...",
            "teacher01",
            "投资分析",
            "2024-01-19 16:45",
            32,
            12,
            289,
            &["投资组合", "优化", "案例分享"],
        ),
        post(
            3,
            "金融风险管理中的VaR计算问题",
            "在计算VaR时，历史模拟法和蒙特卡洛模拟法各有什么优缺点？",
            "student02",
            "风险管理",
            "2024-01-18 09:20",
            8,
            5,
            98,
            &["VaR", "风险管理", "计算方法"],
        ),
    ]
}

/// The initial Q&A content.
pub fn seed_questions() -> Vec<Question> {
    vec![Question {
        id: 1,
        title: "什么是系统性风险？".to_string(),
        content: "在学习金融风险时，经常听到系统性风险这个词，具体是什么意思？".to_string(),
        author: "student03".to_string(),
        author_avatar: avatar("student03"),
        category: "基础知识".to_string(),
        publish_time: "2024-01-21 11:15".to_string(),
        likes: 5,
        answers: vec![Answer {
            id: 1,
            content: "系统性风险是指影响整个金融系统的风险，比如金融危机、经济衰退等，不能通过分散投资来消除。"
                .to_string(),
            author: "teacher01".to_string(),
            author_avatar: avatar("teacher01"),
            publish_time: "2024-01-21 12:30".to_string(),
            likes: 12,
            is_best: true,
        }],
    }]
}
