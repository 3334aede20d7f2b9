//! finlearn-rs CLI entry point.

use clap::Parser;
use finlearn_rs::{
    auth::AuthService,
    community::CommunityService,
    config::{Cli, Command, Config, PostCommand, UserCommand},
    models::{NewPost, Registration, Role},
    repo::Repo,
    seed,
    store::{Store, StoreKey},
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finlearn_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Find or load config
    let config_path = cli.config.clone().or_else(Config::find_config_file);

    let config = if let Some(ref path) = config_path {
        Config::load(path)?
    } else {
        Config::default()
    };

    match cli.command {
        Some(Command::Init { force }) => cmd_init(force),
        Some(Command::Seed) => cmd_seed(&config),
        Some(Command::User { action }) => cmd_user(action, &config),
        Some(Command::Post { action }) => cmd_post(action, &config),
        Some(Command::Progress {
            username,
            course_id,
        }) => cmd_progress(&username, course_id, &config),
        Some(Command::Reset { yes }) => cmd_reset(yes, &config),
        None => cmd_seed(&config),
    }
}

fn open_repo(config: &Config) -> anyhow::Result<Repo> {
    let store = Store::open(&config.storage.path)?;
    Ok(Repo::new(store))
}

/// Initialize config and store.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let config_path = PathBuf::from("config.toml");

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, Config::generate_default())?;
    println!("Created config file: {}", config_path.display());

    let config = Config::default();
    let _store = Store::open(&config.storage.path)?;
    println!("Initialized store: {}", config.storage.path.display());

    println!("\nEdit config.toml to configure the store location.");
    println!("Then run: finlearn-rs seed");

    Ok(())
}

/// Seed courses, posts and Q&A fixtures into the store.
fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let repo = open_repo(config)?;

    // First read writes the catalog fixture
    let courses = repo.courses()?;
    println!("Course catalog: {} courses", courses.len());

    if repo.posts()?.is_empty() {
        let posts = seed::seed_posts();
        repo.store().set_value(&StoreKey::Posts, &posts)?;
        println!("Seeded {} forum posts", posts.len());
    } else {
        println!("Forum posts already present, left untouched");
    }

    if repo.questions()?.is_empty() {
        let questions = seed::seed_questions();
        repo.store().set_value(&StoreKey::Questions, &questions)?;
        println!("Seeded {} questions", questions.len());
    } else {
        println!("Questions already present, left untouched");
    }

    Ok(())
}

/// User management commands.
fn cmd_user(action: UserCommand, config: &Config) -> anyhow::Result<()> {
    let repo = open_repo(config)?;
    let auth = AuthService::new(repo.clone(), config.auth.registration_enabled());

    match action {
        UserCommand::Add {
            username,
            email,
            password,
            role,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let role = parse_role(&role)?;

            let user = auth.register(&Registration {
                username,
                email,
                password: password.clone(),
                confirm_password: password,
                role,
            })?;
            println!(
                "Registered user: {} (role: {:?}, id: {})",
                user.username, user.role, user.id
            );
        }

        UserCommand::List => {
            let users = repo.registered_users()?;
            if users.is_empty() {
                println!("No registered users (seed accounts always exist).");
            } else {
                println!("{:<20} {:<10} {:<16} JOINED", "USERNAME", "ROLE", "ID");
                println!("{}", "-".repeat(70));
                for user in users {
                    println!(
                        "{:<20} {:<10} {:<16} {}",
                        user.username,
                        format!("{:?}", user.role).to_lowercase(),
                        user.id,
                        user.join_date
                    );
                }
            }
        }
    }

    Ok(())
}

/// Forum commands.
fn cmd_post(action: PostCommand, config: &Config) -> anyhow::Result<()> {
    let repo = open_repo(config)?;

    match action {
        PostCommand::List => {
            let posts = repo.posts()?;
            if posts.is_empty() {
                println!("No stored posts. Run 'finlearn-rs seed' first.");
            } else {
                for post in posts {
                    println!(
                        "[{}] {} by {} ({}) likes={} replies={} views={}",
                        post.id,
                        post.title,
                        post.author,
                        post.publish_time,
                        post.likes,
                        post.replies,
                        post.views
                    );
                }
            }
        }

        PostCommand::Add {
            author,
            password,
            title,
            content,
            category,
            tags,
        } => {
            let auth = AuthService::new(repo.clone(), config.auth.registration_enabled());
            let user = auth.login(&author, &password)?;

            let community = CommunityService::new(repo);
            let post = community.create_post(
                Some(&user),
                &NewPost {
                    title,
                    content,
                    category,
                    tags: tags
                        .split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect(),
                },
            )?;
            println!("Published post {} by {}", post.id, post.author);
        }

        PostCommand::Replies { post_id } => {
            let replies = repo.post_replies(post_id)?;
            if replies.is_empty() {
                println!("No replies under post {}.", post_id);
            } else {
                for reply in replies {
                    let target = reply
                        .reply_to_author
                        .map(|a| format!(" -> @{}", a))
                        .unwrap_or_default();
                    println!(
                        "[{}] {}{} ({}): {}",
                        reply.id, reply.author, target, reply.publish_time, reply.content
                    );
                }
            }
        }
    }

    Ok(())
}

/// Show one user's progress in one course.
fn cmd_progress(username: &str, course_id: i64, config: &Config) -> anyhow::Result<()> {
    let repo = open_repo(config)?;

    let user = seed::seed_users()
        .into_iter()
        .chain(repo.registered_users()?)
        .find(|u| u.username == username);

    let Some(user) = user else {
        println!("User not found: {}", username);
        return Ok(());
    };

    let Some(course) = repo.find_course(course_id)? else {
        println!("Course not found: {}", course_id);
        return Ok(());
    };

    match repo.course_progress(user.id, course_id)? {
        Some(progress) => {
            let percent = if progress.total_lessons > 0 {
                progress.completed_lessons as f64 / progress.total_lessons as f64 * 100.0
            } else {
                0.0
            };
            println!("{} — {}", user.username, course.title);
            println!(
                "  {}/{} lessons ({:.1}%), last studied {}",
                progress.completed_lessons,
                progress.total_lessons,
                percent,
                progress.last_study_time
            );
        }
        None => println!("{} has no progress in {}.", user.username, course.title),
    }

    Ok(())
}

/// Wipe the store.
fn cmd_reset(yes: bool, config: &Config) -> anyhow::Result<()> {
    if !yes {
        let answer = prompt("This removes every key in the store. Type 'yes' to continue: ")?;
        if answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = Store::open(&config.storage.path)?;
    store.clear()?;
    println!("Store cleared: {}", config.storage.path.display());
    Ok(())
}

fn parse_role(role: &str) -> anyhow::Result<Role> {
    match role {
        "student" => Ok(Role::Student),
        "teacher" => Ok(Role::Teacher),
        "admin" => Ok(Role::Admin),
        other => anyhow::bail!("Unknown role: {} (student, teacher or admin)", other),
    }
}

/// Prompt for a line of input.
fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}
