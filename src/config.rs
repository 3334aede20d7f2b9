use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local-first learning community store, inspection CLI.
#[derive(Parser, Debug, Clone)]
#[command(name = "finlearn-rs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, env = "FINLEARN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Initialize store and create default config.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },

    /// Write seed posts and Q&A fixtures into the store.
    Seed,

    /// User management commands.
    User {
        /// User subcommand action.
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Forum commands.
    Post {
        /// Post subcommand action.
        #[command(subcommand)]
        action: PostCommand,
    },

    /// Show one user's progress in one course.
    Progress {
        /// Username (seed or registered).
        username: String,
        /// Course id.
        course_id: i64,
    },

    /// Wipe every key in the store (debug use).
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// User management subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum UserCommand {
    /// Register a new account.
    Add {
        /// Username.
        username: String,
        /// Email address.
        #[arg(short, long)]
        email: String,
        /// Password (will prompt if not provided).
        #[arg(short, long)]
        password: Option<String>,
        /// Account role (student, teacher or admin).
        #[arg(short, long, default_value = "student")]
        role: String,
    },

    /// List registered accounts.
    List,
}

/// Forum subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum PostCommand {
    /// List stored posts, newest first.
    List,

    /// Publish a post as a given user.
    Add {
        /// Author username (must log in).
        #[arg(short, long)]
        author: String,
        /// Author password.
        #[arg(short, long)]
        password: String,
        /// Post title.
        title: String,
        /// Post body.
        content: String,
        /// Category name.
        #[arg(long, default_value = "股票讨论")]
        category: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Show the replies under a post, oldest first.
    Replies {
        /// Post id.
        post_id: i64,
    },
}

/// Main configuration from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite key-value store file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/finlearn.db")
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Registration mode: "open", "disabled".
    #[serde(default = "default_registration")]
    pub registration: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            registration: default_registration(),
        }
    }
}

fn default_registration() -> String {
    "open".to_string()
}

impl AuthConfig {
    /// Check if registration is enabled.
    pub fn registration_enabled(&self) -> bool {
        self.registration == "open"
    }
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to parse config file: {}", e))
        })
    }

    /// Find config file in default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("config.toml"),
            PathBuf::from("finlearn-rs.toml"),
            dirs::config_dir()
                .map(|p| p.join("finlearn-rs").join("config.toml"))
                .unwrap_or_default(),
            PathBuf::from("/etc/finlearn-rs/config.toml"),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    /// Generate default config file content.
    pub fn generate_default() -> String {
        r#"# finlearn-rs configuration

[storage]
# path = "/var/lib/finlearn-rs/finlearn.db"

[auth]
# Registration mode: "open" or "disabled"
registration = "open"
"#
        .to_string()
    }
}
