//! One-shot reseed of the users table with demo data.
//!
//! Clears every existing row, inserts the five demo users, then prints the
//! resulting table as JSON. Development tool only: it is not safe to run
//! against a live server taking traffic.

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use tutorhub::config::AppConfig;
use tutorhub::users::password::hash_password;
use tutorhub::users::repo::{PublicUser, User, UserType};
use tutorhub::users::validate::NewUser;

const DEMO_USERS: [(&str, &str, &str, UserType); 5] = [
    ("Splinter", "splinter@tmnt.com", "M4ster5plinter", UserType::Teacher),
    ("Leonardo", "leo@tmnt.com", "IH34rtApril", UserType::Student),
    ("Donatello", "don@tmnt.com", "M4ch1nes", UserType::Student),
    ("Raphael", "raph@tmnt.com", "c00lButRude", UserType::Student),
    ("Michelangelo", "mikey@tmnt.com", "C0wabunga", UserType::Student),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let db = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;

    let removed = User::delete_all(&db).await?;
    info!(removed, "cleared users table");

    for (name, email, password, user_type) in DEMO_USERS {
        let new = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            user_type,
            password: password.to_string(),
        };
        let hash = hash_password(&new.password)?;
        let user = User::create(&db, &new, &hash).await?;
        info!(user_id = user.id, name = %user.name, "seeded user");
    }

    let users = PublicUser::find_all(&db).await?;
    println!("{}", serde_json::to_string_pretty(&users)?);

    db.close().await;
    Ok(())
}
