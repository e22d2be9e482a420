//! Seed binary - fills the database with sample artists, songs and tags
//!
//! Usage:
//!   cargo run --bin seed
//!
//! Creates an admin user (admin@indiek.com) if missing and prints a fresh
//! session token for it, usable as `Authorization: Bearer <token>`.
//! Running it again leaves existing rows alone.
//!
//! Optional:
//! - DATABASE_URL (defaults to sqlite://kindie.db)
//! - SESSION_TTL_HOURS (defaults to 720)

use anyhow::Result;
use chrono::NaiveDate;
use kindie_hub::config::Config;
use kindie_hub::db::Database;
use kindie_hub::models::{NewArtist, NewSong, Role};
use tracing::info;

const ADMIN_EMAIL: &str = "admin@indiek.com";

struct SeedSong {
    title: &'static str,
    description: &'static str,
    youtube_url: &'static str,
    duration: &'static str,
    released: (i32, u32, u32),
}

fn sample_artists() -> Vec<(NewArtist, SeedSong)> {
    vec![
        (
            NewArtist {
                name: "IU".to_string(),
                bio: Some("Lee Ji-eun, known professionally as IU, is a South Korean singer-songwriter and actress. She is one of the most successful solo artists in South Korea.".to_string()),
                website: Some("https://www.iu-official.com".to_string()),
                instagram: Some("https://www.instagram.com/dlwlrma".to_string()),
                youtube: Some("https://www.youtube.com/channel/UC3SyT4_WLHzN7JmHQwKQZww".to_string()),
                spotify: Some("https://open.spotify.com/artist/3HqSLMAZ3g3d5poNaI7GOU".to_string()),
                ..Default::default()
            },
            SeedSong {
                title: "Through the Night",
                description: "A beautiful ballad by IU that showcases her emotional vocal range.",
                youtube_url: "https://www.youtube.com/watch?v=BzYnNdJhZQw",
                duration: "3:42",
                released: (2017, 3, 24),
            },
        ),
        (
            NewArtist {
                name: "Dean".to_string(),
                bio: Some("Kwon Hyuk, known professionally as Dean, is a South Korean alternative R&B singer-songwriter, rapper and record producer.".to_string()),
                instagram: Some("https://www.instagram.com/deantrbl".to_string()),
                youtube: Some("https://www.youtube.com/channel/UCQGgKmB8wWvjqQqyKVcMwww".to_string()),
                spotify: Some("https://open.spotify.com/artist/3eCd0TZrBPm2n7OIqn5zKw".to_string()),
                ..Default::default()
            },
            SeedSong {
                title: "Instagram",
                description: "A smooth R&B track by Dean featuring Syd.",
                youtube_url: "https://www.youtube.com/watch?v=wKyMIrBClYw",
                duration: "3:26",
                released: (2017, 2, 28),
            },
        ),
        (
            NewArtist {
                name: "Heize".to_string(),
                bio: Some("Jang Da-hye, known professionally as Heize, is a South Korean singer, songwriter, and rapper.".to_string()),
                instagram: Some("https://www.instagram.com/heize_official".to_string()),
                youtube: Some("https://www.youtube.com/channel/UCQGgKmB8wWvjqQqyKVcMwww".to_string()),
                spotify: Some("https://open.spotify.com/artist/5dCvNgE4gBqlzy9YC6Hg6x".to_string()),
                ..Default::default()
            },
            SeedSong {
                title: "Star",
                description: "A dreamy track by Heize with beautiful vocals.",
                youtube_url: "https://www.youtube.com/watch?v=XUR8QByF2As",
                duration: "4:12",
                released: (2019, 7, 4),
            },
        ),
    ]
}

const SAMPLE_TAGS: [(&str, &str); 3] = [("Indie", "#3B82F6"), ("R&B", "#8B5CF6"), ("Ballad", "#EF4444")];

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kindie_hub=info".parse()?)
                .add_directive("seed=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let db = Database::connect(&config.database_url).await?;

    info!("Starting database seeding");

    for (artist, track) in sample_artists() {
        if db.get_artist_by_slug(&artist.name.to_lowercase()).await?.is_some() {
            info!("Artist {} already present, skipping", artist.name);
            continue;
        }

        let created = db.create_artist(&artist).await?;
        let (year, month, day) = track.released;
        db.create_song(&NewSong {
            title: track.title.to_string(),
            artist_id: Some(created.id),
            description: Some(track.description.to_string()),
            youtube_url: Some(track.youtube_url.to_string()),
            duration: Some(track.duration.to_string()),
            release_date: NaiveDate::from_ymd_opt(year, month, day),
            is_active: Some(true),
        })
        .await?;
        info!("Seeded {} with {}", created.name, track.title);
    }

    if db.count_tags().await? == 0 {
        for (name, color) in SAMPLE_TAGS {
            db.create_tag(name, Some(color)).await?;
        }
        info!("Seeded {} tags", SAMPLE_TAGS.len());
    }

    let admin = match db.get_user_by_email(ADMIN_EMAIL).await? {
        Some(user) => user,
        None => {
            db.create_user(ADMIN_EMAIL, "admin", Some("Admin User"), Role::Admin)
                .await?
        }
    };
    let token = db.create_session(admin.id, config.session_ttl_hours).await?;

    println!("\n========================================");
    println!("  SEEDING COMPLETE");
    println!("========================================");
    println!("  Admin: {}", admin.email);
    println!("  Session token: {}", token);
    println!("========================================\n");

    db.close().await;
    Ok(())
}
