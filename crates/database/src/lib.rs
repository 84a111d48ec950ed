//! SQLite persistence for the check-in dispatcher.
//!
//! This crate provides async database operations for hotels, rooms, dispatch
//! outcome records, settings and the guest conversation log using SQLx with
//! SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{hotel, models::NewRoom, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:concierge.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Seed a hotel with one room
//!     let hotel_id = hotel::create_hotel(db.pool(), "Oberth", Some("+40700000000")).await?;
//!     let room = NewRoom {
//!         hotel_id,
//!         name: "Camera 1".to_string(),
//!         calendar_url: Some("https://example.com/room1.ics".to_string()),
//!         contact_number: None,
//!         template_name: "oberth".to_string(),
//!     };
//!     hotel::create_room(db.pool(), &room).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod conversation;
pub mod error;
pub mod hotel;
pub mod models;
pub mod sent_message;
pub mod setting;

pub use error::{DatabaseError, Result};
pub use models::{
    Conversation, Hotel, HotelMessageStats, MessageFilter, NewConversation, NewRoom,
    NewSentMessage, Room, SentMessage,
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 8;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// For `sqlite::memory:` use [`Database::connect_with_pool_size`] with a
    /// pool size of 1; every connection would otherwise get its own database.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
