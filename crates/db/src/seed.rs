//! Demo data for a freshly provisioned database.

use chrono::{NaiveDate, Utc};

use crate::DbPool;

/// Wipe both tables (restarting the id sequences) and insert the demo
/// movies and actors. Runs in a single transaction.
pub async fn reset_and_seed(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE actors, movies RESTART IDENTITY")
        .execute(&mut *tx)
        .await?;

    let movies = [
        ("The Cult of Shincheonji", NaiveDate::from_ymd_opt(2020, 1, 1)),
        ("Up", Some(Utc::now().date_naive())),
    ];
    for (title, release_date) in movies {
        sqlx::query("INSERT INTO movies (title, release_date) VALUES ($1, $2)")
            .bind(title)
            .bind(release_date)
            .execute(&mut *tx)
            .await?;
    }

    let actors = [
        ("Jynn Shen", "22", "Female"),
        ("Ethan Tam", "27", "Male"),
        ("Gloria Tan", "22", "Female"),
    ];
    for (name, age, gender) in actors {
        sqlx::query("INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(age)
            .bind(gender)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(movies = movies.len(), actors = actors.len(), "Seeded demo data");
    Ok(())
}
