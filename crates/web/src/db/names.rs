//! Name repository: filtered, popularity-ordered reads of the `names` table.

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use namenest_core::{CountRange, Gender, NameQuery, NameRecord};

use super::{NameStore, RepositoryError};

const SELECT_COLUMNS: &str =
    "SELECT name, gender, origin, meaning, characteristics, popularity_score FROM names";

/// Vowel groups approximate syllables (`"Olivia"` → o, i, ia = 3).
///
/// Accented vowels count as vowels. A diaeresis marks a new syllable, so
/// `"Zoë"` is o, ë = 2.
const VOWEL_GROUP_PATTERN: &str = "[äëïöüÿ][aeiouyàáâãåæèéêìíîòóôõøœùúûý]*|[aeiouyàáâãåæèéêìíîòóôõøœùúûý]+";

const SYLLABLE_EXPR: &str = concat!(
    "(SELECT count(*) FROM regexp_matches(lower(name), '",
    "[äëïöüÿ][aeiouyàáâãåæèéêìíîòóôõøœùúûý]*|[aeiouyàáâãåæèéêìíîòóôõøœùúûý]+",
    "', 'g'))"
);

const LENGTH_EXPR: &str = "char_length(name)";

#[derive(Debug, FromRow)]
struct NameRow {
    name: String,
    gender: String,
    origin: String,
    meaning: String,
    characteristics: Vec<String>,
    popularity_score: i32,
}

impl TryFrom<NameRow> for NameRecord {
    type Error = RepositoryError;

    fn try_from(row: NameRow) -> Result<Self, Self::Error> {
        let gender = row.gender.parse::<Gender>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid gender for {}: {e}", row.name))
        })?;

        Ok(Self {
            name: row.name,
            gender,
            origin: row.origin,
            meaning: row.meaning,
            characteristics: row.characteristics,
            popularity_score: row.popularity_score,
        })
    }
}

/// Repository for name database operations.
pub struct NameRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NameRepository<'a> {
    /// Create a new name repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total number of names.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT count(*) FROM names")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// The most popular names, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row has an unknown gender.
    pub async fn sample(&self, limit: u32) -> Result<Vec<NameRecord>, RepositoryError> {
        let query = NameQuery {
            limit,
            ..NameQuery::new()
        };
        self.search(&query).await
    }

    /// Insert or replace a name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn upsert(&self, record: &NameRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO names (name, gender, origin, meaning, characteristics, popularity_score)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name, gender) DO UPDATE
            SET origin = EXCLUDED.origin,
                meaning = EXCLUDED.meaning,
                characteristics = EXCLUDED.characteristics,
                popularity_score = EXCLUDED.popularity_score
            ",
        )
        .bind(&record.name)
        .bind(record.gender.as_str())
        .bind(&record.origin)
        .bind(&record.meaning)
        .bind(&record.characteristics)
        .bind(record.popularity_score)
        .execute(self.pool)
        .await?;
        Ok(())
    }
}

impl NameStore for NameRepository<'_> {
    async fn search(&self, query: &NameQuery) -> Result<Vec<NameRecord>, RepositoryError> {
        let rows = build_search(query)
            .build_query_as::<NameRow>()
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(NameRecord::try_from).collect()
    }
}

/// Build the `SELECT` for a query. Every value is bound, never interpolated.
fn build_search(query: &NameQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_COLUMNS);
    qb.push(" WHERE TRUE");

    if let Some(gender) = query.gender {
        qb.push(" AND gender = ").push_bind(gender.as_str());
    }
    if let Some(origin) = &query.origin {
        qb.push(" AND origin ILIKE ").push_bind(escape_like(origin));
    }
    if let Some(prefix) = &query.starts_with {
        qb.push(" AND name ILIKE ")
            .push_bind(format!("{}%", escape_like(prefix)));
    }
    if let Some(range) = query.syllables {
        push_range(&mut qb, SYLLABLE_EXPR, range);
    }
    if let Some(range) = query.length {
        push_range(&mut qb, LENGTH_EXPR, range);
    }
    if let Some(characteristic) = &query.characteristic {
        qb.push(" AND EXISTS (SELECT 1 FROM unnest(characteristics) AS c WHERE lower(c) = lower(")
            .push_bind(characteristic.clone())
            .push("))");
    }
    if let Some(fragment) = &query.meaning_contains {
        qb.push(" AND meaning ILIKE ")
            .push_bind(format!("%{}%", escape_like(fragment)));
    }

    qb.push(" ORDER BY popularity_score DESC, name ASC LIMIT ")
        .push_bind(i64::from(query.limit.min(NameQuery::MAX_RESULTS)));
    qb
}

fn push_range(qb: &mut QueryBuilder<'static, Postgres>, expr: &str, range: CountRange) {
    qb.push(" AND ")
        .push(expr)
        .push(" >= ")
        .push_bind(i64::from(range.min));
    if let Some(max) = range.max {
        qb.push(" AND ").push(expr).push(" <= ").push_bind(i64::from(max));
    }
}

/// Escape `LIKE` metacharacters so user-facing values match literally.
fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
