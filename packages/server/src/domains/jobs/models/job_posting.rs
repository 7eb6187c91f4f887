use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::JobFilter;
use crate::common::PageRequest;

const SELECT_COLUMNS: &str = "id, external_id, title, company, location, description, url, \
     source, posted_at, scraped_at, remote, salary, tags, active";

/// Rows per INSERT statement. 13 binds per row keeps a chunk well under
/// Postgres' 65535 parameter limit.
const UPSERT_CHUNK_SIZE: usize = 1000;

/// A stored job posting as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub posted_at: DateTime<Utc>,
    pub scraped_at: DateTime<Utc>,
    pub remote: bool,
    pub salary: Option<String>,
    pub tags: Vec<String>,
    pub active: bool,
}

/// A fully-defaulted posting ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub posted_at: DateTime<Utc>,
    pub scraped_at: DateTime<Utc>,
    pub remote: bool,
    pub salary: Option<String>,
    pub tags: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpsertCounts {
    pub inserted: usize,
    pub updated: usize,
}

impl JobPosting {
    /// Insert-or-replace every posting keyed by `external_id`, in one
    /// transaction.
    ///
    /// Counts follow sequential upsert semantics: a repeated id inside the
    /// batch is inserted once and updated for every later occurrence.
    pub async fn upsert_batch(postings: Vec<NewJobPosting>, pool: &PgPool) -> Result<UpsertCounts> {
        let received = postings.len();
        let postings = collapse_duplicates(postings);

        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for chunk in postings.chunks(UPSERT_CHUNK_SIZE) {
            let mut qb = QueryBuilder::<Postgres>::new(
                "INSERT INTO job_postings (external_id, title, company, location, description, \
                 url, source, posted_at, scraped_at, remote, salary, tags, active) ",
            );
            qb.push_values(chunk, |mut row, posting| {
                row.push_bind(posting.external_id.clone())
                    .push_bind(posting.title.clone())
                    .push_bind(posting.company.clone())
                    .push_bind(posting.location.clone())
                    .push_bind(posting.description.clone())
                    .push_bind(posting.url.clone())
                    .push_bind(posting.source.clone())
                    .push_bind(posting.posted_at)
                    .push_bind(posting.scraped_at)
                    .push_bind(posting.remote)
                    .push_bind(posting.salary.clone())
                    .push_bind(posting.tags.clone())
                    .push_bind(posting.active);
            });
            qb.push(
                " ON CONFLICT (external_id) DO UPDATE SET
                    title = EXCLUDED.title,
                    company = EXCLUDED.company,
                    location = EXCLUDED.location,
                    description = EXCLUDED.description,
                    url = EXCLUDED.url,
                    source = EXCLUDED.source,
                    posted_at = EXCLUDED.posted_at,
                    scraped_at = EXCLUDED.scraped_at,
                    remote = EXCLUDED.remote,
                    salary = EXCLUDED.salary,
                    tags = EXCLUDED.tags,
                    active = EXCLUDED.active,
                    updated_at = NOW()
                 RETURNING (xmax = 0) AS inserted",
            );

            let flags = qb.build_query_scalar::<bool>().fetch_all(&mut *tx).await?;
            inserted += flags.into_iter().filter(|was_inserted| *was_inserted).count();
        }

        tx.commit().await?;

        Ok(UpsertCounts {
            inserted,
            updated: received - inserted,
        })
    }

    /// One page of postings matching `filter`, newest first. Ties on
    /// `posted_at` keep insertion order.
    pub async fn find_page(filter: &JobFilter, page: &PageRequest, pool: &PgPool) -> Result<Vec<Self>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {SELECT_COLUMNS} FROM job_postings"));
        filter.push_where(&mut qb);
        qb.push(" ORDER BY posted_at DESC, id ASC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        qb.build_query_as::<Self>()
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Number of postings matching `filter`, ignoring pagination.
    pub async fn count(filter: &JobFilter, pool: &PgPool) -> Result<i64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM job_postings");
        filter.push_where(&mut qb);

        qb.build_query_scalar::<i64>()
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_external_id(external_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {SELECT_COLUMNS} FROM job_postings WHERE external_id = $1"
        ))
        .bind(external_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}

/// Keep the last payload for each `external_id`, at the position where the
/// id first appeared. A single INSERT cannot touch the same row twice.
fn collapse_duplicates(postings: Vec<NewJobPosting>) -> Vec<NewJobPosting> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(postings.len());
    let mut unique: Vec<NewJobPosting> = Vec::with_capacity(postings.len());

    for posting in postings {
        match positions.get(&posting.external_id) {
            Some(&index) => unique[index] = posting,
            None => {
                positions.insert(posting.external_id.clone(), unique.len());
                unique.push(posting);
            }
        }
    }

    unique
}
