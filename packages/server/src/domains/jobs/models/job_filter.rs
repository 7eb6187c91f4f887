use sqlx::{Postgres, QueryBuilder};

/// A single condition on `job_postings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobPredicate {
    /// `active` equals the given flag.
    Active(bool),
    /// The tag list contains this exact tag.
    HasTag(String),
    /// Case-insensitive substring match on title or company.
    TitleOrCompanyContains(String),
}

/// Conjunction of predicates used by both the page and the count query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilter {
    predicates: Vec<JobPredicate>,
}

impl JobFilter {
    /// Postings a reader is allowed to see.
    pub fn visible() -> Self {
        JobFilter {
            predicates: vec![JobPredicate::Active(true)],
        }
    }

    /// Restrict to a tag. Empty tags are ignored.
    pub fn with_tag(mut self, tag: Option<&str>) -> Self {
        if let Some(tag) = tag.filter(|t| !t.is_empty()) {
            self.predicates.push(JobPredicate::HasTag(tag.to_string()));
        }
        self
    }

    /// Restrict to a title/company search. Blank searches are ignored.
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            self.predicates
                .push(JobPredicate::TitleOrCompanyContains(search.to_string()));
        }
        self
    }

    pub fn predicates(&self) -> &[JobPredicate] {
        &self.predicates
    }

    /// Append ` WHERE …` to `qb`, binding every value.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                JobPredicate::Active(active) => {
                    qb.push("active = ").push_bind(*active);
                }
                JobPredicate::HasTag(tag) => {
                    qb.push_bind(tag.clone()).push(" = ANY(tags)");
                }
                JobPredicate::TitleOrCompanyContains(text) => {
                    let pattern = like_pattern(text);
                    qb.push("(title ILIKE ")
                        .push_bind(pattern.clone())
                        .push(" OR company ILIKE ")
                        .push_bind(pattern)
                        .push(")");
                }
            }
        }
    }
}

/// `%text%` with LIKE metacharacters escaped so the text matches literally.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
