//! Wire DTOs for the analysis backend's REST API.
//!
//! DESIGN
//! ======
//! Analysis records are a backend contract, not a client invariant, so every
//! field past `id`/`repoUrl` is optional or defaulted (explicit `null`
//! included) and unknown fields are ignored. A half-finished analysis must still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Explicit `null` reads like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Body returned by `POST /analyze/repo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Lifecycle of a backend analysis job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    InProgress,
    Completed,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One analysis job and (once completed) its result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AnalysisStatus,
    #[serde(default)]
    pub result: Option<AnalysisResult>,
}

/// Analysis payload produced by the backend worker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub ai_summary: Option<AiSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: Vec<ContributorStatistic>,
    /// Pre-computed contributor count, when the backend supplies one.
    #[serde(default)]
    pub contributors: Option<u64>,
    /// Pre-computed commit count, when the backend supplies one.
    #[serde(default)]
    pub commits: Option<u64>,
    #[serde(rename = "analyzedAt", default)]
    pub analyzed_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributors: Vec<ContributorImpact>,
    #[serde(default)]
    pub overall_summary: Option<String>,
}

/// AI-written assessment of one contributor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributorImpact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub impact_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contribution_percentage: f64,
}

/// Raw commit statistics for one author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorStatistic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines_changed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_commits: u64,
}

impl ContributorStatistic {
    /// Rounded average, zero when there are no commits.
    pub fn avg_lines_per_commit(&self) -> u64 {
        if self.total_commits == 0 {
            return 0;
        }
        (self.lines_changed + self.total_commits / 2) / self.total_commits
    }
}

const GITHUB_PREFIX: &str = "https://github.com/";

/// `owner/repo` for GitHub URLs; anything else is returned unchanged.
pub fn repo_name(repo_url: &str) -> &str {
    repo_url.strip_prefix(GITHUB_PREFIX).unwrap_or(repo_url)
}

impl AnalysisRecord {
    pub fn repo_name(&self) -> &str {
        repo_name(&self.repo_url)
    }

    /// Contributor count for list views: explicit field, else derived.
    pub fn contributor_count(&self) -> Option<u64> {
        let result = self.result.as_ref()?;
        result.contributors.or_else(|| {
            let from_summary = result.ai_summary.as_ref().map_or(0, |s| s.contributors.len());
            let count = from_summary.max(result.statistics.len());
            u64::try_from(count).ok().filter(|c| *c > 0)
        })
    }

    /// Commit count for list views: explicit field, else derived.
    pub fn commit_count(&self) -> Option<u64> {
        let result = self.result.as_ref()?;
        result
            .commits
            .or_else(|| (!result.statistics.is_empty()).then(|| result.total_commits()))
    }

    pub fn analyzed_at(&self) -> Option<&str> {
        self.result.as_ref()?.analyzed_at.as_deref()
    }
}

impl AnalysisResult {
    pub fn total_commits(&self) -> u64 {
        self.statistics.iter().map(|s| s.total_commits).sum()
    }

    pub fn total_lines_changed(&self) -> u64 {
        self.statistics.iter().map(|s| s.lines_changed).sum()
    }

    pub fn statistics_for(&self, author: &str) -> Option<&ContributorStatistic> {
        self.statistics.iter().find(|s| s.author == author)
    }

    pub fn contributors(&self) -> &[ContributorImpact] {
        self.ai_summary
            .as_ref()
            .map(|s| s.contributors.as_slice())
            .unwrap_or_default()
    }

    pub fn overall_summary(&self) -> &str {
        self.ai_summary
            .as_ref()
            .and_then(|s| s.overall_summary.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("No summary available")
    }
}
