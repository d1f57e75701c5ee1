//! Identity resolver for truncated identifiers.
//!
//! Human-facing URLs embed a shortened id prefix plus a slugified name; this
//! module reconstructs the canonical UUID by prefix-matching against the
//! full collection. Pure lookup, no side effects.

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::error::{CollabError, CollabResult};

use crate::context::CollabContext;

/// Resolve a possibly-truncated identifier against a collection of
/// canonical ids.
///
/// A candidate at least `threshold` characters long is assumed canonical and
/// returned unchanged. Shorter candidates must prefix-match exactly one
/// entry (case-insensitive); zero or multiple matches are `NotFound`, since
/// the system does not disambiguate prefix collisions.
pub fn resolve_id<'a, I>(candidate: &str, threshold: usize, all_ids: I) -> CollabResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if candidate.len() >= threshold {
        return Ok(candidate.to_string());
    }

    let needle = candidate.to_lowercase();
    let mut matched: Option<&str> = None;

    for id in all_ids {
        if id.to_lowercase().starts_with(&needle) {
            if matched.is_some() {
                return Err(CollabError::not_found("Identifier prefix is ambiguous"));
            }
            matched = Some(id);
        }
    }

    matched
        .map(|id| id.to_string())
        .ok_or_else(|| CollabError::not_found("No entity matches this identifier"))
}

/// Resolve a truncated list identifier against all known lists.
pub async fn resolve_list_id<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    candidate: &str,
) -> CollabResult<String> {
    if candidate.len() >= ctx.config.canonical_id_length {
        return Ok(candidate.to_string());
    }

    let ids = ctx.database.list_list_ids().await?;
    resolve_id(
        candidate,
        ctx.config.canonical_id_length,
        ids.iter().map(String::as_str),
    )
}
