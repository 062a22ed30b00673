//! Tier-based access decisions for movie detail views.
//!
//! Visibility is solely a function of (movie tier, viewer tier, viewer
//! authentication state) -- never of relation data. The check applies at
//! single-record retrieval granularity; collection listing is deliberately
//! left ungated (see `DESIGN.md`).

use crate::error::CoreError;
use crate::tier::Tier;

/// What the policy needs to know about the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerContext {
    pub authenticated: bool,
    pub tier: Tier,
}

impl ViewerContext {
    /// An unauthenticated caller. The tier carried here is irrelevant:
    /// rule 1 denies before tiers are compared.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            tier: Tier::Simple,
        }
    }

    pub fn authenticated(tier: Tier) -> Self {
        Self {
            authenticated: true,
            tier,
        }
    }
}

/// Decide whether `viewer` may see the detail view of a movie with
/// tier `movie_tier`. Rules, evaluated in order:
///
/// 1. an unauthenticated viewer is denied unconditionally;
/// 2. a `simple` movie is visible to every authenticated viewer;
/// 3. a `pro` movie is visible only to `pro` viewers.
pub fn can_access(viewer: ViewerContext, movie_tier: Tier) -> bool {
    if !viewer.authenticated {
        return false;
    }
    match movie_tier {
        Tier::Simple => true,
        Tier::Pro => viewer.tier == Tier::Pro,
    }
}

/// Like [`can_access`], but maps denial to the error the HTTP layer
/// distinguishes: `Unauthorized` when the caller is anonymous, `Forbidden`
/// when authenticated but under-tiered. Neither is `NotFound` -- the caller
/// has already resolved the movie's identity.
pub fn authorize_detail(viewer: ViewerContext, movie_tier: Tier) -> Result<(), CoreError> {
    if !viewer.authenticated {
        return Err(CoreError::Unauthorized(
            "Authentication required to view movie details".into(),
        ));
    }
    if can_access(viewer, movie_tier) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "A pro subscription is required to view this movie".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_unauthenticated_denied_for_every_tier() {
        let anon = ViewerContext::anonymous();
        assert!(!can_access(anon, Tier::Simple));
        assert!(!can_access(anon, Tier::Pro));
    }

    #[test]
    fn test_simple_movie_visible_to_any_authenticated_viewer() {
        assert!(can_access(
            ViewerContext::authenticated(Tier::Simple),
            Tier::Simple
        ));
        assert!(can_access(
            ViewerContext::authenticated(Tier::Pro),
            Tier::Simple
        ));
    }

    #[test]
    fn test_pro_movie_gated_on_viewer_tier() {
        assert!(!can_access(
            ViewerContext::authenticated(Tier::Simple),
            Tier::Pro
        ));
        assert!(can_access(
            ViewerContext::authenticated(Tier::Pro),
            Tier::Pro
        ));
    }

    #[test]
    fn test_authorize_maps_anonymous_to_unauthorized() {
        let result = authorize_detail(ViewerContext::anonymous(), Tier::Simple);
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn test_authorize_maps_under_tier_to_forbidden() {
        let result = authorize_detail(ViewerContext::authenticated(Tier::Simple), Tier::Pro);
        assert_matches!(result, Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn test_authorize_allows_matching_tier() {
        assert!(authorize_detail(ViewerContext::authenticated(Tier::Pro), Tier::Pro).is_ok());
        assert!(authorize_detail(ViewerContext::authenticated(Tier::Simple), Tier::Simple).is_ok());
    }
}
