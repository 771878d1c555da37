use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.unwrap_or(configured)
}

/// Cut a listing to the effective limit for this invocation.
#[must_use]
pub fn limited<T>(mut items: Vec<T>, ctx: &AppContext, flags: &GlobalFlags) -> Vec<T> {
    items.truncate(cap(effective_limit(flags.limit, ctx.config.general.default_limit)));
    items
}

fn cap(limit: u32) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use sift_config::SiftConfig;

    use super::{cap, effective_limit, limited};
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: true,
            verbose: false,
            db: None,
        }
    }

    #[tokio::test]
    async fn listings_follow_flag_then_configured_default() {
        let mut config = SiftConfig::default();
        config.store.path = ":memory:".to_string();
        config.general.default_limit = 2;
        let ctx = AppContext::init(config).await.unwrap();

        let rows: Vec<u32> = (1..=5).collect();
        assert_eq!(limited(rows.clone(), &ctx, &flags(None)), [1, 2]);
        assert_eq!(limited(rows.clone(), &ctx, &flags(Some(4))), [1, 2, 3, 4]);
        assert_eq!(limited(rows, &ctx, &flags(Some(10))).len(), 5);
    }

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 50), 5);
    }

    #[test]
    fn configured_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn truncation_length_follows_limit() {
        let mut items = vec![1, 2, 3, 4];
        items.truncate(cap(effective_limit(Some(2), 50)));
        assert_eq!(items, [1, 2]);
        items.truncate(cap(effective_limit(None, 50)));
        assert_eq!(items, [1, 2]);
    }
}
