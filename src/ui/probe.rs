use tracing::debug;

use crate::ui::tree::{UiElement, UiTree};

/// Try each candidate of a comma-joined fallback chain left-to-right;
/// first match wins. This exact discipline is what the selector tables
/// are written against.
pub async fn first_match(tree: &dyn UiTree, chain: &str) -> Option<Box<dyn UiElement>> {
    for candidate in chain.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(element) = tree.find(candidate).await {
            debug!(selector = candidate, "probe matched");
            return Some(element);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct OnlySecond;

    struct Stub(&'static str);

    #[async_trait]
    impl UiElement for Stub {
        fn text(&self) -> String {
            self.0.to_string()
        }
        async fn click(&self) -> Result<()> {
            Ok(())
        }
        async fn set_value(&self, _text: &str) -> Result<()> {
            Ok(())
        }
        async fn focus(&self) -> Result<()> {
            Ok(())
        }
        async fn scroll_into_view(&self) -> Result<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl UiTree for OnlySecond {
        async fn find(&self, selector: &str) -> Option<Box<dyn UiElement>> {
            if selector == ".second" {
                Some(Box::new(Stub("second")))
            } else {
                None
            }
        }
    }

    #[tokio::test]
    async fn chain_tries_candidates_in_order() {
        let tree = OnlySecond;
        let hit = first_match(&tree, ".first, .second, .third").await;
        assert_eq!(hit.unwrap().text(), "second");
    }

    #[tokio::test]
    async fn no_candidate_matching_is_not_an_error() {
        let tree = OnlySecond;
        assert!(first_match(&tree, ".first, .third").await.is_none());
        assert!(first_match(&tree, "").await.is_none());
    }
}
