use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::ui::tree::{UiElement, UiTree};

/// Console-backed interface tree for the demo driver: every selector
/// matches and every action is logged instead of executed.
#[derive(Default)]
pub struct EchoTree;

struct EchoElement {
    selector: String,
}

#[async_trait]
impl UiTree for EchoTree {
    async fn find(&self, selector: &str) -> Option<Box<dyn UiElement>> {
        Some(Box::new(EchoElement {
            selector: selector.to_string(),
        }))
    }

    async fn page_text(&self) -> String {
        "tienda de regalos".to_string()
    }

    async fn scroll_by(&self, dy: i32) -> Result<()> {
        info!(dy, "scroll_by");
        Ok(())
    }

    async fn history_back(&self) -> Result<()> {
        info!("history_back");
        Ok(())
    }

    async fn history_forward(&self) -> Result<()> {
        info!("history_forward");
        Ok(())
    }

    async fn reload(&self) -> Result<()> {
        info!("reload");
        Ok(())
    }
}

#[async_trait]
impl UiElement for EchoElement {
    fn text(&self) -> String {
        self.selector.clone()
    }

    async fn click(&self) -> Result<()> {
        info!(selector = %self.selector, "click");
        Ok(())
    }

    async fn set_value(&self, text: &str) -> Result<()> {
        info!(selector = %self.selector, value = text, "set_value");
        Ok(())
    }

    async fn focus(&self) -> Result<()> {
        info!(selector = %self.selector, "focus");
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        info!(selector = %self.selector, "scroll_into_view");
        Ok(())
    }
}
