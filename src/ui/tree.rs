use anyhow::{bail, Result};
use async_trait::async_trait;

/// The rendered interface tree, queryable by selector string.
///
/// Absence of a match is a normal outcome, not an error: `find` returns
/// `None` and callers fall through to their next probe or apology.
#[async_trait]
pub trait UiTree: Send + Sync {
    /// Zero-or-one element for a single selector (no comma chains here;
    /// `probe::first_match` owns the fallback discipline).
    async fn find(&self, selector: &str) -> Option<Box<dyn UiElement>>;

    /// Visible text of the whole page, for read-aloud fallbacks when the
    /// state store is absent.
    async fn page_text(&self) -> String {
        String::new()
    }

    /// Scroll the viewport by a pixel delta. Hosts that cannot scroll
    /// keep the default, whose message feeds error classification.
    async fn scroll_by(&self, _dy: i32) -> Result<()> {
        bail!("esta página no se puede desplazar")
    }

    async fn history_back(&self) -> Result<()> {
        bail!("no puedo navegar hacia atrás aquí")
    }

    async fn history_forward(&self) -> Result<()> {
        bail!("no puedo navegar hacia adelante aquí")
    }

    async fn reload(&self) -> Result<()> {
        bail!("no puedo navegar para recargar aquí")
    }
}

/// One interactive element. All mutations are async and may fail with a
/// collaborator error the bridge turns into spoken feedback.
#[async_trait]
pub trait UiElement: Send + Sync {
    fn text(&self) -> String;

    async fn click(&self) -> Result<()>;
    async fn set_value(&self, text: &str) -> Result<()>;
    async fn focus(&self) -> Result<()>;
    async fn scroll_into_view(&self) -> Result<()>;
}
