use tracing::warn;

use crate::bridge::Bridge;
use crate::context::PageContext;
use crate::selector;
use crate::selector::generators;
use crate::store::CartLine;
use crate::ui::probe::first_match;

/// Add-button chain for a product located by visible name: each
/// name-candidate scoped down to its add control, then the page-table
/// fallback.
fn add_button_chain(name: &str, ctx: &PageContext) -> String {
    let mut candidates: Vec<String> = generators::by_name(name)
        .split(',')
        .map(|c| format!("{} .add-to-cart, {} .btn-agregar", c.trim(), c.trim()))
        .collect();
    if let Some(fallback) = selector::resolve("catalog.agregar", ctx) {
        candidates.push(fallback);
    }
    candidates.join(", ")
}

fn nth_item_chain(index: usize, suffix: &str) -> String {
    let nth = index + 1;
    format!(
        ".cart-item:nth-of-type({nth}){suffix}, .carrito-item:nth-of-type({nth}){suffix}"
    )
}

impl Bridge<'_> {
    /// Locate the product by name and trigger its add control `quantity`
    /// times. Confirms naming the item; apologizes and returns false when
    /// nothing matched.
    pub async fn add_to_cart_by_name(
        &self,
        ctx: &PageContext,
        name: &str,
        quantity: u32,
    ) -> bool {
        let chain = add_button_chain(name, ctx);
        let Some(button) = first_match(self.ui, &chain).await else {
            self.apologize(&format!("Lo siento, no encontré {name} para agregarlo."))
                .await;
            return false;
        };

        let quantity = quantity.max(1);
        for _ in 0..quantity {
            if let Err(e) = button.click().await {
                warn!(error = %e, product = name, "add-to-cart click failed");
                self.apologize(&format!("Lo siento, no pude agregar {name} al carrito."))
                    .await;
                return false;
            }
        }

        if quantity == 1 {
            self.confirm(&format!("Agregué {name} al carrito.")).await;
        } else {
            self.confirm(&format!("Agregué {quantity} unidades de {name} al carrito."))
                .await;
        }
        true
    }

    /// Remove the i-th cart entry (zero-based). Names the removed item in
    /// the confirmation, preferring the store over visible text.
    pub async fn remove_from_cart_by_index(&self, _ctx: &PageContext, index: usize) -> bool {
        let name = self.cart_line_name(index).await;

        let chain = format!(
            "{}, {}",
            nth_item_chain(index, " .remove-btn"),
            nth_item_chain(index, " .btn-eliminar"),
        );
        let Some(button) = first_match(self.ui, &chain).await else {
            self.apologize("Lo siento, no encontré ese artículo en el carrito.")
                .await;
            return false;
        };

        if let Err(e) = button.click().await {
            warn!(error = %e, index, "remove click failed");
            self.apologize("Lo siento, no pude eliminar ese artículo.").await;
            return false;
        }

        match name {
            Some(name) => self.confirm(&format!("Eliminé {name} del carrito.")).await,
            None => self.confirm("Eliminé el artículo del carrito.").await,
        }
        true
    }

    pub async fn update_cart_quantity(
        &self,
        _ctx: &PageContext,
        index: usize,
        quantity: u32,
    ) -> bool {
        let chain = format!(
            "{}, {}",
            nth_item_chain(index, " input.qty"),
            nth_item_chain(index, " .cantidad"),
        );
        let Some(field) = first_match(self.ui, &chain).await else {
            self.apologize("Lo siento, no encontré ese artículo en el carrito.")
                .await;
            return false;
        };

        if let Err(e) = field.set_value(&quantity.to_string()).await {
            warn!(error = %e, index, quantity, "quantity update failed");
            self.apologize("Lo siento, no pude cambiar la cantidad.").await;
            return false;
        }

        let name = self.cart_line_name(index).await;
        match name {
            Some(name) => {
                self.confirm(&format!("Cambié la cantidad de {name} a {quantity}."))
                    .await
            }
            None => self.confirm(&format!("Cambié la cantidad a {quantity}.")).await,
        }
        true
    }

    pub async fn clear_cart(&self, ctx: &PageContext) -> bool {
        let Some(chain) = selector::resolve("cart.vaciar", ctx) else {
            self.apologize("Lo siento, aquí no puedo vaciar el carrito.").await;
            return false;
        };
        let Some(button) = first_match(self.ui, &chain).await else {
            self.apologize("Lo siento, no encontré el botón para vaciar el carrito.")
                .await;
            return false;
        };
        if let Err(e) = button.click().await {
            warn!(error = %e, "clear cart click failed");
            self.apologize("Lo siento, no pude vaciar el carrito.").await;
            return false;
        }
        self.confirm("Vacié el carrito.").await;
        true
    }

    /// Structured summary: one utterance per line item, then the total.
    /// Store preferred; visible cart text as fallback.
    pub async fn read_cart(&self, ctx: &PageContext) -> bool {
        if let Some(lines) = self.cart_lines() {
            if lines.is_empty() {
                self.announce("Tu carrito está vacío.").await;
                return true;
            }
            self.announce(&format!("Tu carrito tiene {} artículos.", count(&lines)))
                .await;
            for line in &lines {
                self.pace().await;
                self.announce(&format!(
                    "{} de {}, ${:.2}.",
                    line.quantity,
                    line.name,
                    line.subtotal()
                ))
                .await;
            }
            self.pace().await;
            let total: f64 = lines.iter().map(CartLine::subtotal).sum();
            self.announce(&format!("Total: ${total:.2}.")).await;
            return true;
        }

        // No store: read whatever the cart region shows.
        if let Some(chain) = selector::resolve("cart.items", ctx) {
            if let Some(region) = first_match(self.ui, &chain).await {
                let text = region.text();
                if !text.trim().is_empty() {
                    self.announce(&format!("El carrito muestra: {text}.")).await;
                    return true;
                }
            }
        }

        self.apologize("Lo siento, no pude leer el carrito.").await;
        false
    }

    pub async fn read_cart_total(&self, ctx: &PageContext) -> Option<f64> {
        if let Some(lines) = self.cart_lines() {
            let total: f64 = lines.iter().map(CartLine::subtotal).sum();
            self.announce(&format!("El total es ${total:.2}.")).await;
            return Some(total);
        }

        if let Some(chain) = selector::resolve("cart.total", ctx) {
            if let Some(element) = first_match(self.ui, &chain).await {
                let text = element.text();
                // "$450.00" and friends; anything unparseable is a miss.
                let digits: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                if let Ok(total) = digits.parse::<f64>() {
                    self.announce(&format!("El total es ${total:.2}.")).await;
                    return Some(total);
                }
            }
        }

        self.apologize("Lo siento, no pude leer el total.").await;
        None
    }

    pub async fn read_cart_item_count(&self, ctx: &PageContext) -> Option<u32> {
        if let Some(lines) = self.cart_lines() {
            let n = count(&lines);
            let word = if n == 1 { "artículo" } else { "artículos" };
            self.announce(&format!("Llevas {n} {word} en el carrito.")).await;
            return Some(n);
        }

        if let Some(chain) = selector::resolve("header.nav.cart_count", ctx) {
            if let Some(element) = first_match(self.ui, &chain).await {
                let text = element.text();
                if let Ok(n) = text.trim().parse::<u32>() {
                    let word = if n == 1 { "artículo" } else { "artículos" };
                    self.announce(&format!("Llevas {n} {word} en el carrito.")).await;
                    return Some(n);
                }
            }
        }

        self.apologize("Lo siento, no pude contar el carrito.").await;
        None
    }

    fn cart_lines(&self) -> Option<Vec<CartLine>> {
        self.store.map(|s| s.snapshot().cart)
    }

    async fn cart_line_name(&self, index: usize) -> Option<String> {
        if let Some(lines) = self.cart_lines() {
            return lines.get(index).map(|l| l.name.clone());
        }
        let chain = nth_item_chain(index, " .name");
        let element = first_match(self.ui, &chain).await?;
        let text = element.text();
        (!text.trim().is_empty()).then(|| text.trim().to_string())
    }
}

fn count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}
