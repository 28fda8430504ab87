use crate::context::PageContext;

// Additive bonus constants. Tuned against captured recognition batches;
// the relative order (verb > keyword = page > category) matters more than
// the absolute values.
const KEYWORD_BONUS: f32 = 0.15;
const VERB_BONUS: f32 = 0.20;
const PAGE_NAME_BONUS: f32 = 0.15;
const CATEGORY_BONUS: f32 = 0.10;

const INDEX_DECAY: f32 = 0.05;
const SHORT_TEXT_PENALTY: f32 = 0.20;

/// High-value command verbs. Any of these appearing in a candidate is a
/// strong signal the user meant a command rather than noise.
const COMMAND_VERBS: &[&str] = &[
    // click-equivalents
    "clic", "click", "presiona", "pulsa", "toca", "selecciona",
    // navigate-equivalents
    "ir a", "ve a", "abre", "navega", "vuelve", "regresa", "llévame",
    // search-equivalents
    "busca", "buscar", "encuentra", "filtra", "ordena",
    // cart-mutation-equivalents
    "agrega", "agregar", "añade", "añadir", "quita", "elimina", "vacía",
];

const PAGE_NAMES: &[&str] = &[
    "inicio", "catálogo", "catalogo", "carrito", "pago", "perfil",
    "administración", "admin", "prueba", "tienda",
];

const CATEGORY_NOUNS: &[&str] = &[
    "chocolates", "chocolate", "flores", "peluches", "peluche", "globos",
    "vinos", "desayunos",
];

/// Keywords relevant on a given route. Scored candidates mentioning what
/// the current page is about get a boost over generic chatter.
fn route_keywords(ctx: &PageContext) -> &'static [&'static str] {
    if ctx.route_contains("catalog") {
        &["producto", "productos", "precio", "categoría", "filtrar", "ordenar"]
    } else if ctx.route_contains("cart") {
        &["carrito", "cantidad", "eliminar", "vaciar", "total", "pagar"]
    } else if ctx.route_contains("payment") {
        &["pago", "tarjeta", "envío", "dirección", "confirmar"]
    } else if ctx.route_contains("profile") {
        &["perfil", "pedidos", "sesión", "correo", "datos"]
    } else if ctx.route_contains("admin") {
        &["inventario", "producto", "editar", "stock", "administrar"]
    } else if ctx.route_contains("test") {
        &["prueba", "micrófono", "voz", "diagnóstico"]
    } else {
        // home
        &["ofertas", "destacados", "novedades", "quiénes", "contacto"]
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Composite score for one alternative.
///
/// score = confidence + Σ(bonuses) − index·0.05 − shortPenalty
///
/// `text` must already be lowercased. Index is the engine-reported batch
/// position; later positions decay so the engine's own ranking still
/// breaks ties among contextually equal candidates.
pub fn score_alternative(text: &str, index: usize, confidence: f32, ctx: &PageContext) -> f32 {
    let mut score = confidence;

    if contains_any(text, route_keywords(ctx)) {
        score += KEYWORD_BONUS;
    }
    if contains_any(text, COMMAND_VERBS) {
        score += VERB_BONUS;
    }
    if contains_any(text, PAGE_NAMES) {
        score += PAGE_NAME_BONUS;
    }
    if contains_any(text, CATEGORY_NOUNS) {
        score += CATEGORY_BONUS;
    }

    score -= index as f32 * INDEX_DECAY;

    if text.trim().len() < 3 {
        score -= SHORT_TEXT_PENALTY;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_outweighs_plain_confidence() {
        let ctx = PageContext::new("/catalog");
        let noise = score_alternative("qué tal todo", 0, 0.80, &ctx);
        let command = score_alternative("agregar chocolate al carrito", 1, 0.75, &ctx);
        assert!(
            command > noise,
            "command-bearing candidate must outrank slightly more confident noise"
        );
    }

    #[test]
    fn short_text_is_penalized() {
        let ctx = PageContext::new("/");
        let short = score_alternative("eh", 0, 0.9, &ctx);
        let long = score_alternative("muéstrame las ofertas", 0, 0.9, &ctx);
        assert!(long > short);
    }

    #[test]
    fn later_index_decays() {
        let ctx = PageContext::new("/");
        let first = score_alternative("ver ofertas", 0, 0.8, &ctx);
        let third = score_alternative("ver ofertas", 2, 0.8, &ctx);
        assert!((first - third - 2.0 * INDEX_DECAY).abs() < 1e-5);
    }
}
