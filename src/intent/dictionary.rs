use once_cell::sync::Lazy;
use serde_json::json;

use crate::intent::types::ResolvedIntent;

/// One fast-path entry. Params are static key/value pairs some phrases
/// carry (e.g. a category name baked into the phrase itself).
struct DictEntry {
    phrase: &'static str,
    intent: &'static str,
    params: &'static [(&'static str, &'static str)],
}

const fn entry(phrase: &'static str, intent: &'static str) -> DictEntry {
    DictEntry {
        phrase,
        intent,
        params: &[],
    }
}

const fn entry_p(
    phrase: &'static str,
    intent: &'static str,
    params: &'static [(&'static str, &'static str)],
) -> DictEntry {
    DictEntry {
        phrase,
        intent,
        params,
    }
}

/// Phrase → intent table. Declared in reading order per domain; lookup
/// order is longest-phrase-first so short generic verbs never shadow
/// specific phrases ("agregar al carrito" outranks bare "agregar").
static DICTIONARY: Lazy<Vec<DictEntry>> = Lazy::new(|| {
    let mut entries = vec![
        // --- navigation
        entry("ir a inicio", "go_home"),
        entry("página principal", "go_home"),
        entry("ir a la tienda", "go_home"),
        entry("ir a catálogo", "go_catalog"),
        entry("ver el catálogo", "go_catalog"),
        entry("ver productos", "go_catalog"),
        entry("catálogo", "go_catalog"),
        entry("ir a carrito", "go_cart"),
        entry("ver el carrito", "go_cart"),
        entry("ver carrito", "go_cart"),
        entry("mi carrito", "go_cart"),
        entry("proceder al pago", "go_payment"),
        entry("finalizar compra", "go_payment"),
        entry("ir a pagar", "go_payment"),
        entry("pagar", "go_payment"),
        entry("ir a perfil", "go_profile"),
        entry("mi perfil", "go_profile"),
        entry("mi cuenta", "go_profile"),
        entry("panel de administración", "go_admin"),
        entry("ir a administración", "go_admin"),
        entry("administrar tienda", "go_admin"),
        entry("página de prueba", "go_test"),
        entry("ir a prueba", "go_test"),
        entry("vuelve atrás", "go_back"),
        entry("volver", "go_back"),
        entry("regresar", "go_back"),
        entry("atrás", "go_back"),
        entry("adelante", "go_forward"),
        entry("recarga la página", "reload_page"),
        entry("actualizar página", "reload_page"),
        entry("recargar", "reload_page"),
        entry("a quiénes somos", "about"),
        entry("quiénes somos", "about"),
        entry("sobre nosotros", "about"),
        entry("acerca de", "about"),
        entry("información de contacto", "contact"),
        entry("contáctanos", "contact"),
        entry("contacto", "contact"),
        // --- search & filter
        entry("buscar producto", "search_product"),
        entry("abrir búsqueda", "open_search"),
        entry("buscar", "search_product"),
        entry("limpiar búsqueda", "clear_search"),
        entry("borrar búsqueda", "clear_search"),
        entry("filtrar por categoría", "filter_category"),
        entry("filtrar categoría", "filter_category"),
        entry_p("ver chocolates", "filter_category", &[("category", "chocolates")]),
        entry_p("filtrar chocolates", "filter_category", &[("category", "chocolates")]),
        entry_p("ver flores", "filter_category", &[("category", "flores")]),
        entry_p("filtrar flores", "filter_category", &[("category", "flores")]),
        entry_p("ver peluches", "filter_category", &[("category", "peluches")]),
        entry_p("filtrar peluches", "filter_category", &[("category", "peluches")]),
        entry_p("ver globos", "filter_category", &[("category", "globos")]),
        entry_p("filtrar globos", "filter_category", &[("category", "globos")]),
        entry("quitar filtros", "clear_filters"),
        entry("limpiar filtros", "clear_filters"),
        entry("qué categorías hay", "read_categories"),
        entry("leer categorías", "read_categories"),
        entry("más barato primero", "sort_price_asc"),
        entry("ordenar por precio", "sort_price_asc"),
        entry("precio ascendente", "sort_price_asc"),
        entry("más caro primero", "sort_price_desc"),
        entry("precio descendente", "sort_price_desc"),
        entry("ordenar por nombre", "sort_name"),
        // --- cart mutations
        entry("agregar al carrito", "addToCart"),
        entry("añadir al carrito", "addToCart"),
        entry("agrégalo al carrito", "addToCart"),
        entry("eliminar del carrito", "remove_from_cart"),
        entry("quitar del carrito", "remove_from_cart"),
        entry("aumenta la cantidad", "increase_quantity"),
        entry("aumentar cantidad", "increase_quantity"),
        entry("más cantidad", "increase_quantity"),
        entry("reduce la cantidad", "decrease_quantity"),
        entry("disminuir cantidad", "decrease_quantity"),
        entry("menos cantidad", "decrease_quantity"),
        entry("cambiar cantidad", "update_quantity"),
        entry("vaciar el carrito", "clear_cart"),
        entry("vacía el carrito", "clear_cart"),
        entry("vaciar carrito", "clear_cart"),
        entry("limpiar carrito", "clear_cart"),
        // --- reading / summaries
        entry("lee la página", "read_page"),
        entry("leer página", "read_page"),
        entry("qué hay aquí", "read_page"),
        entry("qué hay en el carrito", "read_cart"),
        entry("lee el carrito", "read_cart"),
        entry("leer carrito", "read_cart"),
        entry("cuánto es el total", "read_cart_total"),
        entry("cuánto llevo", "read_cart_total"),
        entry("leer total", "read_cart_total"),
        entry("cuántos productos llevo", "read_cart_count"),
        entry("cuántos artículos", "read_cart_count"),
        entry("describe el producto", "read_product"),
        entry("leer producto", "read_product"),
        entry("cuánto cuesta", "read_price"),
        entry("leer precio", "read_price"),
        entry("deja de hablar", "silence"),
        entry("detener lectura", "silence"),
        entry("silencio", "silence"),
        entry("cállate", "silence"),
        entry("repítelo", "repeat"),
        entry("repite", "repeat"),
        entry("otra vez", "repeat"),
        // --- list navigation
        entry("siguiente producto", "next_item"),
        entry("el siguiente", "next_item"),
        entry("siguiente", "next_item"),
        entry("producto anterior", "previous_item"),
        entry("el anterior", "previous_item"),
        entry("anterior", "previous_item"),
        entry("primer producto", "first_item"),
        entry("el primero", "first_item"),
        entry("último producto", "last_item"),
        entry("el último", "last_item"),
        entry("abre este producto", "open_item"),
        entry("abrir producto", "open_item"),
        entry("ver detalle", "open_item"),
        // --- scroll
        entry("desplazar abajo", "scroll_down"),
        entry("más abajo", "scroll_down"),
        entry("bajar", "scroll_down"),
        entry("baja", "scroll_down"),
        entry("desplazar arriba", "scroll_up"),
        entry("más arriba", "scroll_up"),
        entry("subir", "scroll_up"),
        entry("sube", "scroll_up"),
        entry("al inicio de la página", "scroll_top"),
        entry("ir al principio", "scroll_top"),
        entry("al final de la página", "scroll_bottom"),
        entry("ir al final", "scroll_bottom"),
        // --- forms
        entry("limpia el campo", "clear_field"),
        entry("borrar campo", "clear_field"),
        entry("enviar formulario", "submit_form"),
        entry("confirmar pedido", "submit_form"),
        entry("siguiente campo", "next_field"),
        // --- modals
        entry("cierra el diálogo", "close_modal"),
        entry("cerrar ventana", "close_modal"),
        entry("cerrar", "close_modal"),
        entry("sí confirmo", "confirm_dialog"),
        entry("confirmar", "confirm_dialog"),
        entry("acepto", "confirm_dialog"),
        entry("cancelar", "cancel_dialog"),
        // --- system / help
        entry("qué puedo decir", "help"),
        entry("lista de comandos", "help"),
        entry("comandos", "help"),
        entry("ayuda", "help"),
        entry("en qué página estoy", "where_am_i"),
        entry("dónde estoy", "where_am_i"),
        entry("quién soy", "read_user"),
        entry("mi información", "read_user"),
        // --- auth
        entry("iniciar sesión", "login"),
        entry("acceder", "login"),
        entry("entrar", "login"),
        entry("cerrar sesión", "logout"),
        entry("salir de mi cuenta", "logout"),
        entry("crear cuenta", "register"),
        entry("registrarme", "register"),
        entry("registrarse", "register"),
        // --- home
        entry("muéstrame las ofertas", "show_offers"),
        entry("ver ofertas", "show_offers"),
        entry("ofertas", "show_offers"),
        entry("productos destacados", "show_featured"),
        entry("ver destacados", "show_featured"),
        // --- test page
        entry("iniciar prueba de voz", "run_voice_test"),
        entry("probar micrófono", "run_voice_test"),
        entry("probar voz", "run_voice_test"),
        entry("estado del micrófono", "mic_status"),
        // --- profile
        entry("leer mi perfil", "read_profile"),
        entry("mis datos", "read_profile"),
        entry("historial de pedidos", "read_orders"),
        entry("leer mis pedidos", "read_orders"),
        entry("mis pedidos", "read_orders"),
        entry("modificar mis datos", "edit_profile"),
        entry("editar perfil", "edit_profile"),
        // --- admin
        entry("agregar producto", "admin_add_product"),
        entry("nuevo producto", "admin_add_product"),
        entry("crear producto", "admin_add_product"),
        entry("editar producto", "admin_edit_product"),
        entry("eliminar producto", "admin_delete_product"),
        entry("borrar producto", "admin_delete_product"),
        entry("estado del inventario", "read_inventory"),
        entry("leer inventario", "read_inventory"),
    ];

    // Longest phrase first; original declaration order breaks length ties.
    entries.sort_by(|a, b| b.phrase.chars().count().cmp(&a.phrase.chars().count()));
    entries
});

/// Verbs that, together with the word "carrito", force `addToCart` even
/// when no dictionary phrase matches.
const ADD_VERBS: &[&str] = &[
    "agregar", "agrega", "agregue", "añadir", "añade", "pon", "mete", "suma",
];

const EXACT_CONFIDENCE: f32 = 1.0;
const OVERRIDE_CONFIDENCE: f32 = 0.85;
const SUBSTRING_CONFIDENCE: f32 = 0.9;

fn build(entry: &DictEntry, confidence: f32) -> ResolvedIntent {
    let mut intent = ResolvedIntent::direct(entry.intent, confidence);
    for (k, v) in entry.params {
        intent = intent.with_param(k, json!(v));
    }
    intent
}

/// Shortest phrase registered for an intent, for spoken help examples.
pub fn example_phrase(intent: &str) -> Option<&'static str> {
    DICTIONARY
        .iter()
        .filter(|e| e.intent == intent)
        .map(|e| e.phrase)
        .min_by_key(|p| p.chars().count())
}

/// Fast-path lookup. Exact match, then the verb+noun override, then the
/// longest-phrase substring scan. Returns `None` when nothing fires.
pub fn lookup(transcript: &str) -> Option<ResolvedIntent> {
    let text = transcript.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Some(hit) = DICTIONARY.iter().find(|e| e.phrase == text) {
        return Some(build(hit, EXACT_CONFIDENCE));
    }

    // Verb+noun heuristic outranks dictionary ordering entirely.
    let has_add_verb = ADD_VERBS
        .iter()
        .any(|v| text.split_whitespace().any(|w| w == *v));
    if has_add_verb && text.contains("carrito") {
        return Some(ResolvedIntent::direct("addToCart", OVERRIDE_CONFIDENCE));
    }

    DICTIONARY
        .iter()
        .find(|e| text.contains(e.phrase))
        .map(|hit| build(hit, SUBSTRING_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let hit = lookup("ayuda").unwrap();
        assert_eq!(hit.intent, "help");
        assert_eq!(hit.confidence, EXACT_CONFIDENCE);
    }

    #[test]
    fn longest_phrase_outranks_short_verb() {
        // "agregar al carrito" and "pagar" are both substrings; the longer
        // cart phrase must win.
        let hit = lookup("agregar chocolate al carrito para pagar después").unwrap();
        assert_eq!(hit.intent, "addToCart");
    }

    #[test]
    fn verb_noun_override_fires_without_phrase_match() {
        let hit = lookup("agregue ya el carrito por favor").unwrap();
        assert_eq!(hit.intent, "addToCart");
        assert_eq!(hit.confidence, OVERRIDE_CONFIDENCE);
    }

    #[test]
    fn category_phrases_carry_params() {
        let hit = lookup("filtrar chocolates").unwrap();
        assert_eq!(hit.intent, "filter_category");
        assert_eq!(hit.param_str("category"), Some("chocolates"));
    }

    #[test]
    fn logout_is_not_shadowed_by_close() {
        // "cerrar sesión" contains "cerrar"; the longer phrase must win.
        let hit = lookup("por favor cerrar sesión ahora").unwrap();
        assert_eq!(hit.intent, "logout");
    }

    #[test]
    fn unknown_text_yields_none() {
        assert!(lookup("el clima está agradable hoy").is_none());
        assert!(lookup("").is_none());
    }
}
