use serde_json::json;

use vocera::context::PageContext;
use vocera::intent::types::{ResolvedIntent, TargetMethod};
use vocera::selector;

#[test]
fn cart_remove_button_chain_is_preserved() {
    let ctx = PageContext::new("/cart");
    let chain = selector::resolve("cart.eliminar", &ctx).expect("cart.eliminar must resolve");
    assert!(chain.contains(".carrito-item .btn-eliminar"), "got {chain}");
}

#[test]
fn missing_keys_yield_none_not_panics() {
    let ctx = PageContext::new("/cart");
    assert_eq!(selector::resolve("cart.noexiste", &ctx), None);
    assert_eq!(selector::resolve("noexiste.eliminar", &ctx), None);
    assert_eq!(selector::resolve("cart.eliminar.extra", &ctx), None);
}

#[test]
fn page_tables_follow_the_route() {
    let cart = PageContext::new("/cart");
    let catalog = PageContext::new("/catalog/flores");

    assert!(selector::resolve("cart.vaciar", &cart).is_some());
    assert_eq!(selector::resolve("cart.vaciar", &catalog), None);
    assert!(selector::resolve("catalog.filtro.categoria", &catalog).is_some());
}

#[test]
fn intent_method_picks_the_generator() {
    let ctx = PageContext::new("/catalog");

    let by_index = {
        let mut i = ResolvedIntent::direct("select_item", 0.9);
        i.method = TargetMethod::ByIndex;
        i.with_param("index", json!(4))
    };
    let chain = selector::for_intent(&by_index, &ctx).unwrap();
    assert!(chain.contains(":nth-of-type(5)"));

    let by_name = {
        let mut i = ResolvedIntent::direct("addToCart", 0.9);
        i.method = TargetMethod::ByName;
        i.target = Some("peluche gigante".to_string());
        i
    };
    let chain = selector::for_intent(&by_name, &ctx).unwrap();
    assert!(chain.contains("[data-name*=\"peluche gigante\"]"));

    let direct = {
        let mut i = ResolvedIntent::direct("clear_cart", 0.9);
        i.target = Some("cart.vaciar".to_string());
        i
    };
    // Direct targets are semantic keys, so the route matters.
    assert_eq!(selector::for_intent(&direct, &ctx), None);
    let on_cart = PageContext::new("/cart");
    assert!(selector::for_intent(&direct, &on_cart).is_some());
}
