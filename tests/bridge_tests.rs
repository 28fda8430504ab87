mod common;

use common::{FakeTree, RecordingVoice};
use vocera::bridge::Bridge;
use vocera::context::{PageContext, UserRole};
use vocera::store::{AuthState, CartLine, MemoryStore, StoreSnapshot};

fn stocked_store() -> MemoryStore {
    MemoryStore::new(StoreSnapshot {
        cart: vec![
            CartLine {
                name: "chocolates surtidos".to_string(),
                quantity: 2,
                unit_price: 150.0,
            },
            CartLine {
                name: "ramo de flores".to_string(),
                quantity: 1,
                unit_price: 300.0,
            },
        ],
        auth: AuthState {
            authenticated: true,
            role: UserRole::Customer,
            display_name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
        },
    })
}

#[tokio::test]
async fn add_by_name_clicks_the_matching_card() {
    let tree = FakeTree::with(&[("[data-name*=\"flores\"] .add-to-cart", "Agregar")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/catalog");

    let added = bridge.add_to_cart_by_name(&page, "flores", 1).await;
    assert!(added);
    assert_eq!(tree.clicks().len(), 1);
    let spoken = voice.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].contains("flores"), "confirmation names the item: {spoken:?}");
}

#[tokio::test]
async fn add_by_name_repeats_the_click_per_unit() {
    let tree = FakeTree::with(&[("[data-name*=\"globos\"] .add-to-cart", "Agregar")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/catalog");

    let added = bridge.add_to_cart_by_name(&page, "globos", 3).await;
    assert!(added);
    assert_eq!(tree.clicks().len(), 3, "one click per unit");
    assert!(voice.spoken()[0].contains("3 unidades"));
}

#[tokio::test]
async fn add_failure_apologizes_and_returns_false() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/catalog");

    let added = bridge.add_to_cart_by_name(&page, "dinosaurio", 1).await;
    assert!(!added);
    let spoken = voice.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].starts_with("Lo siento"), "apology expected: {spoken:?}");
}

#[tokio::test]
async fn read_cart_prefers_the_store_and_structures_the_summary() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let store = stocked_store();
    let bridge = Bridge::new(&tree, &voice, Some(&store));
    let page = PageContext::new("/cart");

    let read = bridge.read_cart(&page).await;
    assert!(read);

    let spoken = voice.spoken();
    // Header, one line per item, then the total.
    assert_eq!(spoken.len(), 4, "got {spoken:?}");
    assert!(spoken[0].contains("3 artículos"));
    assert!(spoken[1].contains("chocolates surtidos"));
    assert!(spoken[2].contains("ramo de flores"));
    assert!(spoken[3].contains("600.00"));
}

#[tokio::test]
async fn read_cart_falls_back_to_visible_text_without_a_store() {
    let tree = FakeTree::with(&[(".cart-items", "2 chocolates surtidos $300")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/cart");

    let read = bridge.read_cart(&page).await;
    assert!(read);
    let spoken = voice.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].contains("chocolates surtidos"));
}

#[tokio::test]
async fn read_total_parses_the_visible_amount_without_a_store() {
    let tree = FakeTree::with(&[(".cart-total", "Total: $450.00")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/cart");

    let total = bridge.read_cart_total(&page).await;
    assert_eq!(total, Some(450.0));
    assert!(voice.spoken()[0].contains("450.00"));
}

#[tokio::test]
async fn read_total_without_store_or_elements_apologizes() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/cart");

    let total = bridge.read_cart_total(&page).await;
    assert!(total.is_none());
    let spoken = voice.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].starts_with("Lo siento"));
}

#[tokio::test]
async fn remove_by_index_names_the_item_from_the_store() {
    let tree = FakeTree::with(&[(".cart-item:nth-of-type(2) .remove-btn", "x")]);
    let voice = RecordingVoice::new();
    let store = stocked_store();
    let bridge = Bridge::new(&tree, &voice, Some(&store));
    let page = PageContext::new("/cart");

    let removed = bridge.remove_from_cart_by_index(&page, 1).await;
    assert!(removed);
    assert_eq!(tree.clicks(), vec![".cart-item:nth-of-type(2) .remove-btn".to_string()]);
    assert!(voice.spoken()[0].contains("ramo de flores"));
}

#[tokio::test]
async fn authentication_prefers_the_store() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let store = stocked_store();
    let bridge = Bridge::new(&tree, &voice, Some(&store));

    // Page context says visitor, but the store is authoritative.
    let page = PageContext::new("/");
    assert!(bridge.is_authenticated(&page).await);

    let info = bridge.user_info().expect("store has a user");
    assert_eq!(info.display_name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn cart_count_reads_the_header_badge_without_a_store() {
    let tree = FakeTree::with(&[(".cart-badge", "3")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let page = PageContext::new("/catalog");

    let count = bridge.read_cart_item_count(&page).await;
    assert_eq!(count, Some(3));
    assert!(voice.spoken()[0].contains("3 artículos"));
}
