//! Pure data: per-page selector tables. Values may be comma-joined
//! fallback chains: consumers try candidates left-to-right, first match
//! wins. No accessor logic lives here.

/// Nested table node. Dot-path segments traverse branches; a leaf is the
/// final selector chain.
pub enum Node {
    Leaf(&'static str),
    Branch(&'static [(&'static str, Node)]),
}

pub struct Table {
    pub name: &'static str,
    pub root: &'static [(&'static str, Node)],
}

use Node::{Branch, Leaf};

pub static HEADER: Table = Table {
    name: "header",
    root: &[
        ("logo", Leaf("header .logo, .navbar-brand")),
        (
            "search",
            Branch(&[
                ("input", Leaf("header input[type=\"search\"], #search-input")),
                ("button", Leaf("header .search-btn, #search-submit")),
            ]),
        ),
        (
            "auth",
            Branch(&[
                ("login", Leaf("#login-btn, header .login, a[href*=\"login\"]")),
                ("logout", Leaf("#logout-btn, header .logout")),
                ("register", Leaf("#register-btn, a[href*=\"register\"]")),
            ]),
        ),
        (
            "nav",
            Branch(&[
                ("home", Leaf("header a[href=\"/\"], .nav-home")),
                ("catalog", Leaf("header a[href*=\"catalog\"], .nav-catalog")),
                ("cart", Leaf("header a[href*=\"cart\"], .nav-cart, .cart-icon")),
                ("cart_count", Leaf(".cart-badge, .cart-count")),
                ("profile", Leaf("header a[href*=\"profile\"], .nav-profile")),
                ("admin", Leaf("header a[href*=\"admin\"], .nav-admin")),
                ("test", Leaf("header a[href*=\"test\"], .nav-test")),
            ]),
        ),
    ],
};

pub static FOOTER: Table = Table {
    name: "footer",
    root: &[
        ("about", Leaf("footer a[href*=\"about\"], footer .quienes-somos")),
        ("contact", Leaf("footer a[href*=\"contact\"], footer .contacto")),
        ("terms", Leaf("footer a[href*=\"terms\"]")),
    ],
};

pub static HOME: Table = Table {
    name: "home",
    root: &[
        ("offers", Leaf("#ofertas, .offers-section, section.ofertas")),
        ("featured", Leaf("#destacados, .featured-products")),
        ("hero", Leaf(".hero, .banner-principal")),
    ],
};

pub static CATALOG: Table = Table {
    name: "catalog",
    root: &[
        ("grid", Leaf(".product-grid, .productos")),
        ("card", Leaf(".product-card, .producto")),
        ("agregar", Leaf(".product-card .add-to-cart, .producto .btn-agregar")),
        ("precio", Leaf(".product-card .price, .producto .precio")),
        ("nombre", Leaf(".product-card .name, .producto .nombre")),
        (
            "filtro",
            Branch(&[
                ("categoria", Leaf("#category-filter, select.filtro-categoria")),
                ("limpiar", Leaf("#clear-filters, .btn-limpiar-filtros")),
            ]),
        ),
        (
            "orden",
            Branch(&[
                ("selector", Leaf("#sort-select, select.orden")),
                ("precio_asc", Leaf("option[value=\"price-asc\"]")),
                ("precio_desc", Leaf("option[value=\"price-desc\"]")),
                ("nombre", Leaf("option[value=\"name\"]")),
            ]),
        ),
        (
            "busqueda",
            Branch(&[
                ("input", Leaf("#catalog-search, input.buscar-productos")),
                ("limpiar", Leaf("#clear-search, .btn-limpiar-busqueda")),
            ]),
        ),
    ],
};

pub static CART: Table = Table {
    name: "cart",
    root: &[
        ("items", Leaf(".cart-items, ul.carrito-lista")),
        ("item", Leaf(".cart-item, .carrito-item")),
        ("eliminar", Leaf(".cart-item .remove-btn, .carrito-item .btn-eliminar")),
        ("aumentar", Leaf(".cart-item .qty-increase, .carrito-item .btn-mas")),
        ("disminuir", Leaf(".cart-item .qty-decrease, .carrito-item .btn-menos")),
        ("cantidad", Leaf(".cart-item input.qty, .carrito-item .cantidad")),
        ("total", Leaf(".cart-total, #total-carrito")),
        ("contador", Leaf(".cart-count, #contador-carrito")),
        ("vaciar", Leaf("#empty-cart, .btn-vaciar-carrito")),
        ("pagar", Leaf("#checkout-btn, .btn-pagar")),
    ],
};

pub static PAYMENT: Table = Table {
    name: "payment",
    root: &[
        ("form", Leaf("#payment-form, form.pago")),
        (
            "campo",
            Branch(&[
                ("nombre", Leaf("#payment-name, input[name=\"nombre\"]")),
                ("correo", Leaf("#payment-email, input[name=\"correo\"]")),
                ("direccion", Leaf("#payment-address, input[name=\"direccion\"]")),
                ("tarjeta", Leaf("#payment-card, input[name=\"tarjeta\"]")),
            ]),
        ),
        ("enviar", Leaf("#payment-submit, button.confirmar-pedido")),
        ("cancelar", Leaf("#payment-cancel, .btn-cancelar-pago")),
    ],
};

pub static PROFILE: Table = Table {
    name: "profile",
    root: &[
        ("nombre", Leaf(".profile-name, #perfil-nombre")),
        ("correo", Leaf(".profile-email, #perfil-correo")),
        ("pedidos", Leaf(".order-history, #historial-pedidos")),
        ("editar", Leaf("#edit-profile, .btn-editar-perfil")),
        ("guardar", Leaf("#save-profile, .btn-guardar-perfil")),
    ],
};

pub static ADMIN: Table = Table {
    name: "admin",
    root: &[
        ("nuevo", Leaf("#new-product, .btn-nuevo-producto")),
        (
            "formulario",
            Branch(&[
                ("nombre", Leaf("#product-name, input[name=\"producto-nombre\"]")),
                ("precio", Leaf("#product-price, input[name=\"producto-precio\"]")),
                ("categoria", Leaf("#product-category, select[name=\"producto-categoria\"]")),
                ("stock", Leaf("#product-stock, input[name=\"producto-stock\"]")),
                ("guardar", Leaf("#product-save, .btn-guardar-producto")),
            ]),
        ),
        ("tabla", Leaf(".inventory-table, table.inventario")),
        ("editar", Leaf(".inventory-table .edit-btn, .btn-editar")),
        ("eliminar", Leaf(".inventory-table .delete-btn, .btn-borrar")),
    ],
};

pub static TEST: Table = Table {
    name: "test",
    root: &[
        ("iniciar", Leaf("#start-test, .btn-iniciar-prueba")),
        ("detener", Leaf("#stop-test, .btn-detener-prueba")),
        ("resultado", Leaf("#test-result, .resultado-prueba")),
        ("microfono", Leaf("#mic-status, .estado-microfono")),
    ],
};

/// Shared modal controls, valid on any page.
pub static MODAL: Table = Table {
    name: "modal",
    root: &[
        ("cerrar", Leaf(".modal .close, .modal-close, dialog .btn-cerrar")),
        ("confirmar", Leaf(".modal .confirm, dialog .btn-confirmar")),
        ("cancelar", Leaf(".modal .cancel, dialog .btn-cancelar")),
    ],
};

/// Tables addressable regardless of the current route.
pub static GLOBAL_TABLES: &[&Table] = &[&HEADER, &FOOTER, &MODAL];

/// Tables scoped to a route; chosen by case-insensitive substring match
/// of the table name against the pathname (home matches the root path).
pub static PAGE_TABLES: &[&Table] =
    &[&HOME, &CATALOG, &CART, &PAYMENT, &PROFILE, &ADMIN, &TEST];
