//! Parametric selector generators, one per lookup method. Each returns a
//! fully interpolated selector string (possibly a fallback chain).

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Zero-based product/list index → nth card in the grid.
pub fn by_index(index: usize) -> String {
    format!(
        "[data-index=\"{index}\"], .product-card:nth-of-type({nth}), .cart-item:nth-of-type({nth})",
        nth = index + 1,
    )
}

pub fn by_id(id: &str) -> String {
    let id = escape(id);
    format!("#{id}, [data-id=\"{id}\"]")
}

/// Free-text name match against the attributes the storefront renders.
pub fn by_name(name: &str) -> String {
    let name = escape(name);
    format!(
        "[data-name*=\"{name}\"], [aria-label*=\"{name}\"], [title*=\"{name}\"]"
    )
}

/// Literal visible-text probe, for elements with no addressable attribute.
pub fn by_text(text: &str) -> String {
    format!("text={}", escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_interpolated_one_based_for_nth() {
        let s = by_index(0);
        assert!(s.contains("[data-index=\"0\"]"));
        assert!(s.contains(":nth-of-type(1)"));
    }

    #[test]
    fn quotes_are_escaped() {
        let s = by_name("osito \"grande\"");
        assert!(s.contains("osito \\\"grande\\\""));
    }
}
