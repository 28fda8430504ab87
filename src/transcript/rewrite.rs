use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One structural rewrite. Rules are applied strictly in ascending
/// priority order; some rules rely on earlier ones already having run
/// (e.g. verb canonicalization before digit folding keeps "presiona dos"
/// → "clic en 2" stable). Every rule's output must be a fixed point of
/// the whole list, so the full pass is idempotent.
pub struct RewriteRule {
    pub tag: &'static str,
    pub priority: u8,
    pub pattern: Regex,
    pub replacement: &'static str,
}

fn rule(tag: &'static str, priority: u8, pattern: &str, replacement: &'static str) -> RewriteRule {
    RewriteRule {
        tag,
        priority,
        // Tables are static; a malformed pattern is a programming error.
        pattern: Regex::new(pattern).expect("invalid rewrite pattern"),
        replacement,
    }
}

/// Common mis-transcriptions → canonical phrases. Exact substring
/// replace, case-insensitive. Checked before the structural rules.
static CORRECTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    const TABLE: &[(&str, &str)] = &[
        ("a quién estamos", "a quiénes somos"),
        ("quien es somos", "quiénes somos"),
        ("kien es somos", "quiénes somos"),
        ("al barrito", "al carrito"),
        ("el barrito", "el carrito"),
        ("carreto", "carrito"),
        ("carito", "carrito"),
        ("vasea el carrito", "vacía el carrito"),
        ("bacia el carrito", "vacía el carrito"),
        ("cerrar session", "cerrar sesión"),
        ("cerar sesión", "cerrar sesión"),
        ("catalogo", "catálogo"),
        ("pagina", "página"),
        ("metodo de pago", "método de pago"),
        ("has clic", "haz clic"),
        ("as clic", "haz clic"),
    ];
    TABLE
        .iter()
        .map(|(from, to)| {
            let re = RegexBuilder::new(&regex::escape(from))
                .case_insensitive(true)
                .build()
                .expect("invalid correction pattern");
            (re, *to)
        })
        .collect()
});

static REWRITES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    let mut rules = vec![
        // Collapse every "click on X" variant into one canonical verb.
        rule(
            "click-verb",
            10,
            r"\b(?:haz(?:me)?\s+(?:clic|click|clik)|dame\s+(?:clic|click)|presiona|pulsa|toca)\b(?:\s+(?:en|sobre))?",
            "clic en",
        ),
        // Navigation verbs.
        rule(
            "navigate-verb",
            20,
            r"\b(?:ve|vamos|vaya|llévame|anda|dirígete|navega)\s+(?:a|al|hacia)\b",
            "ir a",
        ),
        // Search verbs.
        rule(
            "search-verb",
            30,
            r"\b(?:búscame|buscame|busca|encuéntrame|encuentra)\b",
            "buscar",
        ),
    ];

    // Spoken digits → numerals. One rule each so the table stays declarative.
    const DIGITS: &[(&str, &str, &str)] = &[
        ("digit-uno", r"\buno\b", "1"),
        ("digit-dos", r"\bdos\b", "2"),
        ("digit-tres", r"\btres\b", "3"),
        ("digit-cuatro", r"\bcuatro\b", "4"),
        ("digit-cinco", r"\bcinco\b", "5"),
        ("digit-seis", r"\bseis\b", "6"),
        ("digit-siete", r"\bsiete\b", "7"),
        ("digit-ocho", r"\bocho\b", "8"),
        ("digit-nueve", r"\bnueve\b", "9"),
        ("digit-diez", r"\bdiez\b", "10"),
    ];
    for (i, (tag, pat, rep)) in DIGITS.iter().enumerate() {
        rules.push(rule(tag, 40 + i as u8, pat, rep));
    }

    rules.sort_by_key(|r| r.priority);
    rules
});

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("invalid pattern"));

/// Apply the correction lookup, then every rewrite rule in priority
/// order, then collapse whitespace. Stable under re-application.
pub fn correct(text: &str) -> String {
    let mut out = text.to_string();

    for (pattern, replacement) in CORRECTIONS.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }

    for rule in REWRITES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }

    MULTI_SPACE.replace_all(&out, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_variants_collapse() {
        assert_eq!(correct("haz clic en el botón"), "clic en el botón");
        assert_eq!(correct("presiona el botón"), "clic en el botón");
        assert_eq!(correct("pulsa sobre comprar"), "clic en comprar");
    }

    #[test]
    fn navigation_verbs_collapse() {
        assert_eq!(correct("llévame al carrito"), "ir a carrito");
        assert_eq!(correct("ve a inicio"), "ir a inicio");
    }

    #[test]
    fn spoken_digits_fold() {
        assert_eq!(correct("agrega dos chocolates"), "agrega 2 chocolates");
        assert_eq!(correct("cantidad cinco"), "cantidad 5");
    }

    #[test]
    fn corrections_fire_case_insensitively() {
        assert_eq!(correct("A Quién Estamos"), "a quiénes somos");
        assert_eq!(correct("agregar al barrito"), "agregar al carrito");
    }

    #[test]
    fn every_rule_is_idempotent() {
        let samples = [
            "haz clic en pagar",
            "llévame al catálogo por favor",
            "busca flores y agrega dos al carrito",
            "a quién estamos",
            "presiona   el    botón",
        ];
        for s in samples {
            let once = correct(s);
            let twice = correct(&once);
            assert_eq!(once, twice, "rewrite must be stable for {s:?}");
        }
    }

    #[test]
    fn rules_stay_priority_ordered() {
        let priorities: Vec<u8> = REWRITES.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);
    }
}
