use scraper::Selector;

/// Compiles a selector literal; a typo in one is a bug, so it panics.
pub(crate) fn compile(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("Error parsing static selector {selector}: {e:?}"))
}

/// `static_selector!(NAME <- "css")` declares a `static NAME` selector,
/// compiled the first time it is dereferenced.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: std::sync::LazyLock<scraper::Selector> =
            std::sync::LazyLock::new(|| $crate::parse::static_selector::compile($sel));
    };
}
