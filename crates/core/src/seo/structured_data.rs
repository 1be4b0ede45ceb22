//! JSON-LD structured data (schema.org) for search engines.

use serde_json::{Value, json};

use super::faq::FaqItem;
use super::metadata::{PageMeta, SITE_NAME, absolute_url};
use crate::types::NameRecord;

/// Maximum number of names embedded in the `ItemList`.
pub const ITEM_LIST_LIMIT: usize = 20;

const CONTEXT: &str = "https://schema.org";

/// `BreadcrumbList` mirroring [`PageMeta::breadcrumbs`].
#[must_use]
pub fn breadcrumb_list(meta: &PageMeta, base_url: &str) -> Value {
    let items: Vec<Value> = meta
        .breadcrumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": absolute_url(base_url, &crumb.path),
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// `ItemList` of the first [`ITEM_LIST_LIMIT`] names.
#[must_use]
pub fn item_list(meta: &PageMeta, names: &[NameRecord]) -> Value {
    let items: Vec<Value> = names
        .iter()
        .take(ITEM_LIST_LIMIT)
        .enumerate()
        .map(|(i, record)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": record.name,
                "description": format!("{} origin, meaning \"{}\"", record.origin, record.meaning),
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "ItemList",
        "name": meta.title,
        "numberOfItems": items.len(),
        "itemListElement": items,
    })
}

/// `FAQPage`.
#[must_use]
pub fn faq_page(faq: &[FaqItem]) -> Value {
    let questions: Vec<Value> = faq
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `CollectionPage` describing the listing itself.
#[must_use]
pub fn collection_page(meta: &PageMeta, base_url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "CollectionPage",
        "name": meta.title,
        "description": meta.description,
        "url": meta.canonical_url(base_url),
        "keywords": meta.keywords_csv(),
        "isPartOf": {
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": absolute_url(base_url, "/"),
        },
    })
}

/// All structured data for a listing page, in render order.
#[must_use]
pub fn for_listing(
    meta: &PageMeta,
    names: &[NameRecord],
    faq: &[FaqItem],
    base_url: &str,
) -> Vec<Value> {
    vec![
        breadcrumb_list(meta, base_url),
        item_list(meta, names),
        faq_page(faq),
        collection_page(meta, base_url),
    ]
}

/// Serialize for embedding in `<script type="application/ld+json">`.
///
/// `<` is escaped so that text such as `</script>` inside a name or meaning
/// cannot close the script element.
#[must_use]
pub fn to_script_json(values: &[Value]) -> String {
    let json = serde_json::to_string(values).unwrap_or_else(|_| "[]".to_owned());
    json.replace('<', "\\u003c")
}
