//! Frequently asked questions shown on listing pages.

use serde::Serialize;

use super::listing::ListingPage;
use crate::types::NameQuery;
use crate::types::NameRecord;

/// How many names the "most popular" answer lists.
const POPULAR_IN_ANSWER: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Questions and answers for a listing page and its result set.
#[must_use]
pub fn for_listing(page: &ListingPage, names: &[NameRecord]) -> Vec<FaqItem> {
    let title = page.title();
    let entry = page.entry();

    let popular: Vec<&str> = names
        .iter()
        .take(POPULAR_IN_ANSWER)
        .map(|n| n.name.as_str())
        .collect();
    let popular_answer = if popular.is_empty() {
        format!("We haven't published any {title} yet. Check back soon.")
    } else {
        format!("The most popular {title} right now are {}.", join_names(&popular))
    };

    let mut items = vec![
        FaqItem {
            question: format!("What are the most popular {title}?"),
            answer: popular_answer,
        },
        FaqItem {
            question: format!("What are {title}?"),
            answer: entry.description.to_owned(),
        },
        FaqItem {
            question: "How are these names ranked?".to_owned(),
            answer: format!(
                "Names are ordered by popularity score, most popular first. Each page lists up to {} names.",
                NameQuery::MAX_RESULTS
            ),
        },
    ];

    if let Some(top) = names.first() {
        items.push(FaqItem {
            question: format!("What does the name {} mean?", top.name),
            answer: format!(
                "{} is a name of {} origin meaning \"{}\".",
                top.name, top.origin, top.meaning
            ),
        });
    }

    items
}

/// "A", "A and B", "A, B and C".
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seo::listing::ListingKind;
    use crate::types::Gender;

    fn record(name: &str) -> NameRecord {
        NameRecord {
            name: name.to_owned(),
            gender: Gender::Male,
            origin: "Irish".to_owned(),
            meaning: "little fire".to_owned(),
            characteristics: vec![],
            popularity_score: 90,
        }
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&["Aidan"]), "Aidan");
        assert_eq!(join_names(&["Aidan", "Liam"]), "Aidan and Liam");
        assert_eq!(join_names(&["Aidan", "Liam", "Finn"]), "Aidan, Liam and Finn");
    }

    #[test]
    fn test_faq_with_results() {
        let page = ListingPage::resolve(ListingKind::Origin, "irish", Some("boy")).unwrap();
        let names: Vec<NameRecord> = ["Aidan", "Liam", "Finn", "Conor", "Ronan", "Cian"]
            .into_iter()
            .map(record)
            .collect();

        let faq = for_listing(&page, &names);
        assert_eq!(faq.len(), 4);
        assert_eq!(
            faq[0].answer,
            "The most popular Irish Boy Names right now are Aidan, Liam, Finn, Conor and Ronan."
        );
        assert_eq!(faq[3].question, "What does the name Aidan mean?");
        assert!(faq[3].answer.contains("\"little fire\""));
    }

    #[test]
    fn test_faq_without_results() {
        let page = ListingPage::resolve(ListingKind::Letter, "x", None).unwrap();
        let faq = for_listing(&page, &[]);
        assert_eq!(faq.len(), 3);
        assert!(faq[0].answer.starts_with("We haven't published any"));
    }
}
