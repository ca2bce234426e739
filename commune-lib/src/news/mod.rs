//! The news feed: articles published to schools with validity windows.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::NewsError;

/// Which schools an article is shown to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// Every school in the municipality.
    AllSchools,
    /// Exactly the named schools.
    Schools(Vec<String>),
}

impl Audience {
    /// Returns `true` if `school` is addressed.
    pub fn includes(&self, school: &str) -> bool {
        match self {
            Audience::AllSchools => true,
            Audience::Schools(schools) => schools.iter().any(|s| s == school),
        }
    }
}

/// One published news article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub audience: Audience,
}

impl NewsItem {
    /// Creates an article addressed to all schools.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            valid_from,
            valid_to,
            audience: Audience::AllSchools,
        }
    }

    /// Narrows the audience to the named schools (builder pattern).
    pub fn for_schools<I, S>(mut self, schools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience = Audience::Schools(schools.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` when `date` falls inside the validity window
    /// (both ends inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}

/// An in-memory news feed, newest first.
#[derive(Debug, Clone, Default)]
pub struct NewsFeed {
    items: Vec<NewsItem>,
}

impl NewsFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes an article to the front of the feed.
    ///
    /// Rejects articles without a title and windows that end before they
    /// start.
    pub fn publish(&mut self, item: NewsItem) -> Result<&NewsItem, NewsError> {
        if item.title.trim().is_empty() {
            return Err(NewsError::MissingTitle);
        }
        if item.valid_to < item.valid_from {
            return Err(NewsError::InvalidWindow {
                valid_from: item.valid_from,
                valid_to: item.valid_to,
            });
        }
        log::info!("published '{}' ({})", item.title, item.id);
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// All articles, newest first.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// The articles whose validity window covers `date`, newest first.
    pub fn active_on(&self, date: NaiveDate) -> Vec<&NewsItem> {
        self.items.iter().filter(|i| i.is_active_on(date)).collect()
    }

    /// The articles `school` sees on `date`: active and addressed to it.
    pub fn visible_to(&self, school: &str, date: NaiveDate) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|i| i.is_active_on(date) && i.audience.includes(school))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_publish_rejects_inverted_window() {
        let mut feed = NewsFeed::new();
        let item = NewsItem::new("Skólasetning", "...", date(2026, 8, 20), date(2026, 8, 1));
        assert!(matches!(
            feed.publish(item),
            Err(NewsError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_publish_rejects_blank_title() {
        let mut feed = NewsFeed::new();
        let item = NewsItem::new("  ", "...", date(2026, 8, 1), date(2026, 8, 20));
        assert!(matches!(feed.publish(item), Err(NewsError::MissingTitle)));
    }

    #[test]
    fn test_window_is_inclusive() {
        let item = NewsItem::new("Frétt", "...", date(2026, 8, 1), date(2026, 8, 20));
        assert!(item.is_active_on(date(2026, 8, 1)));
        assert!(item.is_active_on(date(2026, 8, 20)));
        assert!(!item.is_active_on(date(2026, 8, 21)));
    }

    #[test]
    fn test_visibility_respects_audience_and_window() {
        let mut feed = NewsFeed::new();
        feed.publish(NewsItem::new(
            "Öllum",
            "...",
            date(2026, 8, 1),
            date(2026, 8, 31),
        ))
        .unwrap();
        feed.publish(
            NewsItem::new("Austurskóla", "...", date(2026, 8, 1), date(2026, 8, 31))
                .for_schools(["Austurskóli"]),
        )
        .unwrap();

        let visible = feed.visible_to("Vesturskóli", date(2026, 8, 15));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Öllum");

        assert_eq!(feed.visible_to("Austurskóli", date(2026, 8, 15)).len(), 2);
        assert!(feed.visible_to("Austurskóli", date(2026, 9, 1)).is_empty());
    }

    #[test]
    fn test_feed_is_newest_first() {
        let mut feed = NewsFeed::new();
        feed.publish(NewsItem::new("Fyrst", "...", date(2026, 8, 1), date(2026, 8, 31)))
            .unwrap();
        feed.publish(NewsItem::new("Síðast", "...", date(2026, 8, 1), date(2026, 8, 31)))
            .unwrap();
        assert_eq!(feed.items()[0].title, "Síðast");
    }
}
