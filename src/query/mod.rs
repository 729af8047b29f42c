//! Pure filtering over content collections. Nothing here touches the
//! repository or the store: callers pass a slice and get back references
//! into it, in the original order.

use crate::domain::{BlogPost, Event, EventCategory, EventStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring match against title, description, or
    /// any tag. Empty matches everything.
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl EventFilter {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event) && self.matches_category(event) && self.matches_status(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        event.title.to_lowercase().contains(&needle)
            || event.description.to_lowercase().contains(&needle)
            || event.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, event: &Event) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == category,
        }
    }

    fn matches_status(&self, event: &Event) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => event.status == status,
        }
    }
}

/// Stable filter: output preserves input order, input is never mutated.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// Blog page category filter. Categories are free-form strings; "all" is
/// the no-constraint sentinel.
pub fn filter_posts<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|p| category == "all" || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn sample_events() -> Vec<Event> {
        seed::default_events()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let events = sample_events();
        let filtered = filter_events(&events, &EventFilter::default());
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn test_search_matches_title_description_and_tags() {
        let events = sample_events();

        // "hackathon" appears in a title and a tag
        let by_title = filter_events(&events, &EventFilter::search("hackathon"));
        assert!(by_title.iter().all(|e| e.title.to_lowercase().contains("hackathon")
            || e.tags.iter().any(|t| t.to_lowercase().contains("hackathon"))));
        assert!(!by_title.is_empty());

        // "ethical hacking" only appears in a description/tag
        let by_description = filter_events(&events, &EventFilter::search("ethical"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "2");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let events = sample_events();
        let lower = filter_events(&events, &EventFilter::search("iot"));
        let upper = filter_events(&events, &EventFilter::search("IoT"));
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_category_and_status_are_anded_with_search() {
        let events = sample_events();
        let filter = EventFilter {
            search: "workshop".into(),
            category: CategoryFilter::Only(EventCategory::Workshop),
            status: StatusFilter::Only(EventStatus::Past),
        };
        let filtered = filter_events(&events, &filter);
        assert!(filtered.iter().all(|e| {
            e.category == EventCategory::Workshop && e.status == EventStatus::Past
        }));
        assert!(!filtered.is_empty());
    }

    #[test]
    fn test_filter_is_pure_and_idempotent() {
        let events = sample_events();
        let snapshot = events.clone();
        let filter = EventFilter::search("ai");

        let first: Vec<Event> = filter_events(&events, &filter).into_iter().cloned().collect();
        let second: Vec<Event> = filter_events(&events, &filter).into_iter().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(events, snapshot);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let events = sample_events();
        let filter = EventFilter {
            status: StatusFilter::Only(EventStatus::Past),
            ..EventFilter::default()
        };
        let ids: Vec<&str> = filter_events(&events, &filter)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["7", "8", "9", "10", "11", "12"]);
    }

    #[test]
    fn test_post_filter_sentinel() {
        let posts = seed::default_blog_posts();
        assert_eq!(filter_posts(&posts, "all").len(), posts.len());

        let guides = filter_posts(&posts, "guide");
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].id, "1");

        assert!(filter_posts(&posts, "news").is_empty());
    }
}
