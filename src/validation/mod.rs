//! Opt-in checks for the rules the lenient decoder does not enforce.

use std::collections::HashSet;

use url::Url;

use crate::domain::{Author, Feed, Item, Version};

/// A single rule violation, located by a JSON-pointer-like path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check `feed` against the format's mandatory-field and URL rules.
///
/// Returns every issue found, in document order.
pub fn validate(feed: &Feed) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if feed.version.is_empty() {
        issues.push(ValidationIssue::new("/version", "must not be empty"));
    } else if feed.version.parse::<Version>().is_err() {
        issues.push(ValidationIssue::new(
            "/version",
            format!("unknown version {}", feed.version),
        ));
    }

    if feed.title.is_empty() {
        issues.push(ValidationIssue::new("/title", "must not be empty"));
    }

    check_url(&mut issues, "/home_page_url", &feed.home_page_url);
    check_url(&mut issues, "/feed_url", &feed.feed_url);
    check_url(&mut issues, "/next_url", &feed.next_url);
    check_url(&mut issues, "/icon", &feed.icon);
    check_url(&mut issues, "/favicon", &feed.favicon);

    if let Some(author) = &feed.author {
        check_author(&mut issues, "/author", author);
    }

    for (i, hub) in feed.hubs.iter().enumerate() {
        if hub.hub_type.is_empty() {
            issues.push(ValidationIssue::new(format!("/hubs/{}/type", i), "must not be empty"));
        }
        check_required_url(&mut issues, &format!("/hubs/{}/url", i), &hub.url);
    }

    let mut seen_ids = HashSet::new();
    for (i, item) in feed.items.iter().enumerate() {
        let base = format!("/items/{}", i);

        if item.id.is_empty() {
            issues.push(ValidationIssue::new(format!("{}/id", base), "must not be empty"));
        } else if !seen_ids.insert(item.id.as_str()) {
            issues.push(ValidationIssue::new(
                format!("{}/id", base),
                format!("duplicate id {}", item.id),
            ));
        }

        check_item(&mut issues, &base, item);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn check_item(issues: &mut Vec<ValidationIssue>, base: &str, item: &Item) {
    if item.content_html.is_empty() && item.content_text.is_empty() {
        issues.push(ValidationIssue::new(
            base,
            "needs content_html or content_text",
        ));
    }

    check_url(issues, &format!("{}/url", base), &item.url);
    check_url(issues, &format!("{}/external_url", base), &item.external_url);
    check_url(issues, &format!("{}/image", base), &item.image);
    check_url(issues, &format!("{}/banner_image", base), &item.banner_image);

    if let Some(author) = &item.author {
        check_author(issues, &format!("{}/author", base), author);
    }

    for (i, attachment) in item.attachments.iter().enumerate() {
        let path = format!("{}/attachments/{}", base, i);
        check_required_url(issues, &format!("{}/url", path), &attachment.url);
        if attachment.mime_type.is_empty() {
            issues.push(ValidationIssue::new(
                format!("{}/mime_type", path),
                "must not be empty",
            ));
        }
    }
}

fn check_author(issues: &mut Vec<ValidationIssue>, base: &str, author: &Author) {
    check_url(issues, &format!("{}/url", base), &author.url);
    check_url(issues, &format!("{}/avatar", base), &author.avatar);
}

fn check_required_url(issues: &mut Vec<ValidationIssue>, path: &str, value: &str) {
    if value.is_empty() {
        issues.push(ValidationIssue::new(path, "must not be empty"));
    } else {
        check_url(issues, path, value);
    }
}

/// Empty values are absent optionals and pass.
fn check_url(issues: &mut Vec<ValidationIssue>, path: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Err(e) = Url::parse(value) {
        issues.push(ValidationIssue::new(
            path,
            format!("invalid URL {}: {}", value, e),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attachment, Hub};

    fn valid_feed() -> Feed {
        Feed::new("Blog")
            .with_home_page_url("https://example.org/")
            .with_items(vec![
                Item::new("1").with_content_text("first"),
                Item::new("2").with_content_html("<p>second</p>"),
            ])
    }

    fn paths(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_valid_feed_passes() {
        assert_eq!(validate(&valid_feed()), Ok(()));
    }

    #[test]
    fn test_missing_version_and_title() {
        let issues = validate(&Feed::default()).unwrap_err();
        assert_eq!(paths(&issues), vec!["/version", "/title"]);
    }

    #[test]
    fn test_unknown_version() {
        let mut feed = valid_feed();
        feed.version = "https://example.org/version/7".to_string();

        let issues = validate(&feed).unwrap_err();
        assert_eq!(paths(&issues), vec!["/version"]);
        assert!(issues[0].message.contains("unknown version"));
    }

    #[test]
    fn test_duplicate_item_ids() {
        let mut feed = valid_feed();
        feed.items.push(Item::new("1").with_content_text("again"));

        let issues = validate(&feed).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::new("/items/2/id", "duplicate id 1")]);
    }

    #[test]
    fn test_item_without_content() {
        let feed = Feed::new("Blog").with_items(vec![Item::new("1")]);

        let issues = validate(&feed).unwrap_err();
        assert_eq!(paths(&issues), vec!["/items/0"]);
    }

    #[test]
    fn test_relative_urls_are_rejected() {
        let mut feed = valid_feed();
        feed.feed_url = "/feed.json".to_string();
        feed.items[0].url = "posts/1".to_string();

        let issues = validate(&feed).unwrap_err();
        assert_eq!(paths(&issues), vec!["/feed_url", "/items/0/url"]);
    }

    #[test]
    fn test_hub_and_attachment_required_fields() {
        let mut feed = valid_feed().with_hubs(vec![Hub::new("", "")]);
        feed.items[1].attachments = vec![Attachment::new("https://example.org/a.mp3", "")];

        let issues = validate(&feed).unwrap_err();
        assert_eq!(
            paths(&issues),
            vec!["/hubs/0/type", "/hubs/0/url", "/items/1/attachments/0/mime_type"]
        );
    }

    #[test]
    fn test_author_urls_are_checked() {
        let feed = valid_feed().with_author(Author::new("Jane").with_avatar("not a url"));

        let issues = validate(&feed).unwrap_err();
        assert_eq!(paths(&issues), vec!["/author/avatar"]);
    }
}
