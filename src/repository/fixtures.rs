//! Seed data for the mock sources

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Author, AuthorStatus, Book, BookStatus, Message, MessageType, Priority, Role, SettingItem,
    SettingStatus, SettingValue, UserProfile,
};

pub fn books() -> Vec<Book> {
    [
        ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Available),
        ("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, BookStatus::Issued),
        ("1984", "George Orwell", "Dystopian", 1949, BookStatus::Available),
        ("Pride and Prejudice", "Jane Austen", "Romance", 1813, BookStatus::Available),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, author, genre, year, status))| Book {
        id: Some((i + 1).to_string()),
        ..Book::new(title, author, genre, year, status)
    })
    .collect()
}

pub fn authors() -> Vec<Author> {
    [
        ("Sarah Johnson", "Technology Writer", "Passionate about emerging technologies and their impact on society", AuthorStatus::Active, 2020, 127, 4.8),
        ("Michael Chen", "Science Journalist", "Award-winning science journalist with expertise in climate change", AuthorStatus::Active, 2019, 89, 4.9),
        ("Emily Rodriguez", "Health & Wellness", "Medical professional turned writer, focusing on mental health", AuthorStatus::Inactive, 2021, 156, 4.7),
        ("David Thompson", "Business Analyst", "Former Fortune 500 consultant sharing market trends insights", AuthorStatus::Active, 2018, 203, 4.6),
        ("Lisa Park", "Creative Director", "Design thinking enthusiast exploring creativity and innovation", AuthorStatus::Active, 2022, 94, 4.9),
        ("James Wilson", "Travel Writer", "Globe-trotter documenting sustainable travel practices", AuthorStatus::Active, 2020, 178, 4.8),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, specialty, bio, status, joined, articles, rating))| Author {
        id: Some((i + 1).to_string()),
        name: name.to_string(),
        specialty: specialty.to_string(),
        bio: bio.to_string(),
        status,
        email: Some(format!(
            "{}@bookdash.com",
            name.to_lowercase().replace(' ', ".")
        )),
        joined_year: Some(joined),
        articles_count: articles,
        rating,
    })
    .collect()
}

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

pub fn messages() -> Vec<Message> {
    let rows = [
        (
            MessageType::Request,
            "Book Request: The Lean Startup",
            "John Doe has requested \"The Lean Startup\" by Eric Ries. Please review and approve.",
            "The Lean Startup",
            Some("John Doe"),
            "2024-01-15T10:30:00Z",
            false,
            Priority::Medium,
        ),
        (
            MessageType::Overdue,
            "Overdue Book Return",
            "Jane Smith has not returned \"1984\" which was due 5 days ago.",
            "1984",
            Some("Jane Smith"),
            "2024-01-14T15:45:00Z",
            false,
            Priority::High,
        ),
        (
            MessageType::Return,
            "Book Returned Successfully",
            "Mike Johnson has successfully returned \"Pride and Prejudice\".",
            "Pride and Prejudice",
            Some("Mike Johnson"),
            "2024-01-13T09:20:00Z",
            true,
            Priority::Low,
        ),
        (
            MessageType::Notification,
            "New Book Added",
            "A new book \"Clean Code\" has been added to the library collection.",
            "Clean Code",
            None,
            "2024-01-12T14:10:00Z",
            false,
            Priority::Low,
        ),
        (
            MessageType::Request,
            "Book Extension Request",
            "Sarah Wilson wants to extend the due date for \"The Great Gatsby\".",
            "The Great Gatsby",
            Some("Sarah Wilson"),
            "2024-01-11T11:35:00Z",
            true,
            Priority::Medium,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (kind, title, content, book, user, timestamp, is_read, priority))| Message {
                id: Some((i + 1).to_string()),
                kind,
                title: title.to_string(),
                content: content.to_string(),
                book_title: Some(book.to_string()),
                user_name: user.map(str::to_string),
                timestamp: at(timestamp),
                is_read,
                priority,
            },
        )
        .collect()
}

fn toggle(value: bool) -> SettingValue {
    SettingValue::Toggle { value }
}

fn select(value: &str, options: &[&str]) -> SettingValue {
    SettingValue::Select {
        value: value.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

pub fn settings() -> Vec<SettingItem> {
    let rows = vec![
        ("General", "Dark Mode", "Enable dark theme across the application", toggle(true), SettingStatus::Active),
        (
            "General",
            "Language",
            "Select your preferred language",
            select("English", &["English", "Spanish", "French", "German", "Chinese"]),
            SettingStatus::Active,
        ),
        ("Notifications", "Email Notifications", "Receive notifications via email", toggle(false), SettingStatus::Active),
        ("Notifications", "Push Notifications", "Enable browser push notifications", toggle(true), SettingStatus::Active),
        (
            "Privacy",
            "Profile Visibility",
            "Control who can see your profile",
            select("Public", &["Public", "Friends Only", "Private"]),
            SettingStatus::Active,
        ),
        ("Privacy", "Data Collection", "Allow anonymous usage data collection", toggle(false), SettingStatus::Inactive),
        (
            "Performance",
            "Cache Size",
            "Maximum cache size in MB",
            SettingValue::Range { value: 512, min: 100, max: 2048 },
            SettingStatus::Active,
        ),
        (
            "Performance",
            "Auto-save Interval",
            "Minutes between auto-saves",
            SettingValue::Input { value: "5".to_string() },
            SettingStatus::Active,
        ),
        ("Security", "Two-Factor Authentication", "Enable 2FA for enhanced security", toggle(true), SettingStatus::Active),
        (
            "Security",
            "Session Timeout",
            "Auto logout after inactivity (minutes)",
            select("30", &["15", "30", "60", "120", "Never"]),
            SettingStatus::Active,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (category, name, description, value, status))| SettingItem {
            id: Some((i + 1).to_string()),
            category: category.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status,
            value,
        })
        .collect()
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: Some("1".to_string()),
        name: "John Doe".to_string(),
        email: "john.doe@bookdash.com".to_string(),
        role: Role::Admin,
        avatar: None,
        phone: Some("+91 98765 43210".to_string()),
        joined_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
        issued_books: 3,
        total_issued: 45,
        overdue_books: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: Vec<_> = books().iter().map(|b| b.id().unwrap().to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(authors()[5].id(), Some("6"));
    }

    #[test]
    fn test_messages_keep_wire_timestamps() {
        let first = &messages()[0];
        assert_eq!(first.timestamp.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert!(messages()[3].user_name.is_none());
    }
}
