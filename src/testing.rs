//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{CompletionStatus, Item};

/// Create a test item with just an id and a title.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, title: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: "General".to_string(),
        difficulty: "beginner".to_string(),
        points: 10,
        completion_status: CompletionStatus::NotStarted,
    }
}

/// Create a fully specified test item.
pub fn make_benchmark(
    id: &str,
    title: &str,
    category: &str,
    difficulty: &str,
    points: u32,
    status: CompletionStatus,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description for {}", title),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        points,
        completion_status: status,
    }
}

/// A small catalog exercising every dimension.
///
/// | id | title                        | category | difficulty   | points | status      |
/// |----|------------------------------|----------|--------------|--------|-------------|
/// | 1  | Hello World Translation      | Easy     | beginner     | 10     | completed   |
/// | 2  | Express Login Route          | Medium   | intermediate | 50     | in-progress |
/// | 3  | Neural Network from Scratch  | Hard     | expert       | 25     | not-started |
pub fn sample_catalog() -> Vec<Item> {
    vec![
        Item {
            id: "1".to_string(),
            title: "Hello World Translation".to_string(),
            description: "Print a greeting in five languages".to_string(),
            category: "Easy".to_string(),
            difficulty: "beginner".to_string(),
            points: 10,
            completion_status: CompletionStatus::Completed,
        },
        Item {
            id: "2".to_string(),
            title: "Express Login Route".to_string(),
            description: "Build an authenticated session endpoint".to_string(),
            category: "Medium".to_string(),
            difficulty: "intermediate".to_string(),
            points: 50,
            completion_status: CompletionStatus::InProgress,
        },
        Item {
            id: "3".to_string(),
            title: "Neural Network from Scratch".to_string(),
            description: "Implement backpropagation without a framework".to_string(),
            category: "Hard".to_string(),
            difficulty: "expert".to_string(),
            points: 25,
            completion_status: CompletionStatus::NotStarted,
        },
    ]
}
