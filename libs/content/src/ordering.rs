//! Listing order rules shared by every repository backend
//!
//! All sorts are stable: entities that compare equal keep the order they were
//! handed in, which for the in-memory backend is insertion order.

use crate::models::{Post, Project};

/// Sort projects ascending by `order`
pub fn sort_for_display(projects: &mut [Project]) {
    projects.sort_by_key(|project| project.order);
}

/// Keep only featured projects, preserving their relative order
pub fn featured_only(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(|project| project.featured).collect()
}

/// Sort posts by `created_at`, most recent first; undated posts go last
pub fn sort_newest_first(posts: &mut [Post]) {
    // `None < Some(_)`, so comparing b to a puts undated posts at the end.
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn project_ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    fn post_ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_projects_sort_ascending_and_stable() {
        let mut projects = vec![
            Project::new("c", "C", "", "AI").with_order(2),
            Project::new("a", "A", "", "AI").with_order(1),
            Project::new("d", "D", "", "AI").with_order(2),
            Project::new("b", "B", "", "AI"),
        ];

        sort_for_display(&mut projects);

        assert_eq!(project_ids(&projects), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_negative_order_sorts_first() {
        let mut projects = vec![
            Project::new("zero", "", "", "AI"),
            Project::new("minus", "", "", "AI").with_order(-5),
        ];

        sort_for_display(&mut projects);

        assert_eq!(project_ids(&projects), vec!["minus", "zero"]);
    }

    #[test]
    fn test_featured_only_keeps_order() {
        let projects = vec![
            Project::new("a", "", "", "AI").with_featured(true),
            Project::new("b", "", "", "AI"),
            Project::new("c", "", "", "AI").with_featured(true),
        ];

        let featured = featured_only(projects);

        assert_eq!(project_ids(&featured), vec!["a", "c"]);
    }

    #[test]
    fn test_posts_sort_newest_first_with_undated_last() {
        let mut posts = vec![
            Post::new("undated", "", ""),
            Post::new("old", "", "").with_created_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            Post::new("epoch", "", "").with_created_at(Utc.timestamp_opt(0, 0).unwrap()),
            Post::new("new", "", "").with_created_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        ];

        sort_newest_first(&mut posts);

        assert_eq!(post_ids(&posts), vec!["new", "old", "epoch", "undated"]);
    }

    #[test]
    fn test_posts_with_same_timestamp_keep_insertion_order() {
        let at = Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap();
        let mut posts = vec![
            Post::new("first", "", "").with_created_at(at),
            Post::new("second", "", "").with_created_at(at),
            Post::new("undated-1", "", ""),
            Post::new("undated-2", "", ""),
        ];

        sort_newest_first(&mut posts);
        let once: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
        sort_newest_first(&mut posts);

        assert_eq!(once, vec!["first", "second", "undated-1", "undated-2"]);
        assert_eq!(post_ids(&posts), once);
    }
}
