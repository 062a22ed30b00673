//! Display summaries for a movie's many-to-many relations.
//!
//! Two rendering modes exist and must stay divergent:
//!
//! - **list mode** joins every related name into one comma-separated string,
//!   the lightweight summary shown while browsing the catalog;
//! - **detail mode** shows only an arbitrary representative -- the first
//!   record in storage order -- as the headline credit.
//!
//! "First" is whatever the persistence layer returns first (join-row
//! insertion order); it carries no business meaning, so the selectors here
//! make that choice explicit instead of hiding it behind relation traversal.

/// A director or actor credit as rendered in detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCredit {
    pub name: String,
    pub age: i32,
}

/// List mode: all names joined as `"USA, France"`, preserving query order.
///
/// An empty relation yields an empty string here; list views always render
/// the column.
pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Detail mode: the arbitrary first representative, or `None` when the
/// relation is empty. Never an empty string -- absent relations serialize
/// as `null`.
pub fn first_name(names: &[String]) -> Option<&str> {
    names.first().map(String::as_str)
}

/// Detail mode for cast and crew: `"<name>, age: <age>"` for the first
/// credit only, `None` when the movie has no entry for the relation.
pub fn first_credit(credits: &[PersonCredit]) -> Option<String> {
    credits
        .first()
        .map(|c| format!("{}, age: {}", c.name, c.age))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_mode_joins_all_names_in_order() {
        assert_eq!(join_names(&names(&["USA", "France"])), "USA, France");
        assert_eq!(join_names(&names(&["Drama"])), "Drama");
    }

    #[test]
    fn test_list_mode_empty_relation_is_empty_string() {
        assert_eq!(join_names(&[]), "");
    }

    #[test]
    fn test_detail_mode_takes_first_only() {
        assert_eq!(first_name(&names(&["USA", "France"])), Some("USA"));
    }

    #[test]
    fn test_detail_mode_empty_relation_is_none() {
        assert_eq!(first_name(&[]), None);
        assert_eq!(first_credit(&[]), None);
    }

    #[test]
    fn test_credit_renders_name_and_age() {
        let credits = vec![
            PersonCredit {
                name: "Christopher Nolan".to_string(),
                age: 54,
            },
            PersonCredit {
                name: "Emma Thomas".to_string(),
                age: 53,
            },
        ];
        assert_eq!(
            first_credit(&credits),
            Some("Christopher Nolan, age: 54".to_string())
        );
    }
}
