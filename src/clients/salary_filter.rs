//! Removes salary data from profile listings.

use serde_json::Value;

/// The key stripped from each profile record.
pub const SALARY_FIELD: &str = "salary";

/// Strips [`SALARY_FIELD`] from every record of a `{"profiles": [...]}` body.
///
/// Returns the number of records that carried a salary. Bodies of any
/// other shape are left untouched, as are non-object array elements.
///
/// # Example
///
/// ```rust
/// use namely::clients::strip_salaries;
/// use serde_json::json;
///
/// let mut body = json!({"profiles": [{"id": "1", "salary": 100}, {"id": "2"}]});
/// assert_eq!(strip_salaries(&mut body), 1);
/// assert_eq!(body, json!({"profiles": [{"id": "1"}, {"id": "2"}]}));
/// ```
pub fn strip_salaries(body: &mut Value) -> usize {
    let Some(Value::Array(profiles)) = body.get_mut("profiles") else {
        return 0;
    };

    profiles
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .filter_map(|profile| profile.remove(SALARY_FIELD))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removes_salary_from_every_profile() {
        let mut body = json!({"profiles": [{"salary": 100}]});
        assert_eq!(strip_salaries(&mut body), 1);
        assert_eq!(body, json!({"profiles": [{}]}));
    }

    #[test]
    fn test_keeps_other_fields_and_top_level_keys() {
        let mut body = json!({
            "meta": {"count": 2},
            "profiles": [
                {"id": "a", "salary": {"yearly_amount": 1000}},
                {"id": "b", "first_name": "Ada"}
            ]
        });

        assert_eq!(strip_salaries(&mut body), 1);
        assert_eq!(
            body,
            json!({
                "meta": {"count": 2},
                "profiles": [{"id": "a"}, {"id": "b", "first_name": "Ada"}]
            })
        );
    }

    #[test]
    fn test_other_shapes_pass_through() {
        let untouched = [
            json!(null),
            json!([{"salary": 1}]),
            json!({"salary": 1}),
            json!({"profiles": {"salary": 1}}),
            json!({"events": [{"salary": 1}]}),
        ];

        for original in untouched {
            let mut body = original.clone();
            assert_eq!(strip_salaries(&mut body), 0);
            assert_eq!(body, original);
        }
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let mut body = json!({"profiles": [1, "two", {"salary": 3}]});
        assert_eq!(strip_salaries(&mut body), 1);
        assert_eq!(body, json!({"profiles": [1, "two", {}]}));
    }
}
