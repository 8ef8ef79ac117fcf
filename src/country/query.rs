/// Fixed query for the full country list. No variables, no pagination.
pub const GET_ALL_COUNTRIES: &str = r#"
query GetAllCountries {
    countries {
        code
        name
        capital
        currency
        phone
        continent {
            code
            name
        }
    }
}"#;
