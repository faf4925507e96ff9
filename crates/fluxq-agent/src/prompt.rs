//! Prompt templates for the InfluxDB agent.
//!
//! Static templates with `{placeholder}` variables filled by plain string
//! replacement. The prefix and suffix together become the rig agent
//! preamble; the scratchpad between turns is the framework's business.

/// Default row limit interpolated into the prefix.
pub const DEFAULT_TOP_K: usize = 10;

/// System preamble. Placeholders: `{database}`, `{top_k}`.
pub const AGENT_PREFIX: &str = r#"You are an agent designed to interact with the '{database}' InfluxDB time-series database using the SQL-like query language supported by InfluxDB 1.0.
Given an input question, create a syntactically correct InfluxQL query to run, then look at the results of the query and return the answer.

Ensure your query includes the necessary measurement (table) and field (column) information relevant to the question.
Only include a time range for your query if the question explicitly specifies one. Otherwise, do not include any time filters.
Unless the user specifies a specific number of results, limit your query to at most {top_k} results.
Never query for all fields or records from a measurement; only ask for the relevant data given the question.
You have access to tools for interacting with the database.
Only use the information returned by the tools below to construct your final answer.
Double-check your query for correctness before executing it. If you encounter an error while executing a query, rewrite the query and try again.

DO NOT perform any operations that modify the database (such as writing or deleting data).

If the question does not seem related to the database or the data stored in it, respond with "I don't know."

When presenting results:
- Format the output in a tabular structure for better readability.
- Include headers for each column.
- Round numerical values to two decimal places for brevity.
- For timestamps, display them in an easy-to-read format (e.g., 'YYYY-MM-DD HH:MM:SS')."#;

/// Seed guidance appended after the prefix.
pub const AGENT_SUFFIX: &str = "I should examine the measurements (tables) in the database to identify the relevant data. Then I should explore the fields (columns) and tags in the most relevant measurements to construct a precise InfluxQL query. The results should be formatted into a clean table with headers and rounded numerical values.";

/// Query-review template. Placeholder: `{query}`.
pub const QUERY_CHECKER: &str = r#"{query}
Double check the InfluxDB query above for common mistakes, including:
- Correct syntax for Flux or InfluxQL (whichever is applicable)
- Proper time range specification
- Correct measurement and field references
- Ensuring no unnecessary fields are queried
- Correct filtering logic
- Casting or type adjustments where required

If there are any of the above mistakes, rewrite the query. If there are no mistakes, just reproduce the original query.

Output the final query only.

Query: "#;

/// Fill `{database}` and `{top_k}` in the prefix.
pub fn format_prefix(database: &str, top_k: usize) -> String {
    AGENT_PREFIX
        .replace("{database}", database)
        .replace("{top_k}", &top_k.to_string())
}

/// Fill `{query}` in the query-review template.
pub fn format_query_checker(query: &str) -> String {
    QUERY_CHECKER.replace("{query}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefix_substitutes_both_placeholders() {
        let prefix = format_prefix("telemetry", 25);
        assert!(prefix.contains("'telemetry'"));
        assert!(prefix.contains("at most 25 results"));
        assert!(!prefix.contains("{database}"));
        assert!(!prefix.contains("{top_k}"));
    }

    #[test]
    fn test_format_query_checker_embeds_query() {
        let checked = format_query_checker("SELECT value FROM temp LIMIT 10");
        assert!(checked.starts_with("SELECT value FROM temp LIMIT 10\n"));
        assert!(!checked.contains("{query}"));
    }
}
