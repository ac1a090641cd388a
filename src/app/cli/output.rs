use crate::domain::{AppError, OptimizedResult};

/// Print a result either as labeled text or as a JSON object.
pub fn print_result(result: &OptimizedResult, json: bool, heading: &str) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(result)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize result: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", format_result(result, heading));
    Ok(())
}

pub fn format_result(result: &OptimizedResult, heading: &str) -> String {
    format!("== {} ==\n{}\n\n== Explanation ==\n{}", heading, result.prompt(), result.explanation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prompt_then_explanation() {
        let result = OptimizedResult::new("P", "E").unwrap();
        assert_eq!(
            format_result(&result, "Optimized prompt"),
            "== Optimized prompt ==\nP\n\n== Explanation ==\nE"
        );
    }
}
