//! # Prompt Construction
//!
//! Builds the request prompt from the selected template and the three form
//! fields. Field values are interpolated verbatim; there is no escaping or
//! sanitization of user input on this path.

use crate::core::catalog::PromptTemplate;

/// Concatenates the template text with three labeled lines containing the
/// form fields, in fixed order.
pub fn build_prompt(
    template: &PromptTemplate,
    phone_model: &str,
    target_audience: &str,
    key_features: &str,
) -> String {
    format!(
        "{}\nPhone Model: {}\nTarget Audience: {}\nKey Features: {}",
        template.template, phone_model, target_audience, key_features
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::template_by_value;

    #[test]
    fn test_build_prompt_exact_layout() {
        let template = template_by_value("launch").unwrap();
        let prompt = build_prompt(template, "iPhone 15", "Tech enthusiasts", "48MP camera");
        assert_eq!(
            prompt,
            "Create an exciting product launch announcement for a new smartphone.\n\
             Phone Model: iPhone 15\n\
             Target Audience: Tech enthusiasts\n\
             Key Features: 48MP camera"
        );
    }

    #[test]
    fn test_build_prompt_contains_labeled_model_line() {
        let template = template_by_value("launch").unwrap();
        let prompt = build_prompt(template, "iPhone 15", "Tech enthusiasts", "48MP camera");
        assert!(prompt.lines().any(|l| l == "Phone Model: iPhone 15"));
    }

    #[test]
    fn test_build_prompt_empty_fields_interpolate_verbatim() {
        let template = template_by_value("social").unwrap();
        let prompt = build_prompt(template, "", "", "");
        assert!(prompt.ends_with("Phone Model: \nTarget Audience: \nKey Features: "));
    }

    #[test]
    fn test_build_prompt_does_not_escape_input() {
        // Injection into the downstream request body is an accepted
        // limitation; the characters must pass through untouched.
        let template = template_by_value("review").unwrap();
        let prompt = build_prompt(template, "\"X\" <phone>", "a\nb", "100%");
        assert!(prompt.contains("Phone Model: \"X\" <phone>"));
        assert!(prompt.contains("Target Audience: a\nb"));
    }
}
