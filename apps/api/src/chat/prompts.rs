// Chat prompt templates.

const SYSTEM_PREAMBLE: &str = "\
You are an AI assistant on a personal portfolio website. \
Answer questions about the person described below based ONLY on the resume information provided. \
Be friendly, concise, and professional. \
If a question is not related to this person or their resume, \
politely say you can only answer questions about them.";

/// Builds the system instruction for a chat turn with the resume embedded verbatim.
pub fn build_system_prompt(resume: &str) -> String {
    format!("{SYSTEM_PREAMBLE}\n\nRESUME DATA:\n{resume}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_is_embedded_verbatim() {
        let resume = "Name: Jane\n  - indented line\nSKILLS: Rust, C";
        let prompt = build_system_prompt(resume);
        assert!(prompt.contains(resume));
        assert!(prompt.ends_with(&format!("RESUME DATA:\n{resume}\n")));
    }

    #[test]
    fn test_prompt_restricts_scope() {
        let prompt = build_system_prompt("x");
        assert!(prompt.contains("ONLY on the resume"));
        assert!(prompt.contains("politely say you can only answer questions about them"));
    }
}
