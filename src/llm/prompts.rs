//! Natural-language instruction builders for the label backends.

/// Instruction for unconstrained topic discovery against the local inference
/// server.
pub fn topics_prompt(samples: &[String], num_topics: usize) -> String {
    format!(
        r#"You are an expert in analyzing product reviews and extracting key topics.
I have a collection of product reviews, and I need you to identify the {num_topics} most prominent topics discussed in these reviews.
For each topic, provide a short, descriptive name and list the top 5 keywords associated with that topic.
Here's a sample of the reviews:

{sample}

Please format your response as a JSON object with the following structure:
{{
    "topics": [
        {{
            "name": "Topic Name",
            "keywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"]
        }},
        ...
    ]
}}"#,
        sample = samples.join(" ")
    )
}

/// Instruction for aspect discovery constrained to the fixed domain
/// vocabulary. Requires every aspect to appear and every review to be
/// conceptually assignable to one of them.
pub fn aspects_prompt(samples: &[String], aspects: &[&str]) -> String {
    format!(
        r#"You are an expert in analyzing product reviews and extracting key aspects of products.
I have a collection of product reviews, and I need you to identify the aspects discussed in these reviews.
You MUST ONLY use the following aspect categories:
{vocabulary}

For each review, you MUST assign it to one of the above aspects. If a review doesn't clearly fit into one category, assign it to the most relevant aspect based on context.

For each aspect, provide:
1. The aspect name (which MUST be one of the categories listed above)
2. A list of the top 5 keywords or phrases associated with that aspect
3. The overall sentiment (positive, negative, or neutral) for that aspect based on the reviews

Guidelines:
- You MUST use ONLY the aspect categories provided above. Do not create or use any other categories.
- Every review MUST be assigned to one of the given aspects. Do not use "Other" or similar categories.
- The keywords should reflect the specific terms used in the reviews to discuss that aspect.
- The sentiment should accurately reflect the opinions in the reviews. Do not default to neutral - use positive or negative when appropriate.

Here's a sample of the reviews:

{sample}

Please format your response ONLY as a JSON object with the following structure, without any additional text:
{{
    "aspects": [
        {{
            "name": "aspect_name",
            "keywords": ["keyword1", "keyword2", "keyword3", "keyword4", "keyword5"],
            "sentiment": "positive/negative/neutral"
        }},
        ...
    ]
}}
Ensure that all aspects from the provided list are included in your response, even if they have neutral sentiment and generic keywords."#,
        vocabulary = aspects.join(", "),
        sample = samples.join(" ")
    )
}
