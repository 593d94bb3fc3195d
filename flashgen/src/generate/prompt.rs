//! Prompt construction for flashcard generation.

/// Build the generation prompt: subject, requested card range, formatting
/// instructions, a JSON schema example, and the cleaned content appended
/// verbatim at the end.
pub fn build_prompt(content: &str, subject: &str, min_cards: usize, max_cards: usize) -> String {
    format!(
        r#"You are an expert educational content creator specializing in {subject}. Your task is to create high-quality flashcards from the provided educational content.

INSTRUCTIONS:
1. Generate between {min_cards} and {max_cards} flashcards
2. Each flashcard should have a clear, concise question and a complete, accurate answer
3. Focus on key concepts, definitions, processes, and important facts
4. Make questions specific and answers self-contained
5. Vary question types (definitions, explanations, examples, comparisons)
6. Ensure answers are factually correct and educationally valuable

FORMAT YOUR RESPONSE EXACTLY AS FOLLOWS:
```json
{{
  "flashcards": [
    {{
      "id": 1,
      "question": "What is [concept]?",
      "answer": "Complete answer explaining the concept clearly.",
      "difficulty": "Easy|Medium|Hard",
      "topic": "Specific topic area"
    }},
    {{
      "id": 2,
      "question": "How does [process] work?",
      "answer": "Step-by-step explanation of the process.",
      "difficulty": "Easy|Medium|Hard",
      "topic": "Specific topic area"
    }}
  ]
}}
```

EDUCATIONAL CONTENT TO PROCESS:
{content}

Generate the flashcards now in the exact JSON format specified above:"#
    )
}
