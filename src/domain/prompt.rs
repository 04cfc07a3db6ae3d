//! Prompt templates for the pipeline stages.
//!
//! Templates are rendered with a strict minijinja environment so a missing
//! variable is a hard error, not silently empty context. The wording of
//! each template is part of the content contract with the completion model:
//! the style constraints are instructions to the model, not structure the
//! pipeline enforces.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, Concept, MemoryWindow, Outline};

const PLAN_TEMPLATE: &str = "\
You are a master strategist and editor mentoring a great leader. Analyze the following core concept and break it down into a logical sequence of exactly {{ count }} core principles.
These principles must be aphoristic, concise, and profound, suitable for a timeless strategy book. They should build upon each other logically.

**Core Concept:**
---
{{ concept }}
---

Return ONLY a JSON-formatted list of strings. Each string is a chapter title/principle. The JSON must start with '[' and end with ']'.
";

const CHAPTER_TEMPLATE: &str = "\
You are a master strategist and philosopher. Your writing style is direct, profound, and timeless, like Marcus Aurelius or Sun Tzu.

**WRITING INSTRUCTIONS:**
- Write in short, declarative sentences. State principles directly.
- Do not use modern business jargon. Write as if you are a philosopher from 2000 years ago.
- NEVER use the first-person \"I\".
- Do NOT use repetitive introductory phrases (\"In this chapter...\").
- The tone should be authoritative and wise.

**CONTEXT & YOUR TASK:**

1. **Book's Core Philosophy:** {{ concept }}

2. **Full Book Outline:**
{{ numbered_outline }}

3. **Recent Chapter Summaries (What you just wrote about):**
{{ summaries }}

4. **Full Text of Preceding Chapter (Chapter {{ previous_number }}):**
---
{{ previous_text }}
---

5. **Upcoming Chapter Topics (Do NOT cover these in detail now):**
{{ look_ahead }}

**YOUR CURRENT CHAPTER:**
Based on all the context above, write a concise and powerful chapter (200-300 words) for the principle: **\"{{ number }}. {{ principle }}\"**.
Ensure it flows logically from the preceding chapter but stands as its own powerful lesson. Do not repeat concepts from the recent summaries.
";

const SUMMARY_TEMPLATE: &str = "\
Summarize the core message of this text in one single, concise sentence:

{{ chapter_text }}
";

const SYNTHESIS_TEMPLATE: &str = "\
You are a historical scholar and senior editor. Your task is to provide two final sections for a strategy book, matching its timeless, philosophical tone.

**Core Philosophy of the Book:**
{{ concept }}

**Book Outline (Principles Covered):**
{{ outline_titles }}
---
**Full Book Text:**
{{ body }}
---

**Your Tasks:**
1. **Concluding Chapter:** Write a brief, powerful concluding chapter titled \"### On Mastery and the Path Forward\". It should synthesize the core philosophy into a final, memorable thought.
2. **References Section:** Write a section titled \"### Historical Precedents & Further Reading\". Suggest classic texts, historical events, or philosophical concepts that parallel the strategies discussed.
";

fn render(
    name: &'static str,
    template: &str,
    ctx: minijinja::Value,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx)
        .map_err(|err| AppError::PromptRender { template: name, details: err.to_string() })
}

/// Prompt for the outline stage.
pub fn plan(concept: &Concept, count: usize) -> Result<String, AppError> {
    render(
        "plan",
        PLAN_TEMPLATE,
        context! { concept => concept.as_str(), count => count },
    )
}

/// Prompt for writing the chapter at `index` (0-based) under the given
/// memory window.
pub fn chapter(
    concept: &Concept,
    outline: &Outline,
    window: &MemoryWindow,
    index: usize,
    principle: &str,
) -> Result<String, AppError> {
    let numbered_outline = outline
        .titles()
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {}", i + 1, title))
        .collect::<Vec<_>>()
        .join("\n");

    render(
        "chapter",
        CHAPTER_TEMPLATE,
        context! {
            concept => concept.as_str(),
            numbered_outline => numbered_outline,
            summaries => window.recent_summaries,
            previous_number => index,
            previous_text => window.previous_text,
            look_ahead => window.look_ahead,
            number => index + 1,
            principle => principle,
        },
    )
}

/// Prompt for the one-sentence chapter summary.
pub fn summary(chapter_text: &str) -> Result<String, AppError> {
    render("summary", SUMMARY_TEMPLATE, context! { chapter_text => chapter_text })
}

/// Prompt for the closing synthesis sections.
pub fn synthesis(concept: &Concept, outline: &Outline, body: &str) -> Result<String, AppError> {
    render(
        "synthesis",
        SYNTHESIS_TEMPLATE,
        context! {
            concept => concept.as_str(),
            outline_titles => outline.titles().join(", "),
            body => body,
        },
    )
}
