// Prompt template for UI generation. Pure string construction, no I/O.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GenerationOptions;

/// Visual theme requested of the model. Only affects prompt wording; the
/// fallback template ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Minimal,
    Professional,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
            Theme::Professional => "professional",
        }
    }

    fn style_guidance(&self) -> &'static str {
        match self {
            Theme::Modern => {
                "a modern look: gradient accents, rounded-2xl cards, generous whitespace"
            }
            Theme::Minimal => "a minimal look: monochrome palette, thin borders, no decoration",
            Theme::Professional => {
                "a professional look: muted blues and grays, dense information layout"
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the instruction text sent to the model. Deterministic for a given
/// options value and total for any input: an empty app idea still yields a
/// generic, well-formed prompt.
pub fn build_prompt(options: &GenerationOptions) -> String {
    let app_idea = if options.app_idea.trim().is_empty() {
        "a simple demo application"
    } else {
        options.app_idea.trim()
    };

    let features = if options.features.is_empty() {
        String::new()
    } else {
        format!(
            "\nMake sure these features are present:\n{}\n",
            options
                .features
                .iter()
                .map(|f| format!("- {}", f))
                .collect::<Vec<_>>()
                .join("\n")
        )
    };

    format!(
        r#"You are generating a single-file Next.js page component for: {app_idea}.

Requirements:
- Start the file with the "use client" directive; everything renders client-side.
- Use only shadcn/ui components (Button, Card, CardContent, CardHeader, CardTitle, Input, Badge) and lucide-react icons for visuals.
- Style it with Tailwind classes for {style}.
- Display application state from the zustand store via the useAppStore hook; show at least three store-backed values (counts, totals, derived fields).
- Wire onClick handlers to store actions so every interactive element mutates or reads that state.
- Include a console.log diagnostic inside the component body so renders are traceable.
- Export the component as a default export named GeneratedUI.
{features}
Return ONLY the finished TSX source file, nothing else."#,
        app_idea = app_idea,
        style = options.theme.style_guidance(),
        features = features,
    )
}
