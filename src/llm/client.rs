use anyhow::Result;
use async_trait::async_trait;

/// Seam between the generation pipeline and a concrete model provider.
/// Implementations are fallible; the degradation policy above this layer
/// turns any failure into fallback-template output.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// A backend that returns a canned, fenced response without touching the
/// network. Used by `--dry-run` and by tests.
pub struct MockBackend;

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(r#"Here is the generated page:

```tsx
"use client";

import { useAppStore } from "@/lib/store";

export default function GeneratedUI() {
  const { quantity, increment } = useAppStore();
  console.log("GeneratedUI render", quantity);
  return <button onClick={increment}>Count: {quantity}</button>;
}
```
"#
        .to_string())
    }
}
