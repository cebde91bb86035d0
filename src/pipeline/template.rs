// Hand-authored fallback page, served whenever the model path is
// unavailable. Deterministic and independent of the requested app idea.

/// The static fallback TSX source. Complete and immediately runnable: hero
/// section, feature cards, a call-to-action, three store-backed display
/// fields, and three wired handlers (increment, add item, server-side
/// calculation). Carries every marker the artifact validator checks for.
pub fn fallback_template() -> String {
    FALLBACK_TEMPLATE.trim_start().to_string()
}

const FALLBACK_TEMPLATE: &str = r#"
"use client";

import { useAppStore } from "@/lib/store";
import { Button } from "@/components/ui/button";
import { Card, CardContent, CardHeader, CardTitle } from "@/components/ui/card";
import { Badge } from "@/components/ui/badge";
import { Sparkles, Package, Calculator } from "lucide-react";

export default function GeneratedUI() {
  const { quantity, items, total, increment, addItem, setTotal } = useAppStore();

  console.log("GeneratedUI render", { quantity, itemCount: items.length, total });

  const handleIncrement = () => {
    increment();
  };

  const handleAddItem = () => {
    addItem(`Item ${items.length + 1}`);
  };

  const handleCalculate = async () => {
    const response = await fetch("/api/calculate", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ quantity, itemCount: items.length }),
    });
    const data = await response.json();
    setTotal(data.total);
  };

  return (
    <main className="min-h-screen bg-slate-50 px-6 py-12">
      <section className="mx-auto max-w-3xl text-center">
        <Badge className="mb-4">
          <Sparkles className="mr-1 h-3 w-3" />
          Generated App
        </Badge>
        <h1 className="text-4xl font-bold tracking-tight">Your App Is Ready</h1>
        <p className="mt-3 text-slate-600">
          A starter interface wired to live application state.
        </p>
      </section>

      <section className="mx-auto mt-10 grid max-w-3xl gap-4 sm:grid-cols-3">
        <Card>
          <CardHeader>
            <CardTitle className="flex items-center gap-2 text-base">
              <Package className="h-4 w-4" /> Quantity
            </CardTitle>
          </CardHeader>
          <CardContent>
            <p className="text-3xl font-semibold">{quantity}</p>
            <Button className="mt-3 w-full" onClick={handleIncrement}>
              Increment
            </Button>
          </CardContent>
        </Card>

        <Card>
          <CardHeader>
            <CardTitle className="text-base">Items</CardTitle>
          </CardHeader>
          <CardContent>
            <p className="text-3xl font-semibold">{items.length}</p>
            <Button className="mt-3 w-full" variant="outline" onClick={handleAddItem}>
              Add Item
            </Button>
          </CardContent>
        </Card>

        <Card>
          <CardHeader>
            <CardTitle className="flex items-center gap-2 text-base">
              <Calculator className="h-4 w-4" /> Total
            </CardTitle>
          </CardHeader>
          <CardContent>
            <p className="text-3xl font-semibold">{total}</p>
            <Button className="mt-3 w-full" variant="secondary" onClick={handleCalculate}>
              Calculate
            </Button>
          </CardContent>
        </Card>
      </section>

      <section className="mx-auto mt-12 max-w-3xl rounded-2xl bg-slate-900 p-8 text-center text-white">
        <h2 className="text-2xl font-semibold">Make it yours</h2>
        <p className="mt-2 text-slate-300">
          Replace this starter with a model-generated page once an API key is configured.
        </p>
        <Button className="mt-4" variant="secondary" onClick={handleIncrement}>
          Get Started
        </Button>
      </section>
    </main>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_deterministic() {
        assert_eq!(fallback_template(), fallback_template());
    }

    #[test]
    fn test_template_contains_all_validation_markers() {
        let template = fallback_template();
        assert!(template.contains("\"use client\""));
        assert!(template.contains("export default"));
        assert!(template.contains("useAppStore"));
        assert!(template.contains("onClick"));
        assert!(template.contains("console.log"));
    }

    #[test]
    fn test_template_has_three_handlers() {
        let template = fallback_template();
        assert!(template.contains("handleIncrement"));
        assert!(template.contains("handleAddItem"));
        assert!(template.contains("handleCalculate"));
        assert!(template.contains("/api/calculate"));
    }

    #[test]
    fn test_template_starts_with_client_directive() {
        assert!(fallback_template().starts_with("\"use client\";"));
    }
}
